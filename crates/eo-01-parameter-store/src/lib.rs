//! # eo-01-parameter-store
//!
//! Admin-owned registry of every tunable the oracle network reads.
//!
//! ## Overview
//!
//! - **Admin**: single authority allowed to change anything, including itself
//! - **Quorum**: `epoch_seal_threshold` matching votes seal an epoch
//! - **Cadence**: `epoch_duration` blocks between required end blocks
//! - **Stake**: amount, lock duration and pre-expiry eligibility cutoff
//!
//! ```text
//! Admin ──set_*──→ Parameter Store ──New<Field>(old, new)──→ Event Bus
//!                       │
//!                       ├── stake tunables ──→ Observer Staking (2)
//!                       └── quorum/cadence ──→ Epoch Oracle (3)
//! ```
//!
//! Readers never cache: staking eligibility and oracle sealing read the
//! current value on every call.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use domain::OracleParameters;
pub use error::{ParameterError, ParameterResult};
pub use ports::{ParameterAdminApi, ParameterReader};
pub use service::ParameterStore;
