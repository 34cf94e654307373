//! # eo-02-observer-staking
//!
//! Stake lifecycle of observers and the eligibility gate used for voting.
//!
//! ## Lifecycle
//!
//! ```text
//!           stake()                 extend(amount, blocks)
//! [NONE] ───────────→ [LOCKED] ←──────────────────────┐
//!    ↑                   │  └─────────────────────────┘
//!    │                   │
//!    ├──── unstake() ────┤  block >= expire_block
//!    └───── slash() ─────┘  governance only, burns + refunds remainder
//! ```
//!
//! ## Eligibility
//!
//! An observer may vote while `amount >= stake_amount` and
//! `block < expire_block - stake_duration_threshold`. Both values are read
//! from the parameter store on every query, so a parameter change affects
//! existing stakes immediately.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use domain::Stake;
pub use error::{StakingError, StakingResult};
pub use ports::{ObserverStakingApi, StakeParameterProvider};
pub use service::ObserverStakingService;
