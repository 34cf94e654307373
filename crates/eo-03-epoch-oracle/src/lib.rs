//! # eo-03-epoch-oracle
//!
//! Observers vote on one Merkle root per epoch; a quorum of matching votes
//! seals it, but never before the epoch's required end block.
//!
//! ## Sealing
//!
//! ```text
//!  submit_merkle_root(e, R)        votes < threshold
//! [UNSEALED(e)] ───────────────→ [UNSEALED(e)]
//!       │
//!       │ votes >= threshold && block >= required_end_block(e)
//!       ▼
//!  [SEALED(e)] ── SealEpoch(e, R) ──→ Event Bus
//!       │
//!       └── required_end_block(e + 1) = required_end_block(e) + epoch_duration
//! ```
//!
//! Epochs seal strictly in order: only `last_epoch() + 1` accepts votes.
//! A vote that would reach quorum early is rejected outright and is not
//! counted.
//!
//! ## Claim window
//!
//! Only the latest sealed epoch is active, for `epoch_duration` blocks
//! after its sealing vote. The reward distributor consults
//! [`EpochOracleApi::is_epoch_active`] before verifying any proof.

pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

pub use domain::{EpochRecord, SubmissionOutcome};
pub use error::{OracleError, OracleResult};
pub use ports::{EpochOracleApi, ObserverEligibility, OpenAdmission, SealParameterProvider};
pub use service::{EpochOracleService, OracleConfig};
