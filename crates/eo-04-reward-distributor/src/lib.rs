//! # eo-04-reward-distributor
//!
//! Pays out per-account allocations against the root sealed by the epoch
//! oracle.
//!
//! ```text
//! claim(epoch, index, account, amount, proof)
//!     │
//!     ├── epoch active?            ──no──→ EPOCH_NOT_ACTIVE
//!     ├── bit (epoch, index) set?  ──yes─→ ALREADY_CLAIMED
//!     ├── proof → sealed root?     ──no──→ MERKLE_PROOF_VERIFY_FAILED
//!     ├── transfer amount to account
//!     └── set bit, emit Claim
//! ```
//!
//! `batch_claim` applies the same pipeline to at most 15 requests, skipping
//! and counting failures instead of aborting.

pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

pub use domain::allocation::leaf_hash;
pub use domain::{
    Allocation, AllocationTree, BatchClaimReport, ClaimBitmap, ClaimOutcome, ClaimRequest,
};
pub use error::{DistributorError, DistributorResult};
pub use ports::{RewardDistributorApi, SealedRootProvider};
pub use service::{DistributorConfig, RewardDistributorService};
