//! Error types for the reward distributor

use shared_types::{EpochNumber, LedgerError};
use thiserror::Error;

/// Reward distributor errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistributorError {
    /// Epoch is unsealed, superseded, or past its claim window
    #[error("Epoch {epoch} is not active")]
    EpochNotActive { epoch: EpochNumber },

    /// Allocation already redeemed
    #[error("Index {index} of epoch {epoch} already claimed")]
    AlreadyClaimed { epoch: EpochNumber, index: u64 },

    /// Proof does not lead to the sealed root
    #[error("Merkle proof verification failed for index {index} of epoch {epoch}")]
    MerkleProofVerifyFailed { epoch: EpochNumber, index: u64 },

    /// Batch larger than the configured cap
    #[error("Batch of {requested} claims exceeds maximum {max}")]
    MaxBatchClaimExceeded { requested: usize, max: usize },

    /// Token ledger refused the payout
    #[error(transparent)]
    TransferFailed(#[from] LedgerError),
}

impl DistributorError {
    /// Revert reason as surfaced to clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EpochNotActive { .. } => "EPOCH_NOT_ACTIVE",
            Self::AlreadyClaimed { .. } => "ALREADY_CLAIMED",
            Self::MerkleProofVerifyFailed { .. } => "MERKLE_PROOF_VERIFY_FAILED",
            Self::MaxBatchClaimExceeded { .. } => "MAX_BATCH_CLAIM_EXCEED",
            Self::TransferFailed(err) => err.reason(),
        }
    }
}

/// Result type for distributor operations
pub type DistributorResult<T> = Result<T, DistributorError>;
