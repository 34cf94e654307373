//! Error types for the epoch oracle

use shared_types::{Address, BlockNumber, EpochNumber, Hash};
use thiserror::Error;

/// Epoch oracle errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// Caller does not currently satisfy the staking gate
    #[error("Observer {observer:?} is not eligible to vote")]
    ObserverNotEligible { observer: Address },

    /// Epoch is not the next one to seal
    #[error("Invalid epoch {epoch}, expected {expected}")]
    EpochInvalid {
        epoch: EpochNumber,
        expected: EpochNumber,
    },

    /// Epoch was sealed earlier
    #[error("Epoch {epoch} already sealed")]
    EpochAlreadySealed { epoch: EpochNumber },

    /// Observer already voted in this epoch
    #[error("Observer {observer:?} already voted in epoch {epoch}")]
    ObserverVotedAlready {
        epoch: EpochNumber,
        observer: Address,
    },

    /// Submitted root differs from the epoch's candidate
    #[error("Root mismatch for epoch {epoch}")]
    EpochRootMismatch {
        epoch: EpochNumber,
        candidate: Hash,
        submitted: Hash,
    },

    /// Quorum would be reached before the required end block
    #[error("Epoch {epoch} not ready for sealing until block {required_end_block} (current {current_block})")]
    EpochNotReadyForSealing {
        epoch: EpochNumber,
        required_end_block: BlockNumber,
        current_block: BlockNumber,
    },
}

impl OracleError {
    /// Revert reason as surfaced to clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ObserverNotEligible { .. } => "OBSERVER_NOT_ELIGIBLE",
            Self::EpochInvalid { .. } => "EPOCH_INVALID",
            Self::EpochAlreadySealed { .. } => "EPOCH_ALREADY_SEALED",
            Self::ObserverVotedAlready { .. } => "OBSERVER_VOTED_ALREADY",
            Self::EpochRootMismatch { .. } => "EPOCH_ROOT_MISMATCH",
            Self::EpochNotReadyForSealing { .. } => "EPOCH_NOT_READY_FOR_SEALING",
        }
    }
}

/// Result type for oracle operations
pub type OracleResult<T> = Result<T, OracleError>;
