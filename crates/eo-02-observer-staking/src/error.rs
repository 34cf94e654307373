//! Error types for observer staking

use shared_types::{Address, Amount, BlockNumber, LedgerError};
use thiserror::Error;

/// Observer staking errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StakingError {
    /// Withdrawal attempted before the expiry block
    #[error("Stake not expired: expires at block {expire_block}, current block {current_block}")]
    StakeNotExpired {
        expire_block: BlockNumber,
        current_block: BlockNumber,
    },

    /// `extend` (or `unstake`) without a stake
    #[error("Cannot extend non-existent stake of {observer:?}")]
    CannotExtendNonExistentStake { observer: Address },

    /// `stake` while already holding one
    #[error("Observer {observer:?} already holds a stake")]
    StakeAlreadyExists { observer: Address },

    /// Slash attempted by someone other than governance
    #[error("Execution not authorized for {caller:?}")]
    ExecutionNotAuthorized { caller: Address },

    /// Slash amount exceeds the stake
    #[error("Invalid slash amount {requested}, staked {staked}")]
    InvalidSlashAmount { requested: Amount, staked: Amount },

    /// Token ledger refused the transfer or burn
    #[error(transparent)]
    TransferFailed(#[from] LedgerError),
}

impl StakingError {
    /// Revert reason as surfaced to clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::StakeNotExpired { .. } => "ObserverStaking__StakeNotExpired",
            Self::CannotExtendNonExistentStake { .. } => {
                "ObserverStaking__CannotExtendNonExistentStake"
            }
            Self::StakeAlreadyExists { .. } => "ObserverStaking__StakeAlreadyExists",
            Self::ExecutionNotAuthorized { .. } => "ObserverStaking__ExecutionNotAuthorized",
            Self::InvalidSlashAmount { .. } => "ObserverStaking__InvalidSlashAmount",
            Self::TransferFailed(err) => err.reason(),
        }
    }
}

/// Result type for staking operations
pub type StakingResult<T> = Result<T, StakingError>;
