//! Per-observer stake record

use serde::{Deserialize, Serialize};
use shared_types::{Amount, BlockNumber, StakeParameters};

/// Tokens locked by one observer.
///
/// `amount > 0` if and only if `expire_block > 0`. The default value is the
/// "no stake" record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stake {
    /// Tokens currently locked.
    pub amount: Amount,
    /// Block at or after which the stake may be withdrawn.
    pub expire_block: BlockNumber,
}

impl Stake {
    /// Fresh stake opened at `block` with the current tunables.
    pub fn open(params: &StakeParameters, block: BlockNumber) -> Self {
        Self {
            amount: params.amount,
            expire_block: block.saturating_add(1).saturating_add(params.duration),
        }
    }

    /// True for the cleared record.
    pub fn is_empty(&self) -> bool {
        self.amount.is_zero()
    }

    /// Withdrawal is allowed from `expire_block` on.
    pub fn is_expired(&self, block: BlockNumber) -> bool {
        block >= self.expire_block
    }

    /// Voting rights under the given tunables.
    ///
    /// Eligibility ends `threshold` blocks before expiry, so an observer has
    /// to extend ahead of time to keep voting.
    pub fn is_eligible(&self, params: &StakeParameters, block: BlockNumber) -> bool {
        !self.is_empty()
            && self.amount >= params.amount
            && block < self.expire_block.saturating_sub(params.threshold)
    }
}
