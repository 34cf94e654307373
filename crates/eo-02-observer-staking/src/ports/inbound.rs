//! Driving Ports (API - Inbound)

use crate::domain::Stake;
use crate::error::StakingResult;
use shared_types::{Address, Amount, BlockNumber, CallContext};

/// Observer staking API
pub trait ObserverStakingApi: Send + Sync {
    /// Lock the current stake amount for the caller.
    ///
    /// Expiry is `ctx.block_number + 1 + stake_duration`. Emits
    /// `ObserverStaked`.
    fn stake(&self, ctx: &CallContext) -> StakingResult<Stake>;

    /// Add tokens and blocks to the caller's existing stake.
    ///
    /// Emits `ObserverStaked` carrying the cumulative totals.
    fn extend(
        &self,
        ctx: &CallContext,
        add_amount: Amount,
        add_duration: BlockNumber,
    ) -> StakingResult<Stake>;

    /// Withdraw the whole stake once expired. Returns the amount paid out.
    fn unstake(&self, ctx: &CallContext) -> StakingResult<Amount>;

    /// Governance-only forfeiture of `amount` from `observer`.
    ///
    /// Burns `amount`, returns the remainder and always clears the record.
    fn slash(&self, ctx: &CallContext, observer: Address, amount: Amount) -> StakingResult<()>;

    /// Whether `observer` may vote at `block` under the current tunables.
    fn is_observer_eligible(&self, observer: &Address, block: BlockNumber) -> bool;

    /// Stake record of `observer`; the empty record if none.
    fn stake_of(&self, observer: &Address) -> Stake;

    /// Sum of all locked stakes.
    fn total_staked(&self) -> Amount;
}
