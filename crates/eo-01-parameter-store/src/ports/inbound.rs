//! Driving Ports (API - Inbound)

use crate::domain::OracleParameters;
use crate::error::ParameterResult;
use shared_types::{Address, Amount, BlockNumber, CallContext, StakeParameters};

/// Read surface consumed by staking and the oracle.
///
/// Values are read on every use; nothing downstream caches them.
pub trait ParameterReader: Send + Sync {
    /// Current admin authority.
    fn admin(&self) -> Address;

    /// Matching votes required to seal an epoch.
    fn epoch_seal_threshold(&self) -> u64;

    /// Epoch length in blocks.
    fn epoch_duration(&self) -> BlockNumber;

    /// Tokens locked by a fresh stake.
    fn stake_amount(&self) -> Amount;

    /// Blocks a fresh stake stays locked.
    fn stake_duration(&self) -> BlockNumber;

    /// Blocks before expiry at which eligibility ends.
    fn stake_duration_threshold(&self) -> BlockNumber;

    /// Aggregate of the three stake tunables.
    fn stake_parameters(&self) -> StakeParameters;

    /// Every tunable at once.
    fn snapshot(&self) -> OracleParameters;
}

/// Admin-gated mutators.
///
/// Each setter fails with `AdminOnly` for any caller other than the current
/// admin and emits `New<Field>(old, new)` on success.
pub trait ParameterAdminApi: Send + Sync {
    /// Hand the admin role to `new_admin`.
    fn set_admin(&self, ctx: &CallContext, new_admin: Address) -> ParameterResult<()>;

    /// Change the sealing quorum.
    fn set_epoch_seal_threshold(&self, ctx: &CallContext, threshold: u64) -> ParameterResult<()>;

    /// Change the epoch length.
    fn set_epoch_duration(&self, ctx: &CallContext, duration: BlockNumber) -> ParameterResult<()>;

    /// Change the stake amount.
    fn set_stake_amount(&self, ctx: &CallContext, amount: Amount) -> ParameterResult<()>;

    /// Change the lock duration of fresh stakes.
    fn set_stake_duration(&self, ctx: &CallContext, duration: BlockNumber) -> ParameterResult<()>;

    /// Change the pre-expiry eligibility cutoff.
    fn set_stake_duration_threshold(
        &self,
        ctx: &CallContext,
        threshold: BlockNumber,
    ) -> ParameterResult<()>;
}
