//! Driving Ports (API - Inbound)

use crate::domain::{BatchClaimReport, ClaimRequest};
use crate::error::DistributorResult;
use shared_types::{CallContext, EpochNumber};

/// Reward distributor API
pub trait RewardDistributorApi: Send + Sync {
    /// Redeem one allocation, paying `request.amount` to `request.account`.
    ///
    /// Emits `Claim(epoch, index, account, amount)`.
    fn claim(&self, ctx: &CallContext, request: &ClaimRequest) -> DistributorResult<()>;

    /// Redeem up to the configured cap of allocations.
    ///
    /// An oversized batch fails before any item is processed. Otherwise
    /// failing items are skipped and reported; the call itself succeeds and
    /// emits `BatchClaim(requested, succeeded)` after the per-item `Claim`s.
    fn batch_claim(
        &self,
        ctx: &CallContext,
        requests: &[ClaimRequest],
    ) -> DistributorResult<BatchClaimReport>;

    fn is_claimed(&self, epoch: EpochNumber, index: u64) -> bool;
}
