//! Reward Distributor Service
//!
//! Claim checks run in order: epoch active, index unclaimed, proof valid.
//! The payout happens before the bit is set; a failed transfer therefore
//! leaves the allocation claimable. Events go out while the bitmap lock is
//! held, so they reach the bus in commit order.

use crate::domain::{BatchClaimReport, ClaimBitmap, ClaimOutcome, ClaimRequest};
use crate::domain::allocation::leaf_hash;
use crate::error::{DistributorError, DistributorResult};
use crate::metrics;
use crate::ports::inbound::RewardDistributorApi;
use crate::ports::outbound::SealedRootProvider;
use parking_lot::RwLock;
use shared_bus::{EventPublisher, OracleEvent};
use shared_crypto::verify_sorted_proof;
use shared_types::{short_address, Address, CallContext, EpochNumber, TokenLedger};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Distributor configuration
#[derive(Clone, Debug)]
pub struct DistributorConfig {
    /// Largest accepted batch.
    pub max_batch_claim: usize,
}

impl Default for DistributorConfig {
    fn default() -> Self {
        Self { max_batch_claim: 15 }
    }
}

/// Reward distributor implementation
///
/// `account` is the ledger address funding every payout.
pub struct RewardDistributorService<R, L>
where
    R: SealedRootProvider,
    L: TokenLedger,
{
    config: DistributorConfig,
    account: Address,
    claimed: RwLock<ClaimBitmap>,
    roots: Arc<R>,
    ledger: Arc<L>,
    events: Arc<dyn EventPublisher>,
}

impl<R, L> RewardDistributorService<R, L>
where
    R: SealedRootProvider,
    L: TokenLedger,
{
    /// Create new distributor service
    pub fn new(
        config: DistributorConfig,
        account: Address,
        roots: Arc<R>,
        ledger: Arc<L>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            config,
            account,
            claimed: RwLock::new(ClaimBitmap::new()),
            roots,
            ledger,
            events,
        }
    }

    /// Ledger address funding payouts.
    pub fn account(&self) -> Address {
        self.account
    }

    pub fn config(&self) -> &DistributorConfig {
        &self.config
    }

    /// Validate and pay one claim against the locked bitmap.
    fn claim_locked(
        &self,
        claimed: &mut ClaimBitmap,
        ctx: &CallContext,
        request: &ClaimRequest,
    ) -> DistributorResult<OracleEvent> {
        let (epoch, index, account, amount) =
            (request.epoch, request.index, request.account, request.amount);

        if !self.roots.is_epoch_active(epoch, ctx.block_number) {
            return Err(DistributorError::EpochNotActive { epoch });
        }
        if claimed.is_claimed(epoch, index) {
            return Err(DistributorError::AlreadyClaimed { epoch, index });
        }

        let leaf = leaf_hash(index, &account, amount);
        let verified = self
            .roots
            .merkle_root(epoch)
            .is_some_and(|root| verify_sorted_proof(&request.proof, &root, &leaf));
        if !verified {
            return Err(DistributorError::MerkleProofVerifyFailed { epoch, index });
        }

        self.ledger.transfer(&self.account, &account, amount)?;
        claimed.set_claimed(epoch, index);

        Ok(OracleEvent::Claim {
            epoch,
            index,
            account,
            amount,
        })
    }

    fn log_rejection(&self, request: &ClaimRequest, err: &DistributorError) {
        metrics::record_claim_rejected(err.code());
        match err {
            DistributorError::MerkleProofVerifyFailed { .. } => warn!(
                epoch = request.epoch,
                index = request.index,
                account = %short_address(&request.account),
                "Claim rejected: invalid proof"
            ),
            _ => debug!(
                epoch = request.epoch,
                index = request.index,
                code = err.code(),
                "Claim rejected"
            ),
        }
    }

    fn publish_claim(&self, event: OracleEvent) {
        if let OracleEvent::Claim {
            epoch,
            index,
            account,
            amount,
        } = &event
        {
            info!(
                epoch,
                index,
                account = %short_address(account),
                amount = %amount,
                "Allocation claimed"
            );
        }
        metrics::record_claim();
        self.events.publish(event);
    }
}

impl<R, L> RewardDistributorApi for RewardDistributorService<R, L>
where
    R: SealedRootProvider,
    L: TokenLedger,
{
    fn claim(&self, ctx: &CallContext, request: &ClaimRequest) -> DistributorResult<()> {
        let mut claimed = self.claimed.write();
        match self.claim_locked(&mut claimed, ctx, request) {
            Ok(event) => {
                self.publish_claim(event);
                Ok(())
            }
            Err(err) => {
                self.log_rejection(request, &err);
                Err(err)
            }
        }
    }

    fn batch_claim(
        &self,
        ctx: &CallContext,
        requests: &[ClaimRequest],
    ) -> DistributorResult<BatchClaimReport> {
        let max = self.config.max_batch_claim;
        if requests.len() > max {
            warn!(requested = requests.len(), max, "Batch claim too large");
            return Err(DistributorError::MaxBatchClaimExceeded {
                requested: requests.len(),
                max,
            });
        }

        // Held until BatchClaim is out, so no other Claim lands inside the batch.
        let mut claimed = self.claimed.write();
        let mut outcomes = Vec::with_capacity(requests.len());
        for request in requests {
            match self.claim_locked(&mut claimed, ctx, request) {
                Ok(event) => {
                    self.publish_claim(event);
                    outcomes.push(ClaimOutcome::Claimed);
                }
                Err(err) => {
                    self.log_rejection(request, &err);
                    outcomes.push(ClaimOutcome::Skipped(err));
                }
            }
        }

        let report = BatchClaimReport::from_outcomes(outcomes);
        metrics::record_batch_claim();
        info!(
            requested = report.requested,
            succeeded = report.succeeded,
            "Batch claim processed"
        );
        self.events.publish(OracleEvent::BatchClaim {
            requested: report.requested,
            succeeded: report.succeeded,
        });
        Ok(report)
    }

    fn is_claimed(&self, epoch: EpochNumber, index: u64) -> bool {
        self.claimed.read().is_claimed(epoch, index)
    }
}
