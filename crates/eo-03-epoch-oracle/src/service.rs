//! Epoch Oracle Service - vote intake and sealing
//!
//! Votes are accepted only for `last_epoch + 1`. Guards run in a fixed
//! order against current state, and nothing is written until all of them
//! pass:
//!
//! 1. caller eligible
//! 2. epoch not already sealed
//! 3. epoch is the next one
//! 4. caller has not voted in it
//! 5. root matches the candidate
//! 6. if this vote reaches quorum, the required end block has been reached
//!
//! The eligibility query runs inside the oracle's critical section, so the
//! lock order is oracle, then staking, then parameters.

use crate::domain::{EpochRecord, SubmissionOutcome};
use crate::error::{OracleError, OracleResult};
use crate::metrics;
use crate::ports::inbound::EpochOracleApi;
use crate::ports::outbound::{ObserverEligibility, SealParameterProvider};
use parking_lot::RwLock;
use shared_bus::{EventPublisher, OracleEvent};
use shared_types::{
    short_address, short_hash, Address, BlockNumber, CallContext, EpochNumber, Hash,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Oracle configuration
#[derive(Clone, Debug, Default)]
pub struct OracleConfig {
    /// Time gate of epoch 1, usually the deployment block.
    pub initial_required_end_block: BlockNumber,
}

struct OracleState {
    last_epoch: EpochNumber,
    next_required_end_block: BlockNumber,
    epochs: HashMap<EpochNumber, EpochRecord>,
}

impl OracleState {
    fn new(config: &OracleConfig) -> Self {
        Self {
            last_epoch: 0,
            next_required_end_block: config.initial_required_end_block,
            epochs: HashMap::new(),
        }
    }

    fn is_sealed(&self, epoch: EpochNumber) -> bool {
        epoch != 0 && epoch <= self.last_epoch
    }
}

/// Epoch oracle implementation
pub struct EpochOracleService<P, E>
where
    P: SealParameterProvider,
    E: ObserverEligibility,
{
    state: RwLock<OracleState>,
    params: Arc<P>,
    eligibility: Arc<E>,
    events: Arc<dyn EventPublisher>,
}

impl<P, E> EpochOracleService<P, E>
where
    P: SealParameterProvider,
    E: ObserverEligibility,
{
    /// Create new oracle service
    pub fn new(
        config: OracleConfig,
        params: Arc<P>,
        eligibility: Arc<E>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        info!(
            initial_required_end_block = config.initial_required_end_block,
            "Epoch oracle initialized"
        );
        Self {
            state: RwLock::new(OracleState::new(&config)),
            params,
            eligibility,
            events,
        }
    }

    fn try_submit(
        &self,
        ctx: &CallContext,
        epoch: EpochNumber,
        root: Hash,
    ) -> OracleResult<SubmissionOutcome> {
        let observer = ctx.caller;
        let mut state = self.state.write();

        // Checked under the oracle lock so a concurrent slash or unstake
        // orders entirely before or after this vote.
        if !self.eligibility.is_eligible(&observer, ctx.block_number) {
            return Err(OracleError::ObserverNotEligible { observer });
        }
        if state.is_sealed(epoch) {
            return Err(OracleError::EpochAlreadySealed { epoch });
        }
        let expected = state.last_epoch.saturating_add(1);
        if epoch != expected {
            return Err(OracleError::EpochInvalid { epoch, expected });
        }

        // Nothing is inserted until every guard has passed.
        let fresh;
        let record = match state.epochs.get(&epoch) {
            Some(record) => record,
            None => {
                fresh = EpochRecord::new(state.next_required_end_block);
                &fresh
            }
        };

        if record.has_voted(&observer) {
            return Err(OracleError::ObserverVotedAlready { epoch, observer });
        }
        if let Some(candidate) = record.candidate_root.filter(|c| *c != root) {
            return Err(OracleError::EpochRootMismatch {
                epoch,
                candidate,
                submitted: root,
            });
        }

        let votes = record.vote_count() + 1;
        let threshold = self.params.epoch_seal_threshold();
        let reaches_quorum = votes >= threshold;
        let required_end_block = record.required_end_block;

        if reaches_quorum && !record.is_time_gate_open(ctx.block_number) {
            return Err(OracleError::EpochNotReadyForSealing {
                epoch,
                required_end_block,
                current_block: ctx.block_number,
            });
        }

        let record = state
            .epochs
            .entry(epoch)
            .or_insert_with(|| EpochRecord::new(required_end_block));
        record.voters.insert(observer);
        record.candidate_root.get_or_insert(root);
        metrics::record_vote_accepted();

        if !reaches_quorum {
            debug!(
                epoch,
                observer = %short_address(&observer),
                votes,
                threshold,
                "Vote recorded"
            );
            return Ok(SubmissionOutcome::Recorded { votes, threshold });
        }

        record.sealed_at = Some(ctx.block_number);
        state.last_epoch = epoch;
        state.next_required_end_block =
            required_end_block.saturating_add(self.params.epoch_duration());

        metrics::record_epoch_sealed(epoch);
        info!(
            epoch,
            root = %short_hash(&root),
            block = ctx.block_number,
            next_required_end_block = state.next_required_end_block,
            "Epoch sealed"
        );
        // Published under the lock so SealEpoch events reach the bus in epoch order.
        self.events.publish(OracleEvent::SealEpoch { epoch, root });
        Ok(SubmissionOutcome::Sealed { root })
    }
}

impl<P, E> EpochOracleApi for EpochOracleService<P, E>
where
    P: SealParameterProvider,
    E: ObserverEligibility,
{
    fn submit_merkle_root(
        &self,
        ctx: &CallContext,
        epoch: EpochNumber,
        root: Hash,
    ) -> OracleResult<SubmissionOutcome> {
        self.try_submit(ctx, epoch, root).map_err(|err| {
            metrics::record_vote_rejected(err.code());
            match &err {
                OracleError::ObserverVotedAlready { .. }
                | OracleError::EpochRootMismatch { .. }
                | OracleError::ObserverNotEligible { .. } => warn!(
                    epoch,
                    observer = %short_address(&ctx.caller),
                    code = err.code(),
                    "Vote rejected"
                ),
                _ => debug!(epoch, code = err.code(), "Vote rejected"),
            }
            err
        })
    }

    fn last_epoch(&self) -> EpochNumber {
        self.state.read().last_epoch
    }

    fn is_epoch_sealed(&self, epoch: EpochNumber) -> bool {
        self.state.read().is_sealed(epoch)
    }

    fn merkle_root(&self, epoch: EpochNumber) -> Option<Hash> {
        self.state
            .read()
            .epochs
            .get(&epoch)
            .and_then(EpochRecord::sealed_root)
    }

    fn is_epoch_active(&self, epoch: EpochNumber, block: BlockNumber) -> bool {
        let state = self.state.read();
        if epoch == 0 || epoch != state.last_epoch {
            return false;
        }
        let window = self.params.epoch_duration();
        state
            .epochs
            .get(&epoch)
            .and_then(|record| record.sealed_at)
            .is_some_and(|sealed_at| block < sealed_at.saturating_add(window))
    }

    fn required_end_block(&self, epoch: EpochNumber) -> Option<BlockNumber> {
        let state = self.state.read();
        match state.epochs.get(&epoch) {
            Some(record) => Some(record.required_end_block),
            None if epoch == state.last_epoch.saturating_add(1) => {
                Some(state.next_required_end_block)
            }
            None => None,
        }
    }

    fn next_required_end_block(&self) -> BlockNumber {
        self.state.read().next_required_end_block
    }

    fn vote_count(&self, epoch: EpochNumber) -> u64 {
        self.state
            .read()
            .epochs
            .get(&epoch)
            .map_or(0, EpochRecord::vote_count)
    }

    fn has_voted(&self, epoch: EpochNumber, observer: &Address) -> bool {
        self.state
            .read()
            .epochs
            .get(&epoch)
            .is_some_and(|record| record.has_voted(observer))
    }
}
