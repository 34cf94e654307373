//! Driving Ports (API - Inbound)

use crate::domain::SubmissionOutcome;
use crate::error::OracleResult;
use shared_types::{Address, BlockNumber, CallContext, EpochNumber, Hash};

/// Epoch oracle API
pub trait EpochOracleApi: Send + Sync {
    /// Vote for `root` as the allocation snapshot of `epoch`.
    ///
    /// Only `last_epoch() + 1` accepts votes. The vote that reaches quorum
    /// seals the epoch and emits `SealEpoch`, provided the required end block
    /// has been reached; otherwise it is rejected and not counted.
    fn submit_merkle_root(
        &self,
        ctx: &CallContext,
        epoch: EpochNumber,
        root: Hash,
    ) -> OracleResult<SubmissionOutcome>;

    /// Most recently sealed epoch, 0 before the first seal.
    fn last_epoch(&self) -> EpochNumber;

    fn is_epoch_sealed(&self, epoch: EpochNumber) -> bool;

    /// Sealed root of `epoch`.
    fn merkle_root(&self, epoch: EpochNumber) -> Option<Hash>;

    /// Whether claims against `epoch` are accepted at `block`.
    ///
    /// Only the latest sealed epoch is active, and only for
    /// `epoch_duration` blocks after it sealed.
    fn is_epoch_active(&self, epoch: EpochNumber, block: BlockNumber) -> bool;

    /// Time gate of a sealed or pending epoch.
    fn required_end_block(&self, epoch: EpochNumber) -> Option<BlockNumber>;

    /// Time gate of the next epoch to seal.
    fn next_required_end_block(&self) -> BlockNumber;

    fn vote_count(&self, epoch: EpochNumber) -> u64;

    fn has_voted(&self, epoch: EpochNumber, observer: &Address) -> bool;
}
