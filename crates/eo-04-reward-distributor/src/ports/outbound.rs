//! Driven Ports (SPI - Outbound Dependencies)

use shared_types::{BlockNumber, EpochNumber, Hash};

/// View of the oracle needed to validate claims.
pub trait SealedRootProvider: Send + Sync {
    /// Whether `epoch` accepts claims at `block`.
    fn is_epoch_active(&self, epoch: EpochNumber, block: BlockNumber) -> bool;

    /// Sealed root of `epoch`.
    fn merkle_root(&self, epoch: EpochNumber) -> Option<Hash>;
}
