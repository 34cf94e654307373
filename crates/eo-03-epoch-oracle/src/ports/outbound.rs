//! Driven Ports (SPI - Outbound Dependencies)

use shared_types::{Address, BlockNumber};

/// Quorum and cadence, read live at every submission.
pub trait SealParameterProvider: Send + Sync {
    /// Matching votes required to seal.
    fn epoch_seal_threshold(&self) -> u64;

    /// Blocks added to the required end block after each seal.
    fn epoch_duration(&self) -> BlockNumber;
}

/// Gate deciding who may vote.
///
/// Wired to observer staking in production.
pub trait ObserverEligibility: Send + Sync {
    /// Whether `observer` may vote at `block`.
    fn is_eligible(&self, observer: &Address, block: BlockNumber) -> bool;
}

/// Gate that admits every caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenAdmission;

impl ObserverEligibility for OpenAdmission {
    fn is_eligible(&self, _observer: &Address, _block: BlockNumber) -> bool {
        true
    }
}
