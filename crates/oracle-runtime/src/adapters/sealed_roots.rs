//! # Sealed Root Adapter
//! Exposes oracle roots and claim windows to the distributor.

use eo_03_epoch_oracle::EpochOracleApi;
use eo_04_reward_distributor::SealedRootProvider;
use shared_types::{BlockNumber, EpochNumber, Hash};
use std::sync::Arc;

pub struct OracleRootAdapter<O: EpochOracleApi> {
    oracle: Arc<O>,
}

impl<O: EpochOracleApi> OracleRootAdapter<O> {
    pub fn new(oracle: Arc<O>) -> Self {
        Self { oracle }
    }
}

impl<O: EpochOracleApi> SealedRootProvider for OracleRootAdapter<O> {
    fn is_epoch_active(&self, epoch: EpochNumber, block: BlockNumber) -> bool {
        self.oracle.is_epoch_active(epoch, block)
    }

    fn merkle_root(&self, epoch: EpochNumber) -> Option<Hash> {
        self.oracle.merkle_root(epoch)
    }
}
