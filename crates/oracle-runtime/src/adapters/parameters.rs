//! # Parameter Adapter
//!
//! Serves staking and the oracle from the shared parameter store.

use eo_01_parameter_store::{ParameterReader, ParameterStore};
use eo_02_observer_staking::StakeParameterProvider;
use eo_03_epoch_oracle::SealParameterProvider;
use shared_types::{BlockNumber, StakeParameters};
use std::sync::Arc;

/// Live view of the parameter store.
#[derive(Clone)]
pub struct ParameterStoreAdapter {
    store: Arc<ParameterStore>,
}

impl ParameterStoreAdapter {
    pub fn new(store: Arc<ParameterStore>) -> Self {
        Self { store }
    }
}

impl StakeParameterProvider for ParameterStoreAdapter {
    fn stake_parameters(&self) -> StakeParameters {
        self.store.stake_parameters()
    }
}

impl SealParameterProvider for ParameterStoreAdapter {
    fn epoch_seal_threshold(&self) -> u64 {
        self.store.epoch_seal_threshold()
    }

    fn epoch_duration(&self) -> BlockNumber {
        self.store.epoch_duration()
    }
}
