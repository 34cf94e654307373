//! # Staking Eligibility Adapter
//! Gates oracle votes on observer staking.

use eo_02_observer_staking::ObserverStakingApi;
use eo_03_epoch_oracle::ObserverEligibility;
use shared_types::{Address, BlockNumber};
use std::sync::Arc;

pub struct StakingEligibilityAdapter<S: ObserverStakingApi> {
    staking: Arc<S>,
}

impl<S: ObserverStakingApi> StakingEligibilityAdapter<S> {
    pub fn new(staking: Arc<S>) -> Self {
        Self { staking }
    }
}

impl<S: ObserverStakingApi> ObserverEligibility for StakingEligibilityAdapter<S> {
    fn is_eligible(&self, observer: &Address, block: BlockNumber) -> bool {
        self.staking.is_observer_eligible(observer, block)
    }
}
