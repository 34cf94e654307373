//! # Test Harness
//!
//! A fully wired [`OracleContainer`] with helpers for the calls every
//! scenario repeats: funding and staking observers, moving the clock,
//! voting and claiming.

use std::time::Duration;

use eo_01_parameter_store::{OracleParameters, ParameterReader};
use eo_02_observer_staking::{ObserverStakingApi, Stake, StakingResult};
use eo_03_epoch_oracle::{EpochOracleApi, OracleResult, SubmissionOutcome};
use eo_04_reward_distributor::{
    Allocation, AllocationTree, ClaimRequest, DistributorConfig, DistributorResult,
    RewardDistributorApi,
};
use oracle_runtime::{OracleContainer, RuntimeConfig};
use shared_types::{Address, BlockNumber, CallContext, EpochNumber, Hash, StakeParameters, U256};

pub const ADMIN: Address = [0xAD; 20];
pub const GOVERNANCE: Address = [0x60; 20];

/// Required end block of epoch 1.
pub const FIRST_END_BLOCK: BlockNumber = 1_000;
pub const EPOCH_DURATION: BlockNumber = 15_000;
pub const QUORUM: u64 = 3;
pub const STAKE_DURATION: BlockNumber = 50;
pub const STAKE_THRESHOLD: BlockNumber = 20;

/// Tokens minted to the distributor at startup.
pub const DISTRIBUTOR_FUNDING: u64 = 1_000_000;

pub fn stake_amount() -> U256 {
    U256::from(100u64)
}

pub fn observer(i: u8) -> Address {
    [0x10u8.wrapping_add(i); 20]
}

pub fn recipient(i: u64) -> Address {
    let mut address = [0xC0; 20];
    address[12..].copy_from_slice(&i.to_be_bytes());
    address
}

/// Baseline configuration: quorum 3, 15000-block epochs.
pub fn config() -> RuntimeConfig {
    RuntimeConfig {
        admin: ADMIN,
        governance: GOVERNANCE,
        parameters: OracleParameters {
            epoch_seal_threshold: QUORUM,
            epoch_duration: EPOCH_DURATION,
            stake: StakeParameters::new(stake_amount(), STAKE_DURATION, STAKE_THRESHOLD),
        },
        epoch_end_block: FIRST_END_BLOCK,
        distributor_funding: U256::from(DISTRIBUTOR_FUNDING),
        block_time: Duration::from_millis(1_000),
        start_block: 0,
        demo: false,
        distributor: DistributorConfig::default(),
    }
}

/// Allocation tree paying `100 * (i + 1)` tokens to `recipient(i)`.
pub fn allocation_tree(count: u64) -> AllocationTree {
    AllocationTree::build(
        (0..count)
            .map(|i| Allocation::new(i, recipient(i), U256::from(100 * (i + 1))))
            .collect(),
    )
}

pub struct Harness {
    pub container: OracleContainer,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(config())
    }

    pub fn with_config(config: RuntimeConfig) -> Self {
        Self {
            container: OracleContainer::new(config).expect("container should wire"),
        }
    }

    pub fn block(&self) -> BlockNumber {
        self.container.clock.current()
    }

    pub fn ctx(&self, caller: Address) -> CallContext {
        self.container.clock.context(caller)
    }

    pub fn advance_to(&self, block: BlockNumber) {
        self.container.clock.advance_to(block);
    }

    pub fn mine(&self, blocks: u64) {
        self.advance_to(self.block() + blocks);
    }

    /// Mint the current stake amount to `observer`, approve staking and stake.
    pub fn fund_and_stake(&self, observer: Address) -> StakingResult<Stake> {
        let amount = self.container.parameters.stake_amount();
        self.container
            .ledger
            .mint(&observer, amount)
            .expect("mint should succeed");
        self.container
            .ledger
            .approve(&observer, &self.container.staking.account(), amount);
        self.container.staking.stake(&self.ctx(observer))
    }

    pub fn vote(
        &self,
        observer: Address,
        epoch: EpochNumber,
        root: Hash,
    ) -> OracleResult<SubmissionOutcome> {
        self.container
            .oracle
            .submit_merkle_root(&self.ctx(observer), epoch, root)
    }

    /// Move to the epoch's required end block, stake `QUORUM` fresh observers
    /// and seal `root`. Returns the observers used.
    pub fn seal_epoch(&self, epoch: EpochNumber, root: Hash, first_observer: u8) -> Vec<Address> {
        let end_block = self
            .container
            .oracle
            .required_end_block(epoch)
            .expect("epoch should be next in sequence");
        self.advance_to(end_block);

        let observers: Vec<Address> = (0..QUORUM as u8)
            .map(|i| observer(first_observer + i))
            .collect();
        for o in &observers {
            self.fund_and_stake(*o).expect("stake should succeed");
        }
        let mut last = None;
        for o in &observers {
            last = Some(self.vote(*o, epoch, root).expect("vote should be accepted"));
        }
        assert_eq!(last, Some(SubmissionOutcome::Sealed { root }));
        observers
    }

    /// Claim as the allocation's own account.
    pub fn claim(&self, request: &ClaimRequest) -> DistributorResult<()> {
        self.container
            .distributor
            .claim(&self.ctx(request.account), request)
    }
}
