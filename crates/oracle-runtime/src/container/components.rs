//! # Component Container
//!
//! Holds every component instance and wires them in dependency order:
//!
//! ```text
//! Level 0: Token ledger, event bus, block clock
//! Level 1: Parameter store
//! Level 2: Observer staking (reads stake parameters)
//! Level 3: Epoch oracle (reads quorum/cadence, gated by staking)
//! Level 4: Reward distributor (reads sealed roots)
//! ```

use std::sync::Arc;

use tracing::info;

use eo_01_parameter_store::ParameterStore;
use eo_02_observer_staking::ObserverStakingService;
use eo_03_epoch_oracle::{EpochOracleService, OracleConfig};
use eo_04_reward_distributor::RewardDistributorService;
use shared_bus::{EventPublisher, InMemoryEventBus};
use shared_crypto::keccak256;
use shared_types::{short_address, Address, InMemoryLedger, SingleAuthority};

use crate::adapters::{OracleRootAdapter, ParameterStoreAdapter, StakingEligibilityAdapter};
use crate::clock::BlockClock;
use crate::container::config::{ConfigError, RuntimeConfig};

/// Staking wired to the parameter store and governance authority.
pub type ConcreteStaking =
    ObserverStakingService<ParameterStoreAdapter, InMemoryLedger, SingleAuthority>;

/// Oracle gated by observer staking.
pub type ConcreteOracle =
    EpochOracleService<ParameterStoreAdapter, StakingEligibilityAdapter<ConcreteStaking>>;

/// Distributor reading roots from the oracle.
pub type ConcreteDistributor =
    RewardDistributorService<OracleRootAdapter<ConcreteOracle>, InMemoryLedger>;

/// Ledger address of a component, derived from its name.
pub fn component_address(name: &str) -> Address {
    let digest = keccak256(name.as_bytes());
    let mut address = [0u8; 20];
    address.copy_from_slice(&digest[12..]);
    address
}

/// Central container holding all component instances.
pub struct OracleContainer {
    pub config: RuntimeConfig,
    pub clock: Arc<BlockClock>,
    pub event_bus: Arc<InMemoryEventBus>,
    pub ledger: Arc<InMemoryLedger>,
    pub parameters: Arc<ParameterStore>,
    pub staking: Arc<ConcreteStaking>,
    pub oracle: Arc<ConcreteOracle>,
    pub distributor: Arc<ConcreteDistributor>,
}

impl OracleContainer {
    /// Build and wire every component.
    pub fn new(config: RuntimeConfig) -> Result<Self, ConfigError> {
        let clock = Arc::new(BlockClock::new(config.start_block));
        let event_bus = Arc::new(InMemoryEventBus::new());
        let events: Arc<dyn EventPublisher> = event_bus.clone();
        let ledger = Arc::new(InMemoryLedger::new());

        let parameters = Arc::new(ParameterStore::new(
            config.admin,
            config.parameters,
            events.clone(),
        )?);
        let parameter_adapter = Arc::new(ParameterStoreAdapter::new(parameters.clone()));

        let staking = Arc::new(ObserverStakingService::new(
            component_address("observer-staking"),
            parameter_adapter.clone(),
            ledger.clone(),
            Arc::new(SingleAuthority::governance(config.governance)),
            events.clone(),
        ));

        let oracle = Arc::new(EpochOracleService::new(
            OracleConfig {
                initial_required_end_block: config.epoch_end_block,
            },
            parameter_adapter,
            Arc::new(StakingEligibilityAdapter::new(staking.clone())),
            events.clone(),
        ));

        let distributor = Arc::new(RewardDistributorService::new(
            config.distributor.clone(),
            component_address("reward-distributor"),
            Arc::new(OracleRootAdapter::new(oracle.clone())),
            ledger.clone(),
            events,
        ));

        if !config.distributor_funding.is_zero() {
            ledger.mint(&distributor.account(), config.distributor_funding)?;
        }

        info!(
            admin = %short_address(&config.admin),
            governance = %short_address(&config.governance),
            staking = %short_address(&staking.account()),
            distributor = %short_address(&distributor.account()),
            funding = %config.distributor_funding,
            "Components wired"
        );

        Ok(Self {
            config,
            clock,
            event_bus,
            ledger,
            parameters,
            staking,
            oracle,
            distributor,
        })
    }
}
