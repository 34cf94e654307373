//! # Demo Epoch
//!
//! Drives one full epoch through the wired components, the way an operator
//! would on a fresh deployment:
//!
//! 1. Mint and approve stake tokens for `threshold` observers
//! 2. Move the clock to the epoch's required end block and stake
//! 3. Build the allocation tree and submit its root from every observer
//! 4. Batch-claim every allocation against the sealed root

use anyhow::{bail, Context, Result};
use tracing::info;

use eo_01_parameter_store::ParameterReader;
use eo_02_observer_staking::ObserverStakingApi;
use eo_03_epoch_oracle::{EpochOracleApi, SubmissionOutcome};
use eo_04_reward_distributor::{Allocation, AllocationTree, RewardDistributorApi};
use shared_types::{short_address, short_hash, Address, Amount, EpochNumber, Hash, U256};

use crate::container::{component_address, OracleContainer};

/// Number of allocations in the demo tree.
pub const DEMO_RECIPIENTS: u64 = 4;

/// What the demo epoch produced.
#[derive(Debug, Clone)]
pub struct DemoReport {
    pub epoch: EpochNumber,
    pub root: Hash,
    pub observers: Vec<Address>,
    pub claimed: u64,
    pub distributed: Amount,
}

fn demo_observer(i: u64) -> Address {
    component_address(&format!("demo-observer-{i}"))
}

fn demo_recipient(i: u64) -> Address {
    component_address(&format!("demo-recipient-{i}"))
}

/// Allocation tree paying `(i + 1) * 10` tokens to recipient `i`.
pub fn demo_allocations() -> AllocationTree {
    AllocationTree::build(
        (0..DEMO_RECIPIENTS)
            .map(|i| Allocation::new(i, demo_recipient(i), U256::from((i + 1) * 10)))
            .collect(),
    )
}

/// Run one epoch end to end.
pub fn run_demo_epoch(container: &OracleContainer) -> Result<DemoReport> {
    let clock = &container.clock;
    let threshold = container.parameters.epoch_seal_threshold();
    let stake_amount = container.parameters.stake_amount();
    let epoch = container.oracle.last_epoch() + 1;
    let required_end_block = container
        .oracle
        .required_end_block(epoch)
        .unwrap_or_else(|| container.oracle.next_required_end_block());

    let block = clock.advance_to(required_end_block);
    info!(epoch, block, threshold, "Running demo epoch");

    let observers: Vec<Address> = (0..threshold).map(demo_observer).collect();
    for observer in &observers {
        container
            .ledger
            .mint(observer, stake_amount)
            .context("Failed to mint stake tokens")?;
        container
            .ledger
            .approve(observer, &container.staking.account(), stake_amount);
        let stake = container
            .staking
            .stake(&clock.context(*observer))
            .with_context(|| format!("Observer {} failed to stake", short_address(observer)))?;
        info!(
            observer = %short_address(observer),
            expire_block = stake.expire_block,
            "Demo observer staked"
        );
    }

    let tree = demo_allocations();
    let root = tree.root();
    let distributor = container.distributor.account();
    container
        .ledger
        .mint(&distributor, tree.total_amount())
        .context("Failed to fund distributor")?;

    let mut sealed = false;
    for observer in &observers {
        let outcome = container
            .oracle
            .submit_merkle_root(&clock.context(*observer), epoch, root)
            .with_context(|| format!("Observer {} vote rejected", short_address(observer)))?;
        sealed = matches!(outcome, SubmissionOutcome::Sealed { .. });
    }
    if !sealed {
        bail!("Epoch {epoch} did not seal after {threshold} votes");
    }
    info!(epoch, root = %short_hash(&root), "Demo epoch sealed");

    let requests: Vec<_> = tree
        .allocations()
        .iter()
        .filter_map(|a| tree.claim_request(epoch, a.index))
        .collect();
    let mut claimed = 0;
    for batch in requests.chunks(container.distributor.config().max_batch_claim) {
        let report = container
            .distributor
            .batch_claim(&clock.context(distributor), batch)
            .context("Batch claim failed")?;
        claimed += report.succeeded;
    }

    info!(epoch, claimed, distributed = %tree.total_amount(), "Demo rewards claimed");

    Ok(DemoReport {
        epoch,
        root,
        observers,
        claimed,
        distributed: tree.total_amount(),
    })
}
