//! Observer Staking Service
//!
//! Every call validates against current state, moves tokens, and only then
//! writes the stake record, all under one write lock. A failing ledger call
//! therefore leaves the record untouched. Events are published before the
//! lock is released, so the bus sees them in commit order.

use crate::domain::Stake;
use crate::error::{StakingError, StakingResult};
use crate::ports::inbound::ObserverStakingApi;
use crate::ports::outbound::StakeParameterProvider;
use parking_lot::RwLock;
use shared_bus::{EventPublisher, OracleEvent};
use shared_types::{
    short_address, AccessPolicy, Address, Amount, BlockNumber, CallContext, LedgerError, Role,
    TokenLedger,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Default)]
struct StakingState {
    stakes: HashMap<Address, Stake>,
    total_staked: Amount,
}

/// Observer staking implementation
///
/// `account` is the ledger address holding every locked stake.
pub struct ObserverStakingService<P, L, A>
where
    P: StakeParameterProvider,
    L: TokenLedger,
    A: AccessPolicy,
{
    account: Address,
    state: RwLock<StakingState>,
    params: Arc<P>,
    ledger: Arc<L>,
    governance: Arc<A>,
    events: Arc<dyn EventPublisher>,
}

impl<P, L, A> ObserverStakingService<P, L, A>
where
    P: StakeParameterProvider,
    L: TokenLedger,
    A: AccessPolicy,
{
    /// Create new staking service
    pub fn new(
        account: Address,
        params: Arc<P>,
        ledger: Arc<L>,
        governance: Arc<A>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            account,
            state: RwLock::new(StakingState::default()),
            params,
            ledger,
            governance,
            events,
        }
    }

    /// Ledger address holding locked stakes.
    pub fn account(&self) -> Address {
        self.account
    }

    fn pull_tokens(&self, from: &Address, amount: Amount) -> StakingResult<()> {
        self.ledger
            .transfer_from(&self.account, from, &self.account, amount)
            .map_err(|e| {
                warn!(observer = %short_address(from), %amount, error = %e, "Stake transfer failed");
                StakingError::from(e)
            })
    }
}

impl<P, L, A> ObserverStakingApi for ObserverStakingService<P, L, A>
where
    P: StakeParameterProvider,
    L: TokenLedger,
    A: AccessPolicy,
{
    fn stake(&self, ctx: &CallContext) -> StakingResult<Stake> {
        let observer = ctx.caller;
        let mut state = self.state.write();

        if state.stakes.get(&observer).is_some_and(|s| !s.is_empty()) {
            return Err(StakingError::StakeAlreadyExists { observer });
        }

        let stake = Stake::open(&self.params.stake_parameters(), ctx.block_number);
        let total = state
            .total_staked
            .checked_add(stake.amount)
            .ok_or(LedgerError::Overflow)?;

        self.pull_tokens(&observer, stake.amount)?;
        state.stakes.insert(observer, stake);
        state.total_staked = total;
        info!(
            observer = %short_address(&observer),
            amount = %stake.amount,
            expire_block = stake.expire_block,
            "Observer staked"
        );
        self.events.publish(OracleEvent::ObserverStaked {
            observer,
            amount: stake.amount,
            expire_block: stake.expire_block,
        });
        Ok(stake)
    }

    fn extend(
        &self,
        ctx: &CallContext,
        add_amount: Amount,
        add_duration: BlockNumber,
    ) -> StakingResult<Stake> {
        let observer = ctx.caller;
        let mut state = self.state.write();

        let current = state
            .stakes
            .get(&observer)
            .copied()
            .filter(|s| !s.is_empty())
            .ok_or(StakingError::CannotExtendNonExistentStake { observer })?;

        let extended = Stake {
            amount: current
                .amount
                .checked_add(add_amount)
                .ok_or(LedgerError::Overflow)?,
            expire_block: current.expire_block.saturating_add(add_duration),
        };
        let total = state
            .total_staked
            .checked_add(add_amount)
            .ok_or(LedgerError::Overflow)?;

        self.pull_tokens(&observer, add_amount)?;
        state.stakes.insert(observer, extended);
        state.total_staked = total;
        info!(
            observer = %short_address(&observer),
            amount = %extended.amount,
            expire_block = extended.expire_block,
            "Observer stake extended"
        );
        self.events.publish(OracleEvent::ObserverStaked {
            observer,
            amount: extended.amount,
            expire_block: extended.expire_block,
        });
        Ok(extended)
    }

    fn unstake(&self, ctx: &CallContext) -> StakingResult<Amount> {
        let observer = ctx.caller;
        let mut state = self.state.write();

        let stake = state
            .stakes
            .get(&observer)
            .copied()
            .filter(|s| !s.is_empty())
            .ok_or(StakingError::CannotExtendNonExistentStake { observer })?;

        if !stake.is_expired(ctx.block_number) {
            return Err(StakingError::StakeNotExpired {
                expire_block: stake.expire_block,
                current_block: ctx.block_number,
            });
        }

        self.ledger.transfer(&self.account, &observer, stake.amount)?;
        state.stakes.remove(&observer);
        state.total_staked = state.total_staked.saturating_sub(stake.amount);
        info!(observer = %short_address(&observer), amount = %stake.amount, "Observer unstaked");
        self.events.publish(OracleEvent::ObserverUnstaked {
            observer,
            amount: stake.amount,
        });
        Ok(stake.amount)
    }

    fn slash(&self, ctx: &CallContext, observer: Address, amount: Amount) -> StakingResult<()> {
        if self.governance.ensure(Role::Governance, &ctx.caller).is_err() {
            return Err(StakingError::ExecutionNotAuthorized { caller: ctx.caller });
        }

        let mut state = self.state.write();
        let stake = state.stakes.get(&observer).copied().unwrap_or_default();

        if amount > stake.amount {
            return Err(StakingError::InvalidSlashAmount {
                requested: amount,
                staked: stake.amount,
            });
        }

        // Burn and refund must both succeed or neither may happen.
        let held = self.ledger.balance_of(&self.account);
        if held < stake.amount {
            return Err(LedgerError::BurnExceedsBalance {
                account: self.account,
                balance: held,
                required: stake.amount,
            }
            .into());
        }

        let remainder = stake.amount - amount;
        if !amount.is_zero() {
            self.ledger.burn(&self.account, amount)?;
        }
        if !remainder.is_zero() {
            self.ledger.transfer(&self.account, &observer, remainder)?;
        }
        state.stakes.remove(&observer);
        state.total_staked = state.total_staked.saturating_sub(stake.amount);
        warn!(
            observer = %short_address(&observer),
            slashed = %amount,
            returned = %remainder,
            "Observer slashed"
        );
        self.events
            .publish(OracleEvent::ObserverSlashed { observer, amount });
        Ok(())
    }

    fn is_observer_eligible(&self, observer: &Address, block: BlockNumber) -> bool {
        let params = self.params.stake_parameters();
        let eligible = self
            .state
            .read()
            .stakes
            .get(observer)
            .is_some_and(|s| s.is_eligible(&params, block));
        debug!(observer = %short_address(observer), block, eligible, "Eligibility query");
        eligible
    }

    fn stake_of(&self, observer: &Address) -> Stake {
        self.state
            .read()
            .stakes
            .get(observer)
            .copied()
            .unwrap_or_default()
    }

    fn total_staked(&self) -> Amount {
        self.state.read().total_staked
    }
}
