//! Parameter Store Service
//!
//! Owns the admin identity and every tunable. Setters are admin-gated and
//! emit `New<Field>(old, new)` after the value is stored.

use crate::domain::parameters::{
    validate_epoch_duration, validate_seal_threshold, validate_stake_amount,
    validate_stake_window,
};
use crate::domain::OracleParameters;
use crate::error::{ParameterError, ParameterResult};
use crate::ports::inbound::{ParameterAdminApi, ParameterReader};
use parking_lot::RwLock;
use shared_bus::{EventPublisher, OracleEvent};
use shared_types::{
    short_address, AccessPolicy, Address, Amount, BlockNumber, CallContext, Role,
    StakeParameters,
};
use std::sync::Arc;
use tracing::info;

struct ParameterState {
    admin: Address,
    params: OracleParameters,
}

/// Parameter store implementation
pub struct ParameterStore {
    state: RwLock<ParameterState>,
    events: Arc<dyn EventPublisher>,
}

impl ParameterStore {
    /// Create a store owned by `admin`.
    pub fn new(
        admin: Address,
        params: OracleParameters,
        events: Arc<dyn EventPublisher>,
    ) -> ParameterResult<Self> {
        params.validate()?;
        info!(
            admin = %short_address(&admin),
            epoch_seal_threshold = params.epoch_seal_threshold,
            epoch_duration = params.epoch_duration,
            "Parameter store initialized"
        );
        Ok(Self {
            state: RwLock::new(ParameterState { admin, params }),
            events,
        })
    }

    fn ensure_admin(&self, state: &ParameterState, caller: &Address) -> ParameterResult<()> {
        if state.admin != *caller {
            tracing::warn!(caller = %short_address(caller), "Rejected non-admin parameter change");
            return Err(ParameterError::AdminOnly { caller: *caller });
        }
        Ok(())
    }

    /// Apply `update` under the write lock after the admin check. The closure
    /// validates, stores, and returns the event, which is published before
    /// the lock is released.
    fn update<F>(&self, ctx: &CallContext, update: F) -> ParameterResult<()>
    where
        F: FnOnce(&mut ParameterState) -> ParameterResult<OracleEvent>,
    {
        let mut state = self.state.write();
        self.ensure_admin(&state, &ctx.caller)?;
        let event = update(&mut state)?;
        info!(event = event.name(), block = ctx.block_number, "Parameter updated");
        self.events.publish(event);
        Ok(())
    }
}

impl ParameterReader for ParameterStore {
    fn admin(&self) -> Address {
        self.state.read().admin
    }

    fn epoch_seal_threshold(&self) -> u64 {
        self.state.read().params.epoch_seal_threshold
    }

    fn epoch_duration(&self) -> BlockNumber {
        self.state.read().params.epoch_duration
    }

    fn stake_amount(&self) -> Amount {
        self.state.read().params.stake.amount
    }

    fn stake_duration(&self) -> BlockNumber {
        self.state.read().params.stake.duration
    }

    fn stake_duration_threshold(&self) -> BlockNumber {
        self.state.read().params.stake.threshold
    }

    fn stake_parameters(&self) -> StakeParameters {
        self.state.read().params.stake
    }

    fn snapshot(&self) -> OracleParameters {
        self.state.read().params
    }
}

impl ParameterAdminApi for ParameterStore {
    fn set_admin(&self, ctx: &CallContext, new_admin: Address) -> ParameterResult<()> {
        self.update(ctx, |state| {
            let old = std::mem::replace(&mut state.admin, new_admin);
            Ok(OracleEvent::NewAdmin { old, new: new_admin })
        })
    }

    fn set_epoch_seal_threshold(&self, ctx: &CallContext, threshold: u64) -> ParameterResult<()> {
        self.update(ctx, |state| {
            validate_seal_threshold(threshold)?;
            let old = std::mem::replace(&mut state.params.epoch_seal_threshold, threshold);
            Ok(OracleEvent::NewEpochSealThreshold { old, new: threshold })
        })
    }

    fn set_epoch_duration(&self, ctx: &CallContext, duration: BlockNumber) -> ParameterResult<()> {
        self.update(ctx, |state| {
            validate_epoch_duration(duration)?;
            let old = std::mem::replace(&mut state.params.epoch_duration, duration);
            Ok(OracleEvent::NewEpochDuration { old, new: duration })
        })
    }

    fn set_stake_amount(&self, ctx: &CallContext, amount: Amount) -> ParameterResult<()> {
        self.update(ctx, |state| {
            validate_stake_amount(amount)?;
            let old = std::mem::replace(&mut state.params.stake.amount, amount);
            Ok(OracleEvent::NewStakeAmount { old, new: amount })
        })
    }

    fn set_stake_duration(&self, ctx: &CallContext, duration: BlockNumber) -> ParameterResult<()> {
        self.update(ctx, |state| {
            validate_stake_window(duration, state.params.stake.threshold)?;
            let old = std::mem::replace(&mut state.params.stake.duration, duration);
            Ok(OracleEvent::NewStakeDuration { old, new: duration })
        })
    }

    fn set_stake_duration_threshold(
        &self,
        ctx: &CallContext,
        threshold: BlockNumber,
    ) -> ParameterResult<()> {
        self.update(ctx, |state| {
            validate_stake_window(state.params.stake.duration, threshold)?;
            let old = std::mem::replace(&mut state.params.stake.threshold, threshold);
            Ok(OracleEvent::NewStakeDurationThreshold { old, new: threshold })
        })
    }
}

/// The store doubles as the admin authority for other components.
impl AccessPolicy for ParameterStore {
    fn is_authorized(&self, role: Role, caller: &Address) -> bool {
        role == Role::Admin && self.state.read().admin == *caller
    }
}
