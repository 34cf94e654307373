//! Tunable values owned by the parameter store

use crate::error::{ParameterError, ParameterResult};
use serde::{Deserialize, Serialize};
use shared_types::{Amount, BlockNumber, StakeParameters, U256};

/// Full set of tunables read by staking and the oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleParameters {
    /// Matching votes required to seal an epoch.
    pub epoch_seal_threshold: u64,
    /// Blocks between consecutive required end blocks.
    pub epoch_duration: BlockNumber,
    /// Stake amount, lock duration and eligibility cutoff.
    pub stake: StakeParameters,
}

impl Default for OracleParameters {
    fn default() -> Self {
        Self {
            epoch_seal_threshold: 3,
            epoch_duration: 15_000,
            stake: StakeParameters::new(U256::from(100u64), 50, 20),
        }
    }
}

impl OracleParameters {
    /// Check every constraint.
    pub fn validate(&self) -> ParameterResult<()> {
        validate_seal_threshold(self.epoch_seal_threshold)?;
        validate_epoch_duration(self.epoch_duration)?;
        validate_stake_amount(self.stake.amount)?;
        validate_stake_window(self.stake.duration, self.stake.threshold)
    }
}

pub(crate) fn validate_seal_threshold(threshold: u64) -> ParameterResult<()> {
    if threshold == 0 {
        return Err(ParameterError::InvalidValue {
            field: "epoch_seal_threshold",
            reason: "quorum must be at least one vote",
        });
    }
    Ok(())
}

pub(crate) fn validate_epoch_duration(duration: BlockNumber) -> ParameterResult<()> {
    if duration == 0 {
        return Err(ParameterError::InvalidValue {
            field: "epoch_duration",
            reason: "epoch must span at least one block",
        });
    }
    Ok(())
}

pub(crate) fn validate_stake_amount(amount: Amount) -> ParameterResult<()> {
    if amount.is_zero() {
        return Err(ParameterError::InvalidValue {
            field: "stake_amount",
            reason: "stake amount must be positive",
        });
    }
    Ok(())
}

/// A fresh stake must start out eligible, so the cutoff has to fall
/// strictly inside the lock duration.
pub(crate) fn validate_stake_window(
    duration: BlockNumber,
    threshold: BlockNumber,
) -> ParameterResult<()> {
    if threshold >= duration {
        return Err(ParameterError::InvalidValue {
            field: "stake_duration_threshold",
            reason: "threshold must be smaller than stake duration",
        });
    }
    Ok(())
}
