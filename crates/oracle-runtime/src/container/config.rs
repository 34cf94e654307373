//! # Runtime Configuration
//!
//! Loaded from environment variables. Required values fail loudly when
//! absent; optional ones fall back to defaults.
//!
//! | Variable | Required | Meaning |
//! |----------|----------|---------|
//! | `ORACLE_ADMIN` | yes | parameter store admin (hex address) |
//! | `GOVERNANCE_ADDRESS` | no | slashing authority, defaults to the admin |
//! | `INITIAL_EPOCH_SEAL_THRESHOLD` | yes | votes needed to seal |
//! | `INITIAL_EPOCH_DURATION` | yes | blocks per epoch |
//! | `EPOCH_END_BLOCK` | yes | required end block of epoch 1 |
//! | `STAKE_AMOUNT` | yes | tokens per stake (decimal) |
//! | `STAKE_DURATION` | yes | blocks a stake stays locked |
//! | `STAKE_DURATION_THRESHOLD` | yes | eligibility cutoff before expiry |
//! | `DISTRIBUTOR_FUNDING` | no | tokens minted to the distributor, default 0 |
//! | `BLOCK_TIME_MS` | no | block clock period, default 1000 |
//! | `START_BLOCK` | no | first block of the local clock, default 0 |
//! | `ORACLE_DEMO` | no | `1`/`true` runs one demo epoch at startup |

use eo_01_parameter_store::{OracleParameters, ParameterError};
use eo_04_reward_distributor::DistributorConfig;
use shared_types::{Address, Amount, BlockNumber, LedgerError, StakeParameters, U256};
use std::time::Duration;
use thiserror::Error;

/// Default block clock period.
pub const DEFAULT_BLOCK_TIME_MS: u64 = 1_000;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required variable not set.
    #[error("Missing required environment variable {var}")]
    Missing { var: &'static str },

    /// Variable set but unparsable.
    #[error("Invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },

    /// Parameters rejected by the parameter store.
    #[error(transparent)]
    Parameters(#[from] ParameterError),

    /// Initial funding could not be minted.
    #[error("Funding failed: {0}")]
    Funding(#[from] LedgerError),
}

/// Complete runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub admin: Address,
    pub governance: Address,
    pub parameters: OracleParameters,
    pub epoch_end_block: BlockNumber,
    pub distributor_funding: Amount,
    pub block_time: Duration,
    pub start_block: BlockNumber,
    pub demo: bool,
    pub distributor: DistributorConfig,
}

impl RuntimeConfig {
    /// Read from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| lookup(var).ok_or(ConfigError::Missing { var });

        let admin = parse_address("ORACLE_ADMIN", &required("ORACLE_ADMIN")?)?;
        let governance = match lookup("GOVERNANCE_ADDRESS") {
            Some(value) => parse_address("GOVERNANCE_ADDRESS", &value)?,
            None => admin,
        };

        let parameters = OracleParameters {
            epoch_seal_threshold: parse_u64(
                "INITIAL_EPOCH_SEAL_THRESHOLD",
                &required("INITIAL_EPOCH_SEAL_THRESHOLD")?,
            )?,
            epoch_duration: parse_u64(
                "INITIAL_EPOCH_DURATION",
                &required("INITIAL_EPOCH_DURATION")?,
            )?,
            stake: StakeParameters::new(
                parse_amount("STAKE_AMOUNT", &required("STAKE_AMOUNT")?)?,
                parse_u64("STAKE_DURATION", &required("STAKE_DURATION")?)?,
                parse_u64(
                    "STAKE_DURATION_THRESHOLD",
                    &required("STAKE_DURATION_THRESHOLD")?,
                )?,
            ),
        };
        parameters.validate()?;

        let epoch_end_block = parse_u64("EPOCH_END_BLOCK", &required("EPOCH_END_BLOCK")?)?;

        let distributor_funding = match lookup("DISTRIBUTOR_FUNDING") {
            Some(value) => parse_amount("DISTRIBUTOR_FUNDING", &value)?,
            None => U256::zero(),
        };
        let block_time_ms = match lookup("BLOCK_TIME_MS") {
            Some(value) => parse_u64("BLOCK_TIME_MS", &value)?,
            None => DEFAULT_BLOCK_TIME_MS,
        };
        let start_block = match lookup("START_BLOCK") {
            Some(value) => parse_u64("START_BLOCK", &value)?,
            None => 0,
        };
        let demo = match lookup("ORACLE_DEMO") {
            Some(value) => parse_flag("ORACLE_DEMO", &value)?,
            None => false,
        };
        if block_time_ms == 0 {
            return Err(ConfigError::Invalid {
                var: "BLOCK_TIME_MS",
                value: "0".into(),
            });
        }

        Ok(Self {
            admin,
            governance,
            parameters,
            epoch_end_block,
            distributor_funding,
            block_time: Duration::from_millis(block_time_ms),
            start_block,
            demo,
            distributor: DistributorConfig::default(),
        })
    }
}

fn invalid(var: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
    }
}

fn parse_u64(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| invalid(var, value))
}

fn parse_amount(var: &'static str, value: &str) -> Result<Amount, ConfigError> {
    U256::from_dec_str(value.trim()).map_err(|_| invalid(var, value))
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(invalid(var, value)),
    }
}

/// Parse a 20-byte hex address, `0x` prefix optional.
pub fn parse_address(var: &'static str, value: &str) -> Result<Address, ConfigError> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let bytes = hex::decode(digits).map_err(|_| invalid(var, value))?;
    Address::try_from(bytes.as_slice()).map_err(|_| invalid(var, value))
}
