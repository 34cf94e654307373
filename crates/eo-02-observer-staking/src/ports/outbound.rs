//! Driven Ports (SPI - Outbound Dependencies)
//!
//! The token ledger (`shared_types::TokenLedger`) and the governance
//! authority (`shared_types::AccessPolicy`) are shared traits; only the
//! parameter source is specific to staking.

use shared_types::StakeParameters;

/// Source of the current stake tunables.
///
/// Consulted on every stake and eligibility query; implementations must not
/// cache.
pub trait StakeParameterProvider: Send + Sync {
    /// Amount, duration and eligibility threshold in force right now.
    fn stake_parameters(&self) -> StakeParameters;
}
