//! # Adapter Implementations
//!
//! Each adapter implements an outbound port of one component on top of the
//! inbound API of another:
//!
//! ```text
//! ParameterStore ──ParameterStoreAdapter──→ Staking, Oracle
//! Staking ──StakingEligibilityAdapter──→ Oracle
//! Oracle ──OracleRootAdapter──→ Distributor
//! ```

pub mod eligibility;
pub mod parameters;
pub mod sealed_roots;

pub use eligibility::StakingEligibilityAdapter;
pub use parameters::ParameterStoreAdapter;
pub use sealed_roots::OracleRootAdapter;
