//! # Component Container
//!
//! Central container holding the component instances with their adapters
//! and the runtime configuration they were built from.

pub mod components;
pub mod config;

pub use components::{
    component_address, ConcreteDistributor, ConcreteOracle, ConcreteStaking, OracleContainer,
};
pub use config::{ConfigError, RuntimeConfig};
