//! Domain module for the parameter store

pub mod parameters;

pub use parameters::OracleParameters;
