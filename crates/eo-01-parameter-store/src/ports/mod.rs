//! Ports module for the parameter store

pub mod inbound;

pub use inbound::{ParameterAdminApi, ParameterReader};
