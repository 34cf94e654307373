//! Ports module for the epoch oracle

pub mod inbound;
pub mod outbound;

pub use inbound::EpochOracleApi;
pub use outbound::{ObserverEligibility, OpenAdmission, SealParameterProvider};
