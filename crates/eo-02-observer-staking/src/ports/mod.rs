//! Ports module for observer staking

pub mod inbound;
pub mod outbound;

pub use inbound::ObserverStakingApi;
pub use outbound::StakeParameterProvider;
