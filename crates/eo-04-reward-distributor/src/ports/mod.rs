//! Ports module for the reward distributor

pub mod inbound;
pub mod outbound;

pub use inbound::RewardDistributorApi;
pub use outbound::SealedRootProvider;
