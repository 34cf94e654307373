//! Domain module for observer staking

pub mod stake;

pub use stake::Stake;
