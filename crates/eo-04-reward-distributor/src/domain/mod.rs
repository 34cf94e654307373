//! Domain module for the reward distributor

pub mod allocation;
pub mod claim;
pub mod claim_bitmap;

pub use allocation::{Allocation, AllocationTree};
pub use claim::{BatchClaimReport, ClaimOutcome, ClaimRequest};
pub use claim_bitmap::ClaimBitmap;
