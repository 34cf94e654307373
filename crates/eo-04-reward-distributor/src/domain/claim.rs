//! Claim requests and batch reports

use crate::error::DistributorError;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, EpochNumber, Hash};

/// Request to redeem one allocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRequest {
    pub epoch: EpochNumber,
    pub index: u64,
    /// Recipient of the tokens; need not be the caller.
    pub account: Address,
    pub amount: Amount,
    /// Sibling hashes from leaf to root.
    pub proof: Vec<Hash>,
}

/// Fate of one item of a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClaimOutcome {
    Claimed,
    Skipped(DistributorError),
}

impl ClaimOutcome {
    pub fn is_claimed(&self) -> bool {
        matches!(self, Self::Claimed)
    }
}

/// Summary returned by `batch_claim`, mirrored by the `BatchClaim` event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchClaimReport {
    pub requested: u64,
    pub succeeded: u64,
    /// One entry per request, in request order.
    pub outcomes: Vec<ClaimOutcome>,
}

impl BatchClaimReport {
    pub fn from_outcomes(outcomes: Vec<ClaimOutcome>) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.is_claimed()).count() as u64;
        Self {
            requested: outcomes.len() as u64,
            succeeded,
            outcomes,
        }
    }
}
