//! Epoch tally and seal record

use serde::{Deserialize, Serialize};
use shared_types::{Address, BlockNumber, Hash};
use std::collections::HashSet;

/// Votes and outcome for one epoch.
///
/// The first accepted vote fixes `candidate_root`; every later vote must
/// carry the same root. `sealed_at` is set exactly once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochRecord {
    /// Earliest block at which the epoch may seal.
    pub required_end_block: BlockNumber,
    /// Root proposed by the first voter.
    pub candidate_root: Option<Hash>,
    /// Observers that voted for this epoch.
    pub voters: HashSet<Address>,
    /// Block of the sealing vote.
    pub sealed_at: Option<BlockNumber>,
}

impl EpochRecord {
    /// Empty tally gated at `required_end_block`.
    pub fn new(required_end_block: BlockNumber) -> Self {
        Self {
            required_end_block,
            candidate_root: None,
            voters: HashSet::new(),
            sealed_at: None,
        }
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed_at.is_some()
    }

    pub fn vote_count(&self) -> u64 {
        self.voters.len() as u64
    }

    pub fn has_voted(&self, observer: &Address) -> bool {
        self.voters.contains(observer)
    }

    /// Final root; `None` until sealed.
    pub fn sealed_root(&self) -> Option<Hash> {
        self.sealed_at.and(self.candidate_root)
    }

    /// Whether a submission of `root` agrees with the candidate.
    pub fn accepts_root(&self, root: &Hash) -> bool {
        self.candidate_root.map_or(true, |candidate| candidate == *root)
    }

    pub fn is_time_gate_open(&self, block: BlockNumber) -> bool {
        block >= self.required_end_block
    }
}

/// Result of an accepted submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Vote counted, quorum not yet reached.
    Recorded { votes: u64, threshold: u64 },
    /// This vote sealed the epoch.
    Sealed { root: Hash },
}
