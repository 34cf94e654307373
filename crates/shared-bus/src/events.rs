//! # Oracle Events
//!
//! Every event emitted by the parameter store, observer staking, the epoch
//! oracle and the reward distributor. Names and argument order follow the
//! public event interface (`ObserverStaked(observer, amount, expireBlock)`,
//! `SealEpoch(epoch, root)`, ...), so external indexers can rely on them.

use serde::{Deserialize, Serialize};
use shared_types::entities::{Address, Amount, BlockNumber, EpochNumber, Hash};

/// All events that can be published to the event bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OracleEvent {
    // =========================================================================
    // PARAMETER STORE
    // =========================================================================
    /// Admin authority changed hands.
    NewAdmin { old: Address, new: Address },

    /// Quorum for sealing an epoch changed.
    NewEpochSealThreshold { old: u64, new: u64 },

    /// Epoch length in blocks changed.
    NewEpochDuration { old: BlockNumber, new: BlockNumber },

    /// Stake required for eligibility changed.
    NewStakeAmount { old: Amount, new: Amount },

    /// Lock duration of a fresh stake changed.
    NewStakeDuration { old: BlockNumber, new: BlockNumber },

    /// Pre-expiry eligibility cutoff changed.
    NewStakeDurationThreshold { old: BlockNumber, new: BlockNumber },

    // =========================================================================
    // OBSERVER STAKING
    // =========================================================================
    /// Stake created or extended. Carries cumulative totals.
    ObserverStaked {
        observer: Address,
        amount: Amount,
        expire_block: BlockNumber,
    },

    /// Stake withdrawn after expiry.
    ObserverUnstaked { observer: Address, amount: Amount },

    /// Stake forfeited by governance.
    ObserverSlashed { observer: Address, amount: Amount },

    // =========================================================================
    // EPOCH ORACLE
    // =========================================================================
    /// Quorum reached and time gate passed; the epoch root is final.
    SealEpoch { epoch: EpochNumber, root: Hash },

    // =========================================================================
    // REWARD DISTRIBUTOR
    // =========================================================================
    /// Allocation redeemed.
    Claim {
        epoch: EpochNumber,
        index: u64,
        account: Address,
        amount: Amount,
    },

    /// Batch processed; `succeeded` of `requested` items were claimed.
    BatchClaim { requested: u64, succeeded: u64 },
}

impl OracleEvent {
    /// Get the topic for this event.
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::NewAdmin { .. }
            | Self::NewEpochSealThreshold { .. }
            | Self::NewEpochDuration { .. }
            | Self::NewStakeAmount { .. }
            | Self::NewStakeDuration { .. }
            | Self::NewStakeDurationThreshold { .. } => EventTopic::Governance,
            Self::ObserverStaked { .. }
            | Self::ObserverUnstaked { .. }
            | Self::ObserverSlashed { .. } => EventTopic::Staking,
            Self::SealEpoch { .. } => EventTopic::Oracle,
            Self::Claim { .. } | Self::BatchClaim { .. } => EventTopic::Distribution,
        }
    }

    /// Interface name of the event.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewAdmin { .. } => "NewAdmin",
            Self::NewEpochSealThreshold { .. } => "NewEpochSealThreshold",
            Self::NewEpochDuration { .. } => "NewEpochDuration",
            Self::NewStakeAmount { .. } => "NewStakeAmount",
            Self::NewStakeDuration { .. } => "NewStakeDuration",
            Self::NewStakeDurationThreshold { .. } => "NewStakeDurationThreshold",
            Self::ObserverStaked { .. } => "ObserverStaked",
            Self::ObserverUnstaked { .. } => "ObserverUnstaked",
            Self::ObserverSlashed { .. } => "ObserverSlashed",
            Self::SealEpoch { .. } => "SealEpoch",
            Self::Claim { .. } => "Claim",
            Self::BatchClaim { .. } => "BatchClaim",
        }
    }
}

/// Event topics for filtering subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Parameter store changes.
    Governance,
    /// Observer stake lifecycle.
    Staking,
    /// Epoch sealing.
    Oracle,
    /// Reward claims.
    Distribution,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include (empty = all topics).
    pub topics: Vec<EventTopic>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self { topics }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &OracleEvent) -> bool {
        self.topics.is_empty() || self.topics.contains(&event.topic())
    }
}
