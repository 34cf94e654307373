//! # Core Domain Entities
//!
//! Primitive value types shared by every component of the epoch oracle.
//!
//! ## Clusters
//!
//! - **Identity**: `Address`, `Hash`
//! - **Accounting**: `Amount` (256-bit token units)
//! - **Time**: `BlockNumber`, `EpochNumber`
//! - **Staking**: `StakeParameters`

use serde::{Deserialize, Serialize};

// Re-export U256 from primitive-types for use across all components
pub use primitive_types::U256;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// A 32-byte hash (keccak-256 output, Merkle roots, leaves).
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style address.
pub type Address = [u8; 20];

/// The all-zero address, used as "no account".
pub const ZERO_ADDRESS: Address = [0u8; 20];

/// The all-zero hash, used as "no root".
pub const ZERO_HASH: Hash = [0u8; 32];

/// Render the first bytes of an address for log output.
pub fn short_address(address: &Address) -> String {
    format!("0x{}", hex::encode(&address[..4]))
}

/// Render the first bytes of a hash for log output.
pub fn short_hash(hash: &Hash) -> String {
    format!("0x{}", hex::encode(&hash[..4]))
}

// =============================================================================
// CLUSTER B: ACCOUNTING & TIME
// =============================================================================

/// Token units. Uses the full 256-bit range of the underlying ledger.
pub type Amount = U256;

/// Monotonic block counter. The only notion of time in the system.
pub type BlockNumber = u64;

/// Sequential distribution period, starting at 1. Epoch 0 means "none sealed".
pub type EpochNumber = u64;

// =============================================================================
// CLUSTER C: STAKING
// =============================================================================

/// The stake tunables owned by the parameter store.
///
/// Eligibility is always evaluated against the *current* parameters, so a
/// change here applies retroactively to every existing stake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeParameters {
    /// Tokens locked by a fresh `stake()` and required for eligibility.
    pub amount: Amount,
    /// Blocks a fresh stake stays locked.
    pub duration: BlockNumber,
    /// Blocks before expiry at which an observer stops being eligible.
    pub threshold: BlockNumber,
}

impl StakeParameters {
    /// Create a new parameter set.
    pub fn new(amount: Amount, duration: BlockNumber, threshold: BlockNumber) -> Self {
        Self {
            amount,
            duration,
            threshold,
        }
    }
}
