//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// The tree has no leaves, so no proof can be produced.
    #[error("Merkle tree is empty")]
    EmptyTree,

    /// The requested leaf is not part of the tree.
    #[error("Leaf not found in tree: 0x{}", hex::encode(.leaf))]
    LeafNotFound {
        /// The missing leaf hash
        leaf: [u8; 32],
    },
}
