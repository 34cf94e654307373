//! # Shared Crypto - Hashing & Merkle Commitments
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | keccak-256 | Allocation leaves, pair hashing |
//! | `merkle` | Sorted-pair binary tree | Epoch roots, claim proofs |
//!
//! ## Security Properties
//!
//! - **Sorted pairs**: proofs carry no position bits, so a sibling list is
//!   the whole proof.
//! - **Soundness**: changing any byte of a leaf or of any sibling changes the
//!   recomputed root.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod merkle;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{keccak256, keccak256_many, Hash, KeccakHasher};
pub use merkle::{
    compute_root_from_proof, hash_sorted_pair, verify_sorted_proof, SortedMerkleTree, EMPTY_ROOT,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
