//! # Sorted-Pair Merkle Tree
//!
//! Binary keccak-256 tree where every parent is `H(min(a, b) || max(a, b))`.
//! Because pairs are sorted before hashing, a proof is just the list of
//! sibling hashes; no left/right position is needed.
//!
//! ## Construction
//!
//! 1. Leaves are sorted byte-wise.
//! 2. Each layer pairs adjacent nodes and hashes the sorted pair.
//! 3. An odd trailing node is carried up to the next layer unchanged.
//! 4. The single node of the last layer is the root.
//!
//! This matches the layout produced by the common JavaScript tooling
//! (`sort: true`, no odd duplication), so roots computed off-chain verify here.

use crate::errors::CryptoError;
use crate::hashing::{keccak256_many, Hash};

/// Root reported for a tree without leaves.
pub const EMPTY_ROOT: Hash = [0u8; 32];

/// Hash a pair of nodes in sorted order.
pub fn hash_sorted_pair(a: &Hash, b: &Hash) -> Hash {
    if a <= b {
        keccak256_many(&[&a[..], &b[..]])
    } else {
        keccak256_many(&[&b[..], &a[..]])
    }
}

/// Fold a leaf through its sibling path.
pub fn compute_root_from_proof(leaf: &Hash, proof: &[Hash]) -> Hash {
    proof
        .iter()
        .fold(*leaf, |current, sibling| hash_sorted_pair(&current, sibling))
}

/// Verify that `leaf` is committed by `root` using a sorted-pair proof.
pub fn verify_sorted_proof(proof: &[Hash], root: &Hash, leaf: &Hash) -> bool {
    compute_root_from_proof(leaf, proof) == *root
}

/// A fully materialized sorted-pair Merkle tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedMerkleTree {
    /// Layers from the sorted leaves (index 0) up to the root layer.
    layers: Vec<Vec<Hash>>,
}

impl SortedMerkleTree {
    /// Build a tree over `leaves`. Input order does not matter.
    pub fn build(mut leaves: Vec<Hash>) -> Self {
        if leaves.is_empty() {
            return Self { layers: Vec::new() };
        }

        leaves.sort_unstable();
        let mut layers = vec![leaves];

        while let Some(current) = layers.last() {
            if current.len() <= 1 {
                break;
            }
            let next: Vec<Hash> = current
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hash_sorted_pair(left, right),
                    [odd] => *odd,
                    _ => unreachable!("chunks(2) yields one or two nodes"),
                })
                .collect();
            layers.push(next);
        }

        Self { layers }
    }

    /// Root of the tree, or [`EMPTY_ROOT`] when there are no leaves.
    pub fn root(&self) -> Hash {
        self.layers
            .last()
            .and_then(|layer| layer.first())
            .copied()
            .unwrap_or(EMPTY_ROOT)
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.layers.first().map(Vec::len).unwrap_or(0)
    }

    /// Height of the tree (number of layers above the leaves).
    pub fn depth(&self) -> usize {
        self.layers.len().saturating_sub(1)
    }

    /// Sibling path proving membership of `leaf`.
    pub fn proof(&self, leaf: &Hash) -> Result<Vec<Hash>, CryptoError> {
        let leaves = self.layers.first().ok_or(CryptoError::EmptyTree)?;
        let mut index = leaves
            .binary_search(leaf)
            .map_err(|_| CryptoError::LeafNotFound { leaf: *leaf })?;

        let mut path = Vec::with_capacity(self.depth());
        for layer in &self.layers[..self.layers.len() - 1] {
            let sibling = if index % 2 == 1 { index - 1 } else { index + 1 };
            // A carried-up odd node has no sibling at this level
            if let Some(hash) = layer.get(sibling) {
                path.push(*hash);
            }
            index /= 2;
        }
        Ok(path)
    }

    /// Verify a proof against this tree's root.
    pub fn verify(&self, leaf: &Hash, proof: &[Hash]) -> bool {
        verify_sorted_proof(proof, &self.root(), leaf)
    }
}
