//! Allocation leaves and the reference tree built from them
//!
//! A leaf is `keccak256(uint256 index ‖ address account ‖ uint256 amount)`,
//! packed big-endian into 84 bytes. Observers build the same tree off-chain
//! and vote for its root.

use crate::domain::claim::ClaimRequest;
use serde::{Deserialize, Serialize};
use shared_crypto::{keccak256, SortedMerkleTree};
use shared_types::{Address, Amount, EpochNumber, Hash, U256};

/// One account's reward for an epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub index: u64,
    pub account: Address,
    pub amount: Amount,
}

impl Allocation {
    pub fn new(index: u64, account: Address, amount: Amount) -> Self {
        Self {
            index,
            account,
            amount,
        }
    }

    /// Packed leaf hash.
    pub fn leaf(&self) -> Hash {
        leaf_hash(self.index, &self.account, self.amount)
    }
}

/// `keccak256(abi.encodePacked(uint256 index, address account, uint256 amount))`
pub fn leaf_hash(index: u64, account: &Address, amount: Amount) -> Hash {
    let mut packed = [0u8; 84];
    U256::from(index).to_big_endian(&mut packed[..32]);
    packed[32..52].copy_from_slice(account);
    amount.to_big_endian(&mut packed[52..]);
    keccak256(&packed)
}

/// Allocations of one epoch with their Merkle tree.
#[derive(Clone, Debug)]
pub struct AllocationTree {
    allocations: Vec<Allocation>,
    tree: SortedMerkleTree,
}

impl AllocationTree {
    /// Build the tree over `allocations`.
    pub fn build(allocations: Vec<Allocation>) -> Self {
        let tree = SortedMerkleTree::build(allocations.iter().map(Allocation::leaf).collect());
        Self { allocations, tree }
    }

    /// Root to submit to the oracle.
    pub fn root(&self) -> Hash {
        self.tree.root()
    }

    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    /// Sum of all allocated amounts; the funding the distributor needs.
    pub fn total_amount(&self) -> Amount {
        self.allocations
            .iter()
            .fold(Amount::zero(), |acc, a| acc.saturating_add(a.amount))
    }

    /// Sibling path for the allocation at `index`.
    pub fn proof(&self, index: u64) -> Option<Vec<Hash>> {
        let allocation = self.allocations.iter().find(|a| a.index == index)?;
        self.tree.proof(&allocation.leaf()).ok()
    }

    /// Ready-made claim for the allocation at `index`.
    pub fn claim_request(&self, epoch: EpochNumber, index: u64) -> Option<ClaimRequest> {
        let allocation = self.allocations.iter().find(|a| a.index == index)?;
        let proof = self.tree.proof(&allocation.leaf()).ok()?;
        Some(ClaimRequest {
            epoch,
            index: allocation.index,
            account: allocation.account,
            amount: allocation.amount,
            proof,
        })
    }
}
