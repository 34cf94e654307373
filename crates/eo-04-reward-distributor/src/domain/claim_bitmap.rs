//! Per-epoch claimed-index bitset
//!
//! Index `i` of epoch `e` lives in bit `i % 256` of word `i / 256`.

use shared_types::{EpochNumber, U256};
use std::collections::HashMap;

const WORD_BITS: u64 = 256;

#[derive(Clone, Debug, Default)]
pub struct ClaimBitmap {
    words: HashMap<(EpochNumber, u64), U256>,
}

impl ClaimBitmap {
    pub fn new() -> Self {
        Self::default()
    }

    fn locate(index: u64) -> (u64, usize) {
        (index / WORD_BITS, (index % WORD_BITS) as usize)
    }

    pub fn is_claimed(&self, epoch: EpochNumber, index: u64) -> bool {
        let (word, bit) = Self::locate(index);
        self.words
            .get(&(epoch, word))
            .is_some_and(|bits| bits.bit(bit))
    }

    /// Mark `index` claimed. Returns false if it already was.
    pub fn set_claimed(&mut self, epoch: EpochNumber, index: u64) -> bool {
        let (word, bit) = Self::locate(index);
        let bits = self.words.entry((epoch, word)).or_default();
        if bits.bit(bit) {
            return false;
        }
        *bits = *bits | (U256::one() << bit);
        true
    }

    /// Number of claimed indices in `epoch`.
    pub fn claimed_count(&self, epoch: EpochNumber) -> u64 {
        self.words
            .iter()
            .filter(|((e, _), _)| *e == epoch)
            .map(|(_, bits)| {
                bits.0.iter().map(|limb| u64::from(limb.count_ones())).sum::<u64>()
            })
            .sum()
    }
}
