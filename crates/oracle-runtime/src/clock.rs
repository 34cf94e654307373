//! # Block Clock
//!
//! Local monotonic block counter. Every call made through the runtime
//! executes at the clock's current block.

use shared_types::{Address, BlockNumber, CallContext};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug)]
pub struct BlockClock {
    current: AtomicU64,
}

impl BlockClock {
    pub fn new(start: BlockNumber) -> Self {
        Self {
            current: AtomicU64::new(start),
        }
    }

    pub fn current(&self) -> BlockNumber {
        self.current.load(Ordering::SeqCst)
    }

    /// Mine one block and return its number.
    pub fn advance(&self) -> BlockNumber {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Jump forward to `block`; never moves backwards.
    pub fn advance_to(&self, block: BlockNumber) -> BlockNumber {
        self.current.fetch_max(block, Ordering::SeqCst).max(block)
    }

    /// Context for a call by `caller` in the current block.
    pub fn context(&self, caller: Address) -> CallContext {
        CallContext::new(caller, self.current())
    }
}
