//! # Token Ledger
//!
//! The fungible token is an external collaborator. Components only rely on
//! the [`TokenLedger`] trait; [`InMemoryLedger`] is the ERC20-style
//! implementation used by the runtime and by tests.
//!
//! Every operation is all-or-nothing: a failing call leaves balances,
//! allowances and supply untouched.

use crate::entities::{Address, Amount};
use crate::errors::LedgerError;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Transfer / burn surface consumed by staking and distribution.
pub trait TokenLedger: Send + Sync {
    /// Current balance of `account`.
    fn balance_of(&self, account: &Address) -> Amount;

    /// Current circulating supply.
    fn total_supply(&self) -> Amount;

    /// Amount `spender` may still move out of `owner`.
    fn allowance(&self, owner: &Address, spender: &Address) -> Amount;

    /// Move `amount` from `from` to `to`.
    fn transfer(&self, from: &Address, to: &Address, amount: Amount) -> Result<(), LedgerError>;

    /// Move `amount` from `from` to `to` on behalf of `spender`, consuming allowance.
    fn transfer_from(
        &self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Destroy `amount` held by `from`, reducing the total supply.
    fn burn(&self, from: &Address, amount: Amount) -> Result<(), LedgerError>;
}

#[derive(Debug, Default)]
struct LedgerState {
    balances: HashMap<Address, Amount>,
    allowances: HashMap<(Address, Address), Amount>,
    total_supply: Amount,
}

impl LedgerState {
    fn balance(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn move_tokens(
        &mut self,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let from_balance = self.balance(from);
        if from_balance < amount {
            return Err(LedgerError::InsufficientBalance {
                account: *from,
                balance: from_balance,
                required: amount,
            });
        }
        if from == to {
            return Ok(());
        }
        let to_balance = self
            .balance(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        self.balances.insert(*from, from_balance - amount);
        self.balances.insert(*to, to_balance);
        Ok(())
    }
}

/// ERC20-style ledger held in memory.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    state: RwLock<LedgerState>,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `amount` new tokens for `to`.
    pub fn mint(&self, to: &Address, amount: Amount) -> Result<(), LedgerError> {
        let mut state = self.state.write();
        let supply = state
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        let balance = state
            .balance(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        state.total_supply = supply;
        state.balances.insert(*to, balance);
        Ok(())
    }

    /// Allow `spender` to move up to `amount` of `owner`'s tokens.
    ///
    /// An allowance of `U256::MAX` is never decremented.
    pub fn approve(&self, owner: &Address, spender: &Address, amount: Amount) {
        self.state
            .write()
            .allowances
            .insert((*owner, *spender), amount);
    }
}

impl TokenLedger for InMemoryLedger {
    fn balance_of(&self, account: &Address) -> Amount {
        self.state.read().balance(account)
    }

    fn total_supply(&self) -> Amount {
        self.state.read().total_supply
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.state
            .read()
            .allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    fn transfer(&self, from: &Address, to: &Address, amount: Amount) -> Result<(), LedgerError> {
        self.state.write().move_tokens(from, to, amount)
    }

    fn transfer_from(
        &self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let mut state = self.state.write();

        // Balance is checked before allowance, matching the ERC20 revert order
        let balance = state.balance(from);
        if balance < amount {
            return Err(LedgerError::InsufficientBalance {
                account: *from,
                balance,
                required: amount,
            });
        }

        let key = (*from, *spender);
        let allowance = state.allowances.get(&key).copied().unwrap_or_default();
        if allowance < amount {
            return Err(LedgerError::InsufficientAllowance {
                owner: *from,
                spender: *spender,
                allowance,
                required: amount,
            });
        }

        state.move_tokens(from, to, amount)?;
        if allowance != Amount::MAX {
            state.allowances.insert(key, allowance - amount);
        }
        Ok(())
    }

    fn burn(&self, from: &Address, amount: Amount) -> Result<(), LedgerError> {
        let mut state = self.state.write();
        let balance = state.balance(from);
        if balance < amount {
            return Err(LedgerError::BurnExceedsBalance {
                account: *from,
                balance,
                required: amount,
            });
        }
        state.balances.insert(*from, balance - amount);
        state.total_supply = state.total_supply - amount;
        Ok(())
    }
}
