//! # Error Types
//!
//! Errors shared across components.

use crate::entities::{Address, Amount};
use thiserror::Error;

/// Errors raised by the token ledger collaborator.
///
/// Every variant leaves the ledger untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Sender does not hold enough tokens.
    #[error("ERC20: transfer amount exceeds balance (balance {balance}, required {required})")]
    InsufficientBalance {
        account: Address,
        balance: Amount,
        required: Amount,
    },

    /// Spender is not approved for enough tokens.
    #[error("ERC20: insufficient allowance (allowance {allowance}, required {required})")]
    InsufficientAllowance {
        owner: Address,
        spender: Address,
        allowance: Amount,
        required: Amount,
    },

    /// Burn exceeds the holder's balance.
    #[error("ERC20: burn amount exceeds balance (balance {balance}, required {required})")]
    BurnExceedsBalance {
        account: Address,
        balance: Amount,
        required: Amount,
    },

    /// Arithmetic overflow on a balance or the total supply.
    #[error("ERC20: arithmetic overflow")]
    Overflow,
}

impl LedgerError {
    /// ERC20 revert reason, without the amounts.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InsufficientBalance { .. } => "ERC20: transfer amount exceeds balance",
            Self::InsufficientAllowance { .. } => "ERC20: insufficient allowance",
            Self::BurnExceedsBalance { .. } => "ERC20: burn amount exceeds balance",
            Self::Overflow => "ERC20: amount overflow",
        }
    }
}

/// Errors raised by access-control checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Caller does not hold the required role.
    #[error("Caller {caller:?} lacks role {role:?}")]
    Unauthorized {
        caller: Address,
        role: crate::security::Role,
    },
}
