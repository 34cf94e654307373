//! # Call Context & Access Control
//!
//! Every state-changing call carries an explicit [`CallContext`]: who is
//! calling and at which block the call executes. Authorization is a
//! capability check against an injected [`AccessPolicy`], never an ambient
//! global.

use crate::entities::{short_address, Address, BlockNumber};
use crate::errors::AccessError;
use serde::{Deserialize, Serialize};

/// Roles that gate privileged operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Owner of the parameter store.
    Admin,
    /// Authority allowed to slash observers.
    Governance,
}

/// Execution context of a single atomic call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    /// Account submitting the call.
    pub caller: Address,
    /// Block number at which the call executes.
    pub block_number: BlockNumber,
}

impl CallContext {
    /// Create a new call context.
    pub fn new(caller: Address, block_number: BlockNumber) -> Self {
        Self {
            caller,
            block_number,
        }
    }
}

/// Authorization policy consulted by privileged operations.
pub trait AccessPolicy: Send + Sync {
    /// Returns true if `caller` holds `role`.
    fn is_authorized(&self, role: Role, caller: &Address) -> bool;

    /// Fails with [`AccessError::Unauthorized`] unless `caller` holds `role`.
    fn ensure(&self, role: Role, caller: &Address) -> Result<(), AccessError> {
        if self.is_authorized(role, caller) {
            Ok(())
        } else {
            tracing::warn!(
                caller = %short_address(caller),
                ?role,
                "Unauthorized privileged call"
            );
            Err(AccessError::Unauthorized {
                caller: *caller,
                role,
            })
        }
    }
}

/// A policy where exactly one address holds exactly one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleAuthority {
    role: Role,
    authority: Address,
}

impl SingleAuthority {
    /// Grant `role` to `authority`.
    pub fn new(role: Role, authority: Address) -> Self {
        Self { role, authority }
    }

    /// Governance authority, as used for slashing.
    pub fn governance(authority: Address) -> Self {
        Self::new(Role::Governance, authority)
    }

    /// The address holding the role.
    pub fn authority(&self) -> Address {
        self.authority
    }
}

impl AccessPolicy for SingleAuthority {
    fn is_authorized(&self, role: Role, caller: &Address) -> bool {
        role == self.role && *caller == self.authority
    }
}
