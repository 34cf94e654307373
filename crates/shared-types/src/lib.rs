//! # Shared Types Crate
//!
//! Value types, call context, access control and the token-ledger
//! collaborator shared by the parameter store, observer staking, the epoch
//! oracle and the reward distributor.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-component types are defined here.
//! - **Explicit Context**: Every mutating call receives a `CallContext`
//!   carrying the caller and the executing block number.
//! - **Injected Authority**: Privileged calls consult an `AccessPolicy`
//!   instead of comparing against global state.

pub mod entities;
pub mod errors;
pub mod ledger;
pub mod security;

pub use entities::*;
pub use errors::*;
pub use ledger::{InMemoryLedger, TokenLedger};
pub use security::*;
