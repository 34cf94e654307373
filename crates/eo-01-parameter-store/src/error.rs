//! Error types for the parameter store

use shared_types::Address;
use thiserror::Error;

/// Parameter store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    /// Caller is not the current admin
    #[error("Only admin may change parameters (caller {caller:?})")]
    AdminOnly { caller: Address },

    /// Proposed value violates a parameter constraint
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}

impl ParameterError {
    /// Stable error code for clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AdminOnly { .. } => "ADMIN_ONLY",
            Self::InvalidValue { .. } => "INVALID_PARAMETER",
        }
    }
}

/// Result type for parameter store operations
pub type ParameterResult<T> = Result<T, ParameterError>;
