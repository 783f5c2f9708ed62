//! # Error Module
//!
//! Domain errors for Tierbank, built with thiserror.

use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Input violates the contract of an operation (e.g. a negative balance).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A tier schedule is empty, unordered or does not start at zero.
    #[error("invalid tier schedule: {0}")]
    InvalidSchedule(String),

    /// A result does not fit in a Decimal.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Check whether this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CoreError::InvalidArgument(_))
    }
}
