//! Error types for the basis layer.

use thiserror::Error;

/// A specialized Result type for basis-layer operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building basis-layer values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Cashflow amounts and times have different lengths.
    #[error("Cashflow schedule mismatch: {amounts} amounts but {times} times")]
    LengthMismatch {
        /// Number of amounts supplied.
        amounts: usize,
        /// Number of time offsets supplied.
        times: usize,
    },

    /// Day-count basis is not strictly positive.
    #[error("Invalid day-count basis: {days} days in year")]
    InvalidBasis {
        /// The rejected number of days.
        days: u32,
    },
}

impl CoreError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
