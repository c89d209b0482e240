//! Error types for money market calculations.

use thiserror::Error;

use tenor_math::MathError;

/// A specialized Result type for money market calculations.
pub type RatesResult<T> = Result<T, RatesError>;

/// Errors that can occur during money market calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RatesError {
    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Input outside the domain of a formula.
    #[error("Domain error: {reason}")]
    Domain {
        /// Description of the violated domain.
        reason: String,
    },

    /// Numerical utility error.
    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

impl RatesError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a domain error.
    #[must_use]
    pub fn domain(reason: impl Into<String>) -> Self {
        Self::Domain {
            reason: reason.into(),
        }
    }
}

/// Rejects values that are zero, negative or not finite.
pub(crate) fn ensure_positive(name: &str, value: f64) -> RatesResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RatesError::invalid_input(format!(
            "{name} must be finite and positive, got {value}"
        )))
    }
}

/// Rejects a denominator that vanishes.
pub(crate) fn ensure_non_zero(name: &str, value: f64) -> RatesResult<f64> {
    if value == 0.0 || !value.is_finite() {
        Err(RatesError::domain(format!("{name} is {value}")))
    } else {
        Ok(value)
    }
}
