//! Error types for bond operations.

use thiserror::Error;

use tenor_core::CoreError;
use tenor_math::MathError;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Invalid bond specification or pricing input.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Input outside the domain of a pricing formula.
    #[error("Domain error: {reason}")]
    Domain {
        /// Description of the violated domain.
        reason: String,
    },

    /// Root finder failure (divergence, non-convergence, no root).
    #[error("Solver error: {0}")]
    Math(#[from] MathError),

    /// Basis-layer error.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl BondError {
    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
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

/// Rejects values that are negative or not finite.
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> BondResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BondError::invalid_spec(format!(
            "{name} must be finite and non-negative, got {value}"
        )))
    }
}

/// Rejects values that are zero, negative or not finite.
pub(crate) fn ensure_positive(name: &str, value: f64) -> BondResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BondError::invalid_spec(format!(
            "{name} must be finite and positive, got {value}"
        )))
    }
}
