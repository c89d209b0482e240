//! Error types for numerical routines.

use thiserror::Error;

/// A specialized Result type for numerical routines.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during numerical routines.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Iteration ceiling reached before the tolerance was met.
    #[error("Did not converge after {iterations} iterations (last trial: {last})")]
    DidNotConverge {
        /// Number of iterations attempted.
        iterations: u32,
        /// Last trial value.
        last: f64,
    },

    /// An update step divided by zero or produced a non-finite value.
    #[error("Numerical divergence at trial {last}: degenerate value {value:.2e}")]
    NumericalDivergence {
        /// Last finite trial value.
        last: f64,
        /// The zero derivative, zero denominator or non-finite result.
        value: f64,
    },

    /// The problem admits no real root.
    #[error("No root found: {reason}")]
    NoRootFound {
        /// Why no root exists.
        reason: String,
    },

    /// Input outside the function's domain.
    #[error("Domain error: {reason}")]
    Domain {
        /// Description of the violated domain.
        reason: String,
    },

    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a non-convergence error.
    #[must_use]
    pub fn did_not_converge(iterations: u32, last: f64) -> Self {
        Self::DidNotConverge { iterations, last }
    }

    /// Creates a numerical divergence error.
    #[must_use]
    pub fn divergence(last: f64, value: f64) -> Self {
        Self::NumericalDivergence { last, value }
    }

    /// Creates a no-root error.
    #[must_use]
    pub fn no_root(reason: impl Into<String>) -> Self {
        Self::NoRootFound {
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

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::did_not_converge(1000, 0.05);
        assert!(err.to_string().contains("1000 iterations"));

        let err = MathError::divergence(0.05, 0.0);
        assert!(err.to_string().contains("0.05"));

        assert_eq!(
            MathError::insufficient_data(2, 1).to_string(),
            "Insufficient data: need at least 2, got 1"
        );
    }
}
