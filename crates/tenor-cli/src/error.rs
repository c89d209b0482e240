//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid price.
    #[error("Invalid price: {0}. Must be positive.")]
    InvalidPrice(f64),

    /// A list entry that is not a number.
    #[error("Invalid number in list: '{0}'")]
    InvalidNumber(String),

    /// Cashflow and time lists of different lengths.
    #[error("Got {cashflows} cashflows but {times} times")]
    ScheduleMismatch {
        /// Number of cashflows.
        cashflows: usize,
        /// Number of times.
        times: usize,
    },

    /// Configuration file could not be read or parsed.
    #[error("Configuration error in {path}: {reason}")]
    Config {
        /// The configuration file.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
