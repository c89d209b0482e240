//! # Tenor Math
//!
//! Numerical utilities for the Tenor valuation library.
//!
//! This crate provides:
//!
//! - **Solvers**: Newton-Raphson with an analytic derivative and a damped
//!   secant iteration for net-present-value problems
//! - **Interpolation**: time ratio, linear and logarithmic interpolation
//!   between two observations
//! - **Statistics**: mean, variance, volatility, correlation and covariance
//!
//! Every routine works on `f64` and reports failure through [`MathError`]
//! rather than returning NaN.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod interpolation;
pub mod solvers;
pub mod statistics;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{linear_interpolation, log_interpolation, time_ratio};
    pub use crate::solvers::{damped_secant, newton_raphson, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
