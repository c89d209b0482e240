//! Root-finding algorithms.
//!
//! - [`newton_raphson`]: quadratic convergence from a single seed, given an
//!   analytic derivative. Used to invert bond price formulas.
//! - [`damped_secant`]: two-seed secant iteration with an anchor-dependent
//!   damping factor. Used to solve internal rates of return.
//!
//! Both report non-convergence and degenerate steps as errors; neither ever
//! hands back a trial value that did not meet its tolerance.
//!
//! # Example
//!
//! ```rust
//! use tenor_math::solvers::{newton_raphson, SolverConfig};
//!
//! // Annual-pay 5y 5% bond priced at 95: solve for yield (as a fraction)
//! let price = |y: f64| {
//!     (1..=5).map(|t| 5.0 / (1.0 + y).powi(t)).sum::<f64>() + 100.0 / (1.0 + y).powi(5)
//! };
//! let d_price = |y: f64| {
//!     -(1..=5).map(|t| f64::from(t) * 5.0 / (1.0 + y).powi(t + 1)).sum::<f64>()
//!         - 500.0 / (1.0 + y).powi(6)
//! };
//!
//! let result = newton_raphson(|y| price(y) - 95.0, d_price, 0.05, &SolverConfig::default()).unwrap();
//! assert!(result.root > 0.05);
//! ```

mod newton;
mod secant;

pub use newton::newton_raphson;
pub use secant::damped_secant;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Tolerance for convergence. Absolute for Newton-Raphson, relative for
    /// the damped secant.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
    /// Largest `|f(root)|` accepted once the trials agree. Unbounded by
    /// default, so only `tolerance` decides.
    pub residual_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            residual_tolerance: f64::INFINITY,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
            residual_tolerance: f64::INFINITY,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the residual tolerance.
    #[must_use]
    pub fn with_residual_tolerance(mut self, residual_tolerance: f64) -> Self {
        self.residual_tolerance = residual_tolerance;
        self
    }

    /// Absolute tolerance matching a number of decimal places, capped at
    /// twelve places.
    ///
    /// ```rust
    /// use tenor_math::solvers::SolverConfig;
    ///
    /// assert_eq!(SolverConfig::tolerance_for_decimal_places(4), 1e-4);
    /// assert_eq!(SolverConfig::tolerance_for_decimal_places(20), 1e-12);
    /// ```
    #[must_use]
    pub fn tolerance_for_decimal_places(decimal_places: u32) -> f64 {
        1.0 / 10f64.powi(decimal_places.min(12) as i32)
    }
}

/// Result of a root-finding run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Function value at the root.
    pub residual: f64,
}
