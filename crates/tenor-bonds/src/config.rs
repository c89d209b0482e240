//! Solver configuration.
//!
//! Defaults reproduce the market-standard settings: yields solved to twelve
//! decimal places from a 5% seed, IRR seeded at 0.25% and 0.2% and
//! accepted once the NPV is within 1e-6 of zero.

use serde::{Deserialize, Serialize};

use tenor_math::solvers::SolverConfig;

/// Settings for the Newton-Raphson yield solvers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YieldSolverConfig {
    /// Precision of the solved yield in decimal places (capped at 12).
    pub decimal_places: u32,
    /// Iteration ceiling.
    pub max_iterations: u32,
    /// Seed yield, in percent.
    pub initial_yield: f64,
}

impl Default for YieldSolverConfig {
    fn default() -> Self {
        Self {
            decimal_places: 12,
            max_iterations: 1000,
            initial_yield: 5.0,
        }
    }
}

impl YieldSolverConfig {
    /// Sets the precision in decimal places.
    #[must_use]
    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Sets the iteration ceiling.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the seed yield (percent).
    #[must_use]
    pub fn with_initial_yield(mut self, initial_yield: f64) -> Self {
        self.initial_yield = initial_yield;
        self
    }

    /// Absolute tolerance on the yield as a fraction.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        SolverConfig::tolerance_for_decimal_places(self.decimal_places)
    }

    /// Converts into the root finder's configuration.
    #[must_use]
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance(), self.max_iterations)
    }
}

/// Settings for the internal-rate-of-return solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IrrConfig {
    /// The two seed rates, in percent.
    pub initial_rates: (f64, f64),
    /// Relative agreement between consecutive trials that ends the iteration.
    pub relative_tolerance: f64,
    /// Iteration ceiling.
    pub max_iterations: u32,
    /// Largest NPV residual accepted at the returned rate.
    pub residual_tolerance: f64,
}

impl Default for IrrConfig {
    fn default() -> Self {
        Self {
            initial_rates: (0.25, 0.20),
            relative_tolerance: 1e-4,
            max_iterations: 1000,
            residual_tolerance: 1e-6,
        }
    }
}

impl IrrConfig {
    /// Sets the seed rates (percent).
    #[must_use]
    pub fn with_initial_rates(mut self, first: f64, second: f64) -> Self {
        self.initial_rates = (first, second);
        self
    }

    /// Sets the relative tolerance.
    #[must_use]
    pub fn with_relative_tolerance(mut self, relative_tolerance: f64) -> Self {
        self.relative_tolerance = relative_tolerance;
        self
    }

    /// Sets the iteration ceiling.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the NPV residual ceiling.
    #[must_use]
    pub fn with_residual_tolerance(mut self, residual_tolerance: f64) -> Self {
        self.residual_tolerance = residual_tolerance;
        self
    }

    /// Converts into the root finder's configuration.
    #[must_use]
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.relative_tolerance, self.max_iterations)
            .with_residual_tolerance(self.residual_tolerance)
    }
}
