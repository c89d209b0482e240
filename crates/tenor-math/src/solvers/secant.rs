//! Damped secant iteration.

use log::{debug, trace, warn};

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Relative closeness test between two consecutive trials.
fn is_close(a: f64, b: f64, rel_tol: f64) -> bool {
    (a - b).abs() <= rel_tol * a.abs().max(b.abs())
}

/// Secant iteration with an empirical damping factor.
///
/// Each step takes the secant slope `a = Δx / Δf` through the last two trials
/// and scales the update by
///
/// `b = 1 - 1.4 · f(x_prev) / (f(x_prev) - 3·f(x_curr) + 2·anchor)`
///
/// so that `x_next = x_curr - f(x_curr)·a·b`. The `anchor` is the constant
/// term of `f` (for NPV problems, the signed initial outflow); including it
/// in the damping term curbs overshoot when the NPV curve is steep near the
/// root.
///
/// The iteration stops once the two most recent trials agree within the
/// relative `config.tolerance` and `|f|` at the latest trial is within
/// `config.residual_tolerance`. Trials that agree but cannot separate `f`
/// any further are accepted as they stand.
///
/// # Errors
///
/// - [`MathError::NumericalDivergence`] if the secant or damping denominator
///   is zero or a trial becomes non-finite.
/// - [`MathError::DidNotConverge`] after `config.max_iterations` steps.
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{damped_secant, SolverConfig};
///
/// // 110 received in one year for 100 today: rate is 10%
/// let npv = |r: f64| 110.0 / (1.0 + r) - 100.0;
/// let config = SolverConfig::new(1e-10, 100);
///
/// let result = damped_secant(npv, 0.25, 0.20, -100.0, &config).unwrap();
/// assert!((result.root - 0.10).abs() < 1e-8);
/// ```
pub fn damped_secant<F>(
    f: F,
    x0: f64,
    x1: f64,
    anchor: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut x_prev = x0;
    let mut x_curr = x1;
    let mut f_prev = f(x_prev);

    let converged = |root: f64, iterations: u32, residual: f64| {
        debug!("Damped secant converged to {root} in {iterations} iterations");
        SolverResult {
            root,
            iterations,
            residual,
        }
    };

    for iteration in 0..config.max_iterations {
        let f_curr = f(x_curr);
        let slope_denominator = f_curr - f_prev;

        if is_close(x_prev, x_curr, config.tolerance) {
            if f_curr.abs() <= config.residual_tolerance
                || x_prev == x_curr
                || slope_denominator == 0.0
            {
                return Ok(converged(x_curr, iteration, f_curr));
            }
            trace!("Damped secant: trials agree but residual {f_curr:e} is too large");
        }

        if slope_denominator == 0.0 || !slope_denominator.is_finite() {
            warn!("Damped secant: flat secant at x = {x_curr}");
            return Err(MathError::divergence(x_curr, slope_denominator));
        }
        let damping_denominator = f_prev - 3.0 * f_curr + 2.0 * anchor;
        if damping_denominator == 0.0 {
            warn!("Damped secant: zero damping denominator at x = {x_curr}");
            return Err(MathError::divergence(x_curr, damping_denominator));
        }

        let a = (x_curr - x_prev) / slope_denominator;
        let b = 1.0 - 1.4 * (f_prev / damping_denominator);
        let next = x_curr - f_curr * a * b;
        if !next.is_finite() {
            return Err(MathError::divergence(x_curr, next));
        }
        trace!("Damped secant iteration {iteration}: x = {next}, f(x_curr) = {f_curr:e}");

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = next;
    }

    warn!(
        "Damped secant gave up after {} iterations at x = {x_curr}",
        config.max_iterations
    );
    Err(MathError::did_not_converge(config.max_iterations, x_curr))
}
