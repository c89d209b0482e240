//! Newton-Raphson root-finding algorithm.

use log::{debug, trace, warn};

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration `x_{n+1} = x_n - f(x_n) / f'(x_n)` and stops once two
/// consecutive trials differ by less than `config.tolerance` and `|f|` at the
/// latest trial is within `config.residual_tolerance`.
///
/// # Errors
///
/// - [`MathError::NumericalDivergence`] if the derivative is exactly zero or
///   any evaluation is not finite. The last finite trial is retained.
/// - [`MathError::DidNotConverge`] if `config.max_iterations` steps pass
///   without meeting the tolerance.
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{newton_raphson, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);
        if !fx.is_finite() {
            return Err(MathError::divergence(x, fx));
        }

        let dfx = df(x);
        if dfx == 0.0 || !dfx.is_finite() {
            warn!("Newton-Raphson: degenerate derivative {dfx:e} at x = {x}");
            return Err(MathError::divergence(x, dfx));
        }

        let next = x - fx / dfx;
        if !next.is_finite() {
            return Err(MathError::divergence(x, next));
        }
        trace!("Newton-Raphson iteration {iteration}: x = {next}, f(x) = {fx:e}");

        if (next - x).abs() < config.tolerance {
            let residual = f(next);
            if residual.abs() <= config.residual_tolerance || next == x {
                let iterations = iteration + 1;
                debug!("Newton-Raphson converged to {next} in {iterations} iterations");
                return Ok(SolverResult {
                    root: next,
                    iterations,
                    residual,
                });
            }
        }
        x = next;
    }

    warn!(
        "Newton-Raphson gave up after {} iterations at x = {x}",
        config.max_iterations
    );
    Err(MathError::did_not_converge(config.max_iterations, x))
}
