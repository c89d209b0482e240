//! Internal rate of return.
//!
//! Both entry points share one damped-secant kernel over
//! `NPV(r) = Σ cf / (1 + r)^t - initial_investment`.

use log::debug;

use tenor_core::tvm::npv;
use tenor_core::CashflowSchedule;
use tenor_math::solvers::damped_secant;
use tenor_math::MathError;

use crate::config::IrrConfig;
use crate::error::{BondError, BondResult};

/// IRR of cashflows received on consecutive whole years starting at year 1.
///
/// # Example
///
/// ```rust
/// use tenor_bonds::{irr::irr_yearly, IrrConfig};
///
/// let rate = irr_yearly(1300.0, &[100.0, -200.0, 1100.0, 350.0], &IrrConfig::default()).unwrap();
/// assert!((rate - 1.1654).abs() < 1e-4);
/// ```
pub fn irr_yearly(
    initial_investment: f64,
    cashflows: &[f64],
    config: &IrrConfig,
) -> BondResult<f64> {
    irr_dated(initial_investment, &CashflowSchedule::yearly(cashflows), config)
}

/// IRR of cashflows at explicit (possibly fractional) year offsets.
pub fn irr_dated_flows(
    initial_investment: f64,
    cashflows: &[f64],
    years: &[f64],
    config: &IrrConfig,
) -> BondResult<f64> {
    let schedule = CashflowSchedule::new(cashflows, years)?;
    irr_dated(initial_investment, &schedule, config)
}

/// IRR of a dated schedule against an initial outflow, in percent.
///
/// # Errors
///
/// - [`BondError::InvalidSpec`] for an empty schedule or non-finite outflow.
/// - [`MathError::NoRootFound`] when the outflow and the cashflows never
///   change sign.
/// - [`MathError::DidNotConverge`] or [`MathError::NumericalDivergence`] if
///   the iteration fails.
pub fn irr_dated(
    initial_investment: f64,
    schedule: &CashflowSchedule,
    config: &IrrConfig,
) -> BondResult<f64> {
    if schedule.is_empty() {
        return Err(BondError::invalid_spec("IRR needs at least one cashflow"));
    }
    if !initial_investment.is_finite() {
        return Err(BondError::invalid_spec(format!(
            "initial investment must be finite, got {initial_investment}"
        )));
    }
    ensure_sign_change(initial_investment, schedule)?;

    let anchor = -initial_investment;
    let objective = |r: f64| npv(schedule, r * 100.0) + anchor;
    let (first, second) = config.initial_rates;

    let result = damped_secant(
        objective,
        first * 0.01,
        second * 0.01,
        anchor,
        &config.solver_config(),
    )?;

    debug!(
        "IRR {:.8}% after {} iterations (NPV residual {:e})",
        result.root * 100.0,
        result.iterations,
        result.residual
    );
    Ok(result.root * 100.0)
}

/// A real root needs both an inflow and an outflow among `-initial` and the
/// cashflows.
fn ensure_sign_change(initial_investment: f64, schedule: &CashflowSchedule) -> BondResult<()> {
    let amounts = std::iter::once(-initial_investment).chain(schedule.iter().map(|cf| cf.amount));
    let (mut positive, mut negative) = (false, false);
    for amount in amounts {
        positive |= amount > 0.0;
        negative |= amount < 0.0;
    }
    if positive && negative {
        Ok(())
    } else {
        Err(MathError::no_root("cashflows never change sign, so NPV has no zero").into())
    }
}
