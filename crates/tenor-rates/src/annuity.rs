//! Annuities: level payments bought with a lump sum.
//!
//! A deferred annuity pays at the end of each year, an annuity due at the
//! start. Each payment function has an inverse giving the lump sum that
//! buys a given payment.

use tenor_core::interest::compound_growth_factor;

use crate::error::{ensure_non_zero, RatesError, RatesResult};

fn check_years(years: u32, minimum: u32) -> RatesResult<f64> {
    if years < minimum {
        return Err(RatesError::invalid_input(format!(
            "annuity needs at least {minimum} payments, got {years}"
        )));
    }
    Ok(f64::from(years))
}

/// `1 - (1 + i)^-n`
fn deferred_factor(rate: f64, years: f64) -> f64 {
    1.0 - 1.0 / compound_growth_factor(rate, years)
}

/// `1 + i - (1 + i)^-(n-1)`
fn due_factor(rate: f64, years: f64) -> f64 {
    1.0 + rate * 0.01 - 1.0 / compound_growth_factor(rate, years - 1.0)
}

/// Annual payment, at each year end, bought by `initial_cost`.
pub fn deferred_payment(initial_cost: f64, rate: f64, years: u32) -> RatesResult<f64> {
    let n = check_years(years, 1)?;
    let factor = ensure_non_zero("annuity factor", deferred_factor(rate, n))?;
    Ok(initial_cost * rate * 0.01 / factor)
}

/// Lump sum that buys `payment` at each year end: the NPV of the payments.
pub fn deferred_initial_cost(payment: f64, rate: f64, years: u32) -> RatesResult<f64> {
    let n = check_years(years, 1)?;
    let i = ensure_non_zero("rate", rate * 0.01)?;
    Ok(payment / i * deferred_factor(rate, n))
}

/// Annual payment, at each year start, bought by `initial_cost`.
pub fn due_payment(initial_cost: f64, rate: f64, years: u32) -> RatesResult<f64> {
    let n = check_years(years, 1)?;
    let factor = ensure_non_zero("annuity factor", due_factor(rate, n))?;
    Ok(initial_cost * rate * 0.01 / factor)
}

/// Lump sum that buys `payment` at each year start.
pub fn due_initial_cost(payment: f64, rate: f64, years: u32) -> RatesResult<f64> {
    let n = check_years(years, 1)?;
    let i = ensure_non_zero("rate", rate * 0.01)?;
    Ok(payment / i * due_factor(rate, n))
}

/// Payment in perpetuity bought by `initial_cost`.
#[must_use]
pub fn perpetual_payment(initial_cost: f64, rate: f64) -> f64 {
    initial_cost * rate * 0.01
}

/// Cost of a perpetual payment.
pub fn perpetual_initial_cost(payment: f64, rate: f64) -> RatesResult<f64> {
    Ok(payment / ensure_non_zero("rate", rate * 0.01)?)
}
