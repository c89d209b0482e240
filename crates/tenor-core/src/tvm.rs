//! Time value of money.
//!
//! Present and future values, holding-period yields, discount factors and
//! net present value. Rates are percentages; day counts are scaled by a
//! [`DayCountBasis`].

use crate::basis::DayCountBasis;
use crate::error::CoreResult;
use crate::interest::{compound_growth_factor, money_market_growth_factor, simple_growth_factor};
use crate::types::CashflowSchedule;

/// Future value of `amount` under simple interest.
#[must_use]
pub fn simple_future_value(amount: f64, rate: f64, days: f64, basis: DayCountBasis) -> f64 {
    amount * simple_growth_factor(rate, days, basis)
}

/// Future value of `amount` compounded annually.
#[must_use]
pub fn compound_future_value(amount: f64, rate: f64, years: f64) -> f64 {
    amount * compound_growth_factor(rate, years)
}

/// Present value of `amount` received after `days` under simple interest.
#[must_use]
pub fn simple_present_value(amount: f64, rate: f64, days: f64, basis: DayCountBasis) -> f64 {
    amount / simple_growth_factor(rate, days, basis)
}

/// Present value of `amount` received after `years` of annual compounding.
#[must_use]
pub fn compound_present_value(amount: f64, rate: f64, years: f64) -> f64 {
    amount / compound_growth_factor(rate, years)
}

/// Annualised simple yield from buying at `purchase` and selling at `sale`.
#[must_use]
pub fn simple_yield(purchase: f64, sale: f64, days: f64, basis: DayCountBasis) -> f64 {
    100.0 * (sale / purchase - 1.0) * (basis.days_in_year() / days)
}

/// Annually compounded yield over a whole number of years.
#[must_use]
pub fn compound_yield(purchase: f64, sale: f64, years: f64) -> f64 {
    100.0 * ((sale / purchase).powf(1.0 / years) - 1.0)
}

/// Annually compounded yield over a holding period given in days.
#[must_use]
pub fn compound_yield_from_days(purchase: f64, sale: f64, days: f64, basis: DayCountBasis) -> f64 {
    100.0 * ((sale / purchase).powf(basis.days_in_year() / days) - 1.0)
}

/// Simple discount factor `1 / (1 + r·d/B)`.
#[must_use]
pub fn simple_discount_factor(rate: f64, days: f64, basis: DayCountBasis) -> f64 {
    1.0 / simple_growth_factor(rate, days, basis)
}

/// Compound discount factor `(1 + r)^-n`.
#[must_use]
pub fn compound_discount_factor(rate: f64, years: f64) -> f64 {
    1.0 / compound_growth_factor(rate, years)
}

/// Simple discount factor on the ACT/360 basis.
#[must_use]
pub fn money_market_discount_factor(rate: f64, days: f64) -> f64 {
    1.0 / money_market_growth_factor(rate, days)
}

/// Continuously compounded discount factor `exp(-r·d/B)`.
#[must_use]
pub fn continuous_discount_factor(rate: f64, days: f64, basis: DayCountBasis) -> f64 {
    (-(rate * 0.01) * basis.year_fraction(days)).exp()
}

/// NPV of cashflows landing on consecutive whole years, starting at year 1.
#[must_use]
pub fn npv_yearly(amounts: &[f64], rate: f64) -> f64 {
    amounts
        .iter()
        .zip(1u32..)
        .map(|(&amount, year)| compound_present_value(amount, rate, f64::from(year)))
        .sum()
}

/// NPV of a dated schedule, each flow discounted by `(1 + r)^t`.
#[must_use]
pub fn npv(schedule: &CashflowSchedule, rate: f64) -> f64 {
    schedule
        .iter()
        .map(|cf| compound_present_value(cf.amount, rate, cf.time))
        .sum()
}

/// NPV of parallel amount and time slices.
///
/// # Errors
///
/// Returns an error if the slices differ in length or hold non-finite values.
pub fn npv_dated(amounts: &[f64], times: &[f64], rate: f64) -> CoreResult<f64> {
    let schedule = CashflowSchedule::new(amounts, times)?;
    Ok(npv(&schedule, rate))
}
