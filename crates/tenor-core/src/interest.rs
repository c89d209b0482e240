//! Elementary interest-rate conversions.
//!
//! All rates are percentages. "Growth factor" functions return the
//! multiplier applied to a principal (`1 + r·t` or `(1 + r)^n`), so their
//! reciprocal is the matching discount factor.

use crate::basis::DayCountBasis;

/// Length of a calendar year, used where a rate is annualised to a real year
/// rather than to a quoting basis.
pub const CALENDAR_DAYS_IN_YEAR: f64 = 365.0;

/// Simple-interest growth factor `1 + r·days/basis`.
#[must_use]
pub fn simple_growth_factor(rate: f64, days: f64, basis: DayCountBasis) -> f64 {
    1.0 + rate * 0.01 * basis.year_fraction(days)
}

/// Simple-interest growth factor on the money market (ACT/360) basis.
#[must_use]
pub fn money_market_growth_factor(rate: f64, days: f64) -> f64 {
    simple_growth_factor(rate, days, DayCountBasis::MONEY_MARKET)
}

/// Compound growth factor `(1 + r)^years`.
#[must_use]
pub fn compound_growth_factor(rate: f64, years: f64) -> f64 {
    (1.0 + rate * 0.01).powf(years)
}

/// Amount after compounding `initial` annually for `years`.
#[must_use]
pub fn compound_interest(initial: f64, rate: f64, years: f64) -> f64 {
    initial * compound_growth_factor(rate, years)
}

/// Amount after applying simple interest for `days`.
#[must_use]
pub fn simple_interest(initial: f64, rate: f64, days: f64, basis: DayCountBasis) -> f64 {
    initial * simple_growth_factor(rate, days, basis)
}

/// Annual equivalent of a rate paid `payments` times a year.
#[must_use]
pub fn effective_rate(rate: f64, payments: f64) -> f64 {
    ((1.0 + rate * 0.01 / payments).powf(payments) - 1.0) * 100.0
}

/// Annual equivalent rate implied by growing `initial` into `proceeds` over `days`.
#[must_use]
pub fn effective_rate_from_proceeds(
    initial: f64,
    proceeds: f64,
    days: f64,
    basis: DayCountBasis,
) -> f64 {
    ((proceeds / initial).powf(basis.days_in_year() / days) - 1.0) * 100.0
}

/// Effective annual rate of a sub-year deposit paying a single coupon at
/// maturity, compounded up to a calendar year.
#[must_use]
pub fn effective_rate_coupon_at_maturity(rate: f64, days: f64, basis: DayCountBasis) -> f64 {
    (simple_growth_factor(rate, days, basis).powf(CALENDAR_DAYS_IN_YEAR / days) - 1.0) * 100.0
}

/// Effective annual rate when the period return (`ratio`, as a percentage) is known.
#[must_use]
pub fn effective_rate_from_ratio(ratio: f64, days: f64, basis: DayCountBasis) -> f64 {
    ((1.0 + ratio * 0.01).powf(basis.days_in_year() / days) - 1.0) * 100.0
}

/// Daily-compounded equivalent of a rate received after `days`.
#[must_use]
pub fn daily_effective_rate(rate: f64, days: f64, basis: DayCountBasis) -> f64 {
    let year = basis.days_in_year();
    ((1.0 + rate * 0.01 / (year / days)).powf(1.0 / days) - 1.0) * year * 100.0
}

/// Nominal rate paid `payments` times a year equivalent to an effective annual rate.
#[must_use]
pub fn nominal_rate(rate: f64, payments: f64) -> f64 {
    ((1.0 + rate * 0.01).powf(1.0 / payments) - 1.0) * payments * 100.0
}

/// Continuously compounded equivalent of a simple rate over `days`.
#[must_use]
pub fn continuously_compounded_rate(rate: f64, days: f64, basis: DayCountBasis) -> f64 {
    (basis.days_in_year() / days) * simple_growth_factor(rate, days, basis).ln() * 100.0
}

/// Effective annual rate from a continuously compounded rate.
#[must_use]
pub fn effective_rate_from_continuous(rate: f64) -> f64 {
    ((rate * 0.01).exp() - 1.0) * 100.0
}

/// Restates a simple rate quoted on `from` as the same accrual on `to`.
#[must_use]
pub fn convert_basis(rate: f64, from: DayCountBasis, to: DayCountBasis) -> f64 {
    rate * (to.days_in_year() / from.days_in_year())
}

/// ACT/365 rate to ACT/360.
#[must_use]
pub fn to_money_market_basis(rate: f64) -> f64 {
    convert_basis(rate, DayCountBasis::BOND_MARKET, DayCountBasis::MONEY_MARKET)
}

/// ACT/360 rate to ACT/365.
#[must_use]
pub fn to_bond_market_basis(rate: f64) -> f64 {
    convert_basis(rate, DayCountBasis::MONEY_MARKET, DayCountBasis::BOND_MARKET)
}

/// Converts a growth ratio (e.g. `1.05`) into a percentage rate (`5.0`).
#[must_use]
pub fn ratio_to_rate(ratio: f64) -> f64 {
    (ratio - 1.0) * 100.0
}
