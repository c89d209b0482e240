//! Forward-forward rates, FRAs and short-term interest rate futures.

use serde::{Deserialize, Serialize};

use tenor_core::interest::simple_growth_factor;
use tenor_core::DayCountBasis;
use tenor_math::interpolation::{linear_interpolation, time_ratio};

use crate::error::{ensure_non_zero, ensure_positive, RatesError, RatesResult};

/// Rate for borrowing from the end of the short period to the end of the
/// long one, locked in by lending short and borrowing long.
///
/// ```rust
/// use tenor_core::DayCountBasis;
/// use tenor_rates::forwards::forward_forward_rate;
///
/// let rate = forward_forward_rate(10.0, 12.0, 30.0, 90.0, DayCountBasis::Act365).unwrap();
/// assert!((rate - 12.8940).abs() < 1e-4);
/// ```
pub fn forward_forward_rate(
    short_rate: f64,
    long_rate: f64,
    short_days: f64,
    long_days: f64,
    basis: DayCountBasis,
) -> RatesResult<f64> {
    let gap = long_days - short_days;
    if gap <= 0.0 {
        return Err(RatesError::invalid_input(format!(
            "long period ({long_days} days) must end after the short one ({short_days} days)"
        )));
    }
    let lending = ensure_non_zero("lending growth", simple_growth_factor(short_rate, short_days, basis))?;
    let borrowing = simple_growth_factor(long_rate, long_days, basis);
    Ok((borrowing / lending - 1.0) * (basis.days_in_year() / gap) * 100.0)
}

/// Forward-forward rate read off the line between two rates sharing a start
/// date.
pub fn interpolated_forward_forward_rate(
    near_rate: f64,
    far_rate: f64,
    near_days: f64,
    far_days: f64,
    target_days: f64,
) -> RatesResult<f64> {
    Ok(linear_interpolation(near_rate, far_rate, near_days, far_days, target_days)?)
}

/// Settlement paid to the FRA buyer, discounted from the end of the period.
/// Negative when the buyer pays.
pub fn fra_settlement(
    notional: f64,
    fra_rate: f64,
    reference_rate: f64,
    days: f64,
    basis: DayCountBasis,
) -> RatesResult<f64> {
    let t = basis.year_fraction(days);
    let reference = reference_rate * 0.01;
    let discount = ensure_non_zero("settlement discount", 1.0 + reference * t)?;
    Ok(notional * (fra_rate * 0.01 - reference) * t / discount)
}

/// [`fra_settlement`] with the FRA rate implied by a futures price.
pub fn fra_settlement_from_futures_price(
    notional: f64,
    futures_price: f64,
    reference_rate: f64,
    days: f64,
    basis: DayCountBasis,
) -> RatesResult<f64> {
    fra_settlement(notional, futures_rate(futures_price), reference_rate, days, basis)
}

/// Rate implied by a STIR futures price quoted as `100 - rate`.
#[must_use]
pub fn futures_rate(price: f64) -> f64 {
    100.0 - price
}

/// Rate for the whole span covered by consecutive periods, each refinanced
/// at its own rate.
pub fn interest_rate_strip(rates: &[f64], days: &[f64], basis: DayCountBasis) -> RatesResult<f64> {
    if rates.len() != days.len() {
        return Err(RatesError::invalid_input(format!(
            "{} rates but {} periods",
            rates.len(),
            days.len()
        )));
    }
    let total_days: f64 = days.iter().sum();
    ensure_positive("total days", total_days)?;

    let growth: f64 = rates
        .iter()
        .zip(days)
        .map(|(&rate, &period)| simple_growth_factor(rate, period, basis))
        .product();
    Ok((growth - 1.0) * (basis.days_in_year() / total_days) * 100.0)
}

/// Profit or loss on STIR futures for a price move in points.
#[must_use]
pub fn stir_futures_pnl(
    contract_notional: f64,
    contracts: f64,
    price_move: f64,
    contract_months: f64,
) -> f64 {
    contracts * contract_notional * price_move * 0.01 * contract_months / 12.0
}

/// Whole number of futures contracts hedging `notional` over `days`, where
/// each contract covers `futures_days`.
pub fn hedge_contracts(
    notional: f64,
    contract_notional: f64,
    reference_rate: f64,
    days: f64,
    futures_days: f64,
    basis: DayCountBasis,
) -> RatesResult<f64> {
    ensure_positive("contract notional", contract_notional)?;
    ensure_positive("futures period", futures_days)?;
    let contracts = notional / contract_notional * (days / futures_days);
    let discount = ensure_non_zero(
        "settlement discount",
        simple_growth_factor(reference_rate, days, basis),
    )?;
    Ok((contracts / discount).round())
}

/// Near and far contract quantities for a hedge between two futures dates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContractSplit {
    /// Contracts on the near date.
    pub near: f64,
    /// Contracts on the far date, scaled by the interpolation weight.
    pub far: f64,
}

/// Splits a hedge for `target_days` between near and far contracts that
/// share a start date.
pub fn contracts_by_interpolation(
    near_contracts: f64,
    far_contracts: f64,
    near_days: f64,
    far_days: f64,
    target_days: f64,
) -> RatesResult<ContractSplit> {
    let weight = time_ratio(near_days, far_days, target_days)?;
    Ok(ContractSplit {
        near: near_contracts,
        far: far_contracts * weight,
    })
}
