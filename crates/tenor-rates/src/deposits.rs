//! Certificates of deposit.
//!
//! A CD pays principal plus simple interest at maturity. Once issued it
//! trades on the secondary market at whatever price makes those fixed
//! proceeds earn the current yield.

use tenor_core::interest::{effective_rate_from_proceeds, simple_growth_factor};
use tenor_core::DayCountBasis;

use crate::error::{ensure_non_zero, ensure_positive, RatesError, RatesResult};

/// Principal plus interest paid at maturity.
#[must_use]
pub fn maturity_proceeds(
    face_value: f64,
    coupon_rate: f64,
    days_to_maturity: f64,
    basis: DayCountBasis,
) -> f64 {
    face_value * simple_growth_factor(coupon_rate, days_to_maturity, basis)
}

/// Price that earns `market_yield` on the maturity proceeds.
///
/// ```rust
/// use tenor_core::DayCountBasis;
/// use tenor_rates::deposits::{maturity_proceeds, secondary_market_price};
///
/// let proceeds = maturity_proceeds(1_000_000.0, 8.0, 100.0, DayCountBasis::Act360);
/// let price = secondary_market_price(proceeds, 7.0, 75.0, DayCountBasis::Act360).unwrap();
/// assert!((price - 1_007_529.09).abs() < 0.01);
/// ```
pub fn secondary_market_price(
    proceeds: f64,
    market_yield: f64,
    days_to_maturity: f64,
    basis: DayCountBasis,
) -> RatesResult<f64> {
    let growth = ensure_non_zero(
        "growth factor",
        simple_growth_factor(market_yield, days_to_maturity, basis),
    )?;
    Ok(proceeds / growth)
}

/// Annualised return from buying at `purchase_yield` with `initial_maturity`
/// days left and selling at `sale_yield` after `days_held`.
pub fn holding_period_yield(
    purchase_yield: f64,
    sale_yield: f64,
    initial_maturity: f64,
    days_held: f64,
    basis: DayCountBasis,
) -> RatesResult<f64> {
    ensure_positive("days held", days_held)?;
    let purchase = simple_growth_factor(purchase_yield, initial_maturity, basis);
    let sale = ensure_non_zero(
        "sale growth factor",
        simple_growth_factor(sale_yield, initial_maturity - days_held, basis),
    )?;
    Ok((purchase / sale - 1.0) * (basis.days_in_year() / days_held) * 100.0)
}

/// Sale yield at which selling after `days_held` returns `target_yield`
/// over the holding period.
pub fn sale_yield_for_target(
    target_yield: f64,
    purchase_yield: f64,
    initial_maturity: f64,
    days_held: f64,
    basis: DayCountBasis,
) -> RatesResult<f64> {
    let days_to_maturity = initial_maturity - days_held;
    if days_to_maturity <= 0.0 {
        return Err(RatesError::invalid_input(format!(
            "holding {days_held} days leaves nothing of a {initial_maturity} day CD"
        )));
    }
    let purchase = simple_growth_factor(purchase_yield, initial_maturity, basis);
    let target = simple_growth_factor(target_yield, days_held, basis);
    Ok((purchase / target - 1.0) * (basis.days_in_year() / days_to_maturity) * 100.0)
}

/// Effective annual yield between purchase and sale, compounding the
/// holding-period return.
pub fn effective_holding_yield(
    purchase_yield: f64,
    sale_yield: f64,
    days_purchase_to_maturity: f64,
    days_sale_to_maturity: f64,
    basis: DayCountBasis,
) -> RatesResult<f64> {
    let days_held = days_purchase_to_maturity - days_sale_to_maturity;
    ensure_positive("days held", days_held)?;
    let purchase = simple_growth_factor(purchase_yield, days_purchase_to_maturity, basis);
    let sale = ensure_non_zero(
        "sale growth factor",
        simple_growth_factor(sale_yield, days_sale_to_maturity, basis),
    )?;
    Ok(effective_rate_from_proceeds(sale, purchase, days_held, basis))
}

/// Price of a CD with several coupons left.
///
/// `coupon_periods` lists the length in days of each remaining coupon period.
/// The first coupon is discounted over `days_to_next_coupon`, each later one
/// over its own period on top of the ones before it.
pub fn multi_coupon_price(
    face_value: f64,
    coupon_rate: f64,
    market_yield: f64,
    days_to_next_coupon: f64,
    coupon_periods: &[f64],
    basis: DayCountBasis,
) -> RatesResult<f64> {
    if coupon_periods.is_empty() {
        return Err(RatesError::invalid_input("a CD needs at least one coupon period"));
    }

    let mut discount = 1.0;
    let mut coupons = 0.0;
    for (i, &period) in coupon_periods.iter().enumerate() {
        let days = if i == 0 { days_to_next_coupon } else { period };
        discount *= ensure_non_zero(
            "growth factor",
            simple_growth_factor(market_yield, days, basis),
        )?;
        coupons += face_value * coupon_rate * 0.01 * basis.year_fraction(period) / discount;
    }
    Ok(coupons + face_value / discount)
}
