//! Discount instruments: T-bills, bankers' acceptances and commercial paper.
//!
//! Some of these are quoted on a yield (price = face / (1 + i·t)), others on
//! a discount rate (price = face · (1 - d·t)). The functions here move between
//! the two quotes and restate either as a bond-equivalent yield so the bill
//! can be compared with a bond that has one or two coupons left.

use log::debug;
use serde::{Deserialize, Serialize};

use tenor_core::interest::{convert_basis, simple_growth_factor};
use tenor_core::DayCountBasis;

use crate::error::{ensure_non_zero, ensure_positive, RatesError, RatesResult};

/// Longest maturity, in days, for which the bond-equivalent yield is a
/// straight basis conversion of the simple yield.
pub const BEY_LINEAR_LIMIT_DAYS: f64 = 182.0;

/// The pair of bases a bond-equivalent yield relates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountBasis {
    /// Basis of the discount instrument's quote.
    pub days_in_year: DayCountBasis,
    /// Basis of the bond yield it is compared against.
    pub bond_days_in_year: DayCountBasis,
}

impl Default for DiscountBasis {
    fn default() -> Self {
        Self {
            days_in_year: DayCountBasis::MONEY_MARKET,
            bond_days_in_year: DayCountBasis::BOND_MARKET,
        }
    }
}

impl DiscountBasis {
    /// Sets the instrument basis.
    #[must_use]
    pub fn with_days_in_year(mut self, basis: DayCountBasis) -> Self {
        self.days_in_year = basis;
        self
    }

    /// Sets the bond basis.
    #[must_use]
    pub fn with_bond_days_in_year(mut self, basis: DayCountBasis) -> Self {
        self.bond_days_in_year = basis;
        self
    }
}

/// A discount instrument pays its face value at maturity and nothing else.
#[must_use]
pub fn maturity_proceeds(face_value: f64) -> f64 {
    face_value
}

/// Price of an instrument quoted on a yield.
pub fn price_from_yield(
    face_value: f64,
    market_yield: f64,
    days_to_maturity: f64,
    basis: DayCountBasis,
) -> RatesResult<f64> {
    let growth = ensure_non_zero(
        "growth factor",
        simple_growth_factor(market_yield, days_to_maturity, basis),
    )?;
    Ok(maturity_proceeds(face_value) / growth)
}

/// Discount rate scaled to the term, in percent of face.
#[must_use]
pub fn term_discount_rate(discount_rate: f64, days_to_maturity: f64, basis: DayCountBasis) -> f64 {
    discount_rate * basis.year_fraction(days_to_maturity)
}

/// Discount rate implied by a price: `(1 - P/F) · B/days`.
pub fn discount_rate_from_price(
    face_value: f64,
    price: f64,
    days_to_maturity: f64,
    basis: DayCountBasis,
) -> RatesResult<f64> {
    ensure_positive("face value", face_value)?;
    ensure_positive("days to maturity", days_to_maturity)?;
    Ok((1.0 - price / face_value) * (basis.days_in_year() / days_to_maturity) * 100.0)
}

/// Amount deducted from face for an instrument quoted on a discount rate.
#[must_use]
pub fn discount_amount(
    face_value: f64,
    discount_rate: f64,
    days_to_maturity: f64,
    basis: DayCountBasis,
) -> f64 {
    face_value * term_discount_rate(discount_rate, days_to_maturity, basis) * 0.01
}

/// Price of an instrument quoted on a discount rate.
#[must_use]
pub fn price_from_discount_rate(
    face_value: f64,
    discount_rate: f64,
    days_to_maturity: f64,
    basis: DayCountBasis,
) -> f64 {
    face_value * (1.0 - term_discount_rate(discount_rate, days_to_maturity, basis) * 0.01)
}

/// Return from buying at one discount rate and selling `days_held` later at
/// another, annualised on `return_basis`.
pub fn holding_period_yield(
    purchase_discount_rate: f64,
    sale_discount_rate: f64,
    initial_maturity: f64,
    days_held: f64,
    basis: DayCountBasis,
    return_basis: DayCountBasis,
) -> RatesResult<f64> {
    ensure_positive("days held", days_held)?;
    let days_to_maturity = initial_maturity - days_held;
    let purchase = ensure_non_zero(
        "purchase price ratio",
        1.0 - purchase_discount_rate * 0.01 * basis.year_fraction(initial_maturity),
    )?;
    let sale = 1.0 - sale_discount_rate * 0.01 * basis.year_fraction(days_to_maturity);
    Ok((sale / purchase - 1.0) * (return_basis.days_in_year() / days_held) * 100.0)
}

/// Discount rate equivalent to a yield: `i / (1 + i·t)`.
pub fn discount_rate_from_yield(
    market_yield: f64,
    days_to_maturity: f64,
    basis: DayCountBasis,
) -> RatesResult<f64> {
    let i = market_yield * 0.01;
    let denominator = ensure_non_zero("1 + i·t", 1.0 + i * basis.year_fraction(days_to_maturity))?;
    Ok(i / denominator * 100.0)
}

/// Yield equivalent to a discount rate: `d / (1 - d·t)`.
///
/// ```rust
/// use tenor_core::DayCountBasis;
/// use tenor_rates::discount::yield_from_discount_rate;
///
/// let y = yield_from_discount_rate(8.0, 100.0, DayCountBasis::Act360).unwrap();
/// assert!((y - 8.1818).abs() < 1e-4);
/// ```
pub fn yield_from_discount_rate(
    discount_rate: f64,
    days_to_maturity: f64,
    basis: DayCountBasis,
) -> RatesResult<f64> {
    let d = discount_rate * 0.01;
    let denominator = ensure_non_zero("1 - d·t", 1.0 - d * basis.year_fraction(days_to_maturity))?;
    Ok(d / denominator * 100.0)
}

/// Coefficients of `a·y² + b·y` shared by both directions of the long-dated
/// bond-equivalent yield.
fn bey_coefficients(days_to_maturity: f64, bond_basis: DayCountBasis) -> (f64, f64) {
    let t = bond_basis.year_fraction(days_to_maturity);
    (t - 0.5, 2.0 * t)
}

/// Bond-equivalent yield of a discount instrument.
///
/// Up to [`BEY_LINEAR_LIMIT_DAYS`] the simple yield is restated on the bond
/// basis. Beyond it a bond would pay a coupon before maturity, so the yield
/// solves `a·y² + b·y + c = 0` with `a = t - 1/2`, `b = 2t` and
/// `c = 2(1 - 1/P)`, where `t` is the term on the bond basis and
/// `P = 1 - d·days/B` is the price per unit of face.
///
/// # Errors
///
/// Returns [`RatesError::Domain`] if the discriminant is negative or the
/// price ratio is not positive.
///
/// # Example
///
/// ```rust
/// use tenor_rates::discount::{bond_equivalent_yield, DiscountBasis};
///
/// let basis = DiscountBasis::default();
/// let short = bond_equivalent_yield(8.0, 182.0, basis).unwrap();
/// let long = bond_equivalent_yield(8.0, 183.0, basis).unwrap();
/// assert!((short - 8.4530).abs() < 1e-4);
/// assert!((long - 8.4540).abs() < 1e-4);
/// ```
pub fn bond_equivalent_yield(
    discount_rate: f64,
    days_to_maturity: f64,
    basis: DiscountBasis,
) -> RatesResult<f64> {
    ensure_positive("days to maturity", days_to_maturity)?;
    if days_to_maturity <= BEY_LINEAR_LIMIT_DAYS {
        let simple = yield_from_discount_rate(discount_rate, days_to_maturity, basis.days_in_year)?;
        return Ok(convert_basis(simple, basis.days_in_year, basis.bond_days_in_year));
    }

    let price_ratio =
        1.0 - discount_rate * 0.01 * basis.days_in_year.year_fraction(days_to_maturity);
    if price_ratio <= 0.0 {
        return Err(RatesError::domain(format!(
            "discount rate {discount_rate}% over {days_to_maturity} days leaves no price"
        )));
    }

    let (a, b) = bey_coefficients(days_to_maturity, basis.bond_days_in_year);
    let c = 2.0 * (1.0 - 1.0 / price_ratio);
    if a.abs() < f64::EPSILON {
        // Exactly half a bond year: the quadratic term vanishes.
        return Ok(-c / b * 100.0);
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Err(RatesError::domain(format!(
            "bond-equivalent yield quadratic has negative discriminant {discriminant:e}"
        )));
    }
    let root = (-b + discriminant.sqrt()) / (2.0 * a);
    debug!("bond-equivalent yield {:.6}% over {days_to_maturity} days", root * 100.0);
    Ok(root * 100.0)
}

/// Discount rate whose bond-equivalent yield is `equivalent_yield`; the
/// inverse of [`bond_equivalent_yield`].
///
/// The long-dated branch needs no root: the quadratic gives the price ratio
/// `P = 1 / (1 + (a·y² + b·y)/2)` directly.
pub fn discount_rate_from_bond_equivalent_yield(
    equivalent_yield: f64,
    days_to_maturity: f64,
    basis: DiscountBasis,
) -> RatesResult<f64> {
    ensure_positive("days to maturity", days_to_maturity)?;
    if days_to_maturity <= BEY_LINEAR_LIMIT_DAYS {
        let simple = convert_basis(equivalent_yield, basis.bond_days_in_year, basis.days_in_year);
        return discount_rate_from_yield(simple, days_to_maturity, basis.days_in_year);
    }

    let y = equivalent_yield * 0.01;
    let (a, b) = bey_coefficients(days_to_maturity, basis.bond_days_in_year);
    let growth = ensure_non_zero("bond growth", 1.0 + (a * y * y + b * y) / 2.0)?;
    let price_ratio = 1.0 / growth;
    Ok((1.0 - price_ratio) / basis.days_in_year.year_fraction(days_to_maturity) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const MM: DayCountBasis = DayCountBasis::Act360;

    #[test]
    fn test_prices() {
        assert_relative_eq!(price_from_yield(1e6, 8.0, 100.0, MM).unwrap(), 978_260.87, epsilon = 0.005);
        assert_relative_eq!(price_from_discount_rate(1e6, 8.0, 100.0, MM), 977_777.78, epsilon = 0.005);
        assert_relative_eq!(discount_amount(1e6, 8.0, 100.0, MM), 22_222.22, epsilon = 0.005);
        assert_relative_eq!(maturity_proceeds(1e6), 1e6);
    }

    #[test]
    fn test_discount_rate_round_trips() {
        let price = price_from_discount_rate(1e6, 8.0, 100.0, MM);
        assert_relative_eq!(discount_rate_from_price(1e6, price, 100.0, MM).unwrap(), 8.0, epsilon = 1e-10);

        let y = yield_from_discount_rate(8.0, 100.0, MM).unwrap();
        assert_relative_eq!(y, 8.1818, epsilon = 5e-5);
        assert_relative_eq!(discount_rate_from_yield(y, 100.0, MM).unwrap(), 8.0, epsilon = 1e-10);
    }

    #[test]
    fn test_holding_period_yield() {
        // Bought at 8% with 100 days left, sold at 7.5% with 60 days left.
        let y = holding_period_yield(8.0, 7.5, 100.0, 40.0, MM, DayCountBasis::Act365).unwrap();
        let bought = price_from_discount_rate(1.0, 8.0, 100.0, MM);
        let sold = price_from_discount_rate(1.0, 7.5, 60.0, MM);
        assert_relative_eq!(y, (sold / bought - 1.0) * 365.0 / 40.0 * 100.0, epsilon = 1e-12);
        assert!(holding_period_yield(8.0, 7.5, 100.0, 0.0, MM, MM).is_err());
    }

    #[test]
    fn test_bond_equivalent_yield() {
        let basis = DiscountBasis::default();
        assert_relative_eq!(bond_equivalent_yield(8.0, 100.0, basis).unwrap(), 8.2955, epsilon = 5e-5);
        assert_relative_eq!(bond_equivalent_yield(8.0, 182.0, basis).unwrap(), 8.4530, epsilon = 5e-5);
        assert_relative_eq!(bond_equivalent_yield(8.0, 183.0, basis).unwrap(), 8.4540, epsilon = 5e-5);
    }

    #[test]
    fn test_bey_at_half_bond_year() {
        let basis = DiscountBasis::default().with_bond_days_in_year(DayCountBasis::ActAct);
        let at = bond_equivalent_yield(8.0, 182.0, basis).unwrap();
        let after = bond_equivalent_yield(8.0, 183.0, basis).unwrap();
        assert_relative_eq!(after, 8.4781, epsilon = 5e-5);
        assert!((after - at).abs() < 0.01);
    }

    #[test]
    fn test_bey_domain() {
        let basis = DiscountBasis::default();
        assert!(matches!(
            bond_equivalent_yield(400.0, 300.0, basis),
            Err(RatesError::Domain { .. })
        ));
        assert!(bond_equivalent_yield(8.0, 0.0, basis).is_err());
    }

    #[test]
    fn test_inverse_bey() {
        let basis = DiscountBasis::default();
        for days in [30.0, 100.0, 182.0, 183.0, 250.0, 364.0] {
            let bey = bond_equivalent_yield(8.0, days, basis).unwrap();
            let d = discount_rate_from_bond_equivalent_yield(bey, days, basis).unwrap();
            assert_relative_eq!(d, 8.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_discount_basis_serde() {
        let basis: DiscountBasis = serde_json::from_str(r#"{"days_in_year": "Act365"}"#).unwrap();
        assert_eq!(basis.days_in_year, DayCountBasis::Act365);
        assert_eq!(basis.bond_days_in_year, DayCountBasis::Act365);
    }

    proptest! {
        #[test]
        fn prop_bey_continuous_at_boundary(rate in 0.5f64..15.0) {
            let basis = DiscountBasis::default();
            let at = bond_equivalent_yield(rate, 182.0, basis).unwrap();
            let after = bond_equivalent_yield(rate, 183.0, basis).unwrap();
            // One extra day moves the yield by far less than a basis point
            // per percent of rate.
            prop_assert!((after - at).abs() < 1e-3 * rate);
        }
    }
}
