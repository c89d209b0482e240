//! Closed-form bond prices.
//!
//! Every price here is a dirty price unless its name says otherwise, and
//! takes the market yield in percent. The stream of `h` coupons is summed as
//! a geometric series, discounted to the next coupon date, and the stub to
//! that date is discounted either by compound interest
//! ([`dirty_price`]) or by simple interest ([`moosmuller_price`],
//! [`money_market_price`]).
//!
//! The [`PriceModel`] implementations expose each formula together with its
//! analytic derivative in yield; the Newton-Raphson solvers in
//! [`crate::yields`] invert them.

use tenor_core::DayCountBasis;

use crate::bond::CouponBond;
use crate::error::{BondError, BondResult};

/// Largest `|h·x|` for which the geometric sums use their power series.
const SERIES_LIMIT: f64 = 1.0;

/// Ceiling on power series terms.
const SERIES_TERMS: f64 = 256.0;

/// With `s = 1 + x`, returns `(s^h - 1)/x` and its derivative in `x`.
///
/// Near `x = 0` both closed forms cancel catastrophically, so there the
/// binomial series `h + Σ C(h,n)·x^(n-1)` is summed instead. Both values
/// stay accurate through zero.
fn geometric_sum(x: f64, h: f64) -> (f64, f64) {
    if (h * x).abs() > SERIES_LIMIT {
        let sum = (h * x.ln_1p()).exp_m1() / x;
        return (sum, (h * (1.0 + x).powf(h - 1.0) - sum) / x);
    }

    // term = C(h,n)·x^(n-2)
    let mut term = h * (h - 1.0) / 2.0;
    let (mut tail, mut slope) = (0.0, 0.0);
    let mut n = 2.0;
    while term != 0.0 && n <= SERIES_TERMS {
        tail += term;
        slope += (n - 1.0) * term;
        if term.abs() <= 1e-17 * tail.abs() {
            break;
        }
        n += 1.0;
        term *= (h - n + 1.0) / n * x;
    }
    (h + x * tail, slope)
}

/// A price formula in yield, with its first derivative.
///
/// Yields are fractions (`0.05` for 5%).
pub trait PriceModel {
    /// Dirty price at yield `y`.
    fn price(&self, y: f64) -> f64;

    /// `dP/dy` at yield `y`.
    fn derivative(&self, y: f64) -> f64;

    /// Rejects yields for which the discount base is not positive.
    fn check_domain(&self, y: f64) -> BondResult<()>;
}

/// Compound discounting throughout, including the stub period.
///
/// With `s = 1 + y/k` and `e = 1 - h - stub`,
/// `P = N · s^e · (a·(s^h - 1)/y + 1)`.
#[derive(Debug, Clone, Copy)]
pub struct CompoundPricing {
    notional: f64,
    coupon: f64,
    frequency: f64,
    coupons: f64,
    stub: f64,
}

impl CompoundPricing {
    /// Builds the model for a bond.
    #[must_use]
    pub fn new(bond: &CouponBond) -> Self {
        Self {
            notional: bond.notional(),
            coupon: bond.coupon_rate() * 0.01,
            frequency: bond.frequency().as_f64(),
            coupons: f64::from(bond.coupons_remaining()),
            stub: bond.stub_fraction(),
        }
    }

    fn exponent(&self) -> f64 {
        1.0 - self.coupons - self.stub
    }

    /// Coupon stream plus redemption, per unit notional, compounded to the
    /// final coupon date, with its derivative in `y`.
    fn stream(&self, y: f64) -> (f64, f64) {
        let (a, k) = (self.coupon, self.frequency);
        let (sum, slope) = geometric_sum(y / k, self.coupons);
        (1.0 + a / k * sum, a / (k * k) * slope)
    }
}

impl PriceModel for CompoundPricing {
    fn price(&self, y: f64) -> f64 {
        let s = 1.0 + y / self.frequency;
        self.notional * s.powf(self.exponent()) * self.stream(y).0
    }

    fn derivative(&self, y: f64) -> f64 {
        let k = self.frequency;
        let e = self.exponent();
        let s = 1.0 + y / k;
        let (g, dg) = self.stream(y);
        self.notional * (e / k * s.powf(e - 1.0) * g + s.powf(e) * dg)
    }

    fn check_domain(&self, y: f64) -> BondResult<()> {
        check_base(1.0 + y / self.frequency, y)
    }
}

/// Simple interest on the stub, compound interest on the remaining periods
/// scaled by `bond_basis / basis`.
///
/// With `t` the basis ratio, `s = 1 + y·t/k` and `u = 1 + y·stub/k`,
/// `P = N · s^(1-h) · (a·(s^h - 1)/(y·t) + 1) / u`. A ratio of one gives the
/// Moosmüller convention.
#[derive(Debug, Clone, Copy)]
pub struct SimpleStubPricing {
    notional: f64,
    coupon: f64,
    frequency: f64,
    coupons: f64,
    stub: f64,
    time_scale: f64,
}

impl SimpleStubPricing {
    /// Money market yield convention: periods measured on `bond_basis`.
    #[must_use]
    pub fn money_market(bond: &CouponBond, bond_basis: DayCountBasis) -> Self {
        Self {
            notional: bond.notional(),
            coupon: bond.coupon_rate() * 0.01,
            frequency: bond.frequency().as_f64(),
            coupons: f64::from(bond.coupons_remaining()),
            stub: bond.stub_fraction(),
            time_scale: bond_basis.days_in_year() / bond.basis().days_in_year(),
        }
    }

    /// Moosmüller convention.
    #[must_use]
    pub fn moosmuller(bond: &CouponBond) -> Self {
        Self::money_market(bond, bond.basis())
    }

    fn stream(&self, y: f64) -> (f64, f64) {
        let (a, k, t) = (self.coupon, self.frequency, self.time_scale);
        let (sum, slope) = geometric_sum(y * t / k, self.coupons);
        (1.0 + a / k * sum, a / k * slope * t / k)
    }
}

impl PriceModel for SimpleStubPricing {
    fn price(&self, y: f64) -> f64 {
        let k = self.frequency;
        let s = 1.0 + y * self.time_scale / k;
        let u = 1.0 + y * self.stub / k;
        self.notional * s.powf(1.0 - self.coupons) * self.stream(y).0 / u
    }

    fn derivative(&self, y: f64) -> f64 {
        let (h, k, t) = (self.coupons, self.frequency, self.time_scale);
        let s = 1.0 + y * t / k;
        let u = 1.0 + y * self.stub / k;

        let f = s.powf(1.0 - h);
        let df = (1.0 - h) * s.powf(-h) * t / k;
        let (g, dg) = self.stream(y);

        self.notional * ((df * g + f * dg) / u - f * g * self.stub / (k * u * u))
    }

    fn check_domain(&self, y: f64) -> BondResult<()> {
        let k = self.frequency;
        check_base(1.0 + y * self.time_scale / k, y)?;
        check_base(1.0 + y * self.stub / k, y)
    }
}

fn check_base(base: f64, y: f64) -> BondResult<()> {
    if base > 0.0 {
        Ok(())
    } else {
        Err(BondError::domain(format!(
            "yield {}% gives a non-positive discount base {base}",
            y * 100.0
        )))
    }
}

/// Converts a percent yield into a fraction after checking it.
fn yield_fraction(market_yield: f64) -> BondResult<f64> {
    if market_yield.is_finite() {
        Ok(market_yield * 0.01)
    } else {
        Err(BondError::invalid_spec(format!(
            "market yield must be finite, got {market_yield}"
        )))
    }
}

fn price_with<M: PriceModel>(model: &M, market_yield: f64) -> BondResult<f64> {
    let y = yield_fraction(market_yield)?;
    model.check_domain(y)?;
    Ok(model.price(y))
}

/// Geometric annuity factor `Σ s^-j` for `j` in `0..h`, with `s = 1 + x`.
fn annuity_factor(x: f64, h: f64) -> f64 {
    if x == 0.0 {
        h
    } else {
        let log_s = x.ln_1p();
        (-h * log_s).exp_m1() / (-log_s).exp_m1()
    }
}

/// Dirty price with compound discounting.
///
/// # Example
///
/// ```rust
/// use tenor_bonds::{pricing, CouponBond};
/// use tenor_core::{DayCountBasis, Frequency};
///
/// let bond = CouponBond::new(100.0, 6.0, Frequency::Annual, 9, 100.0)
///     .unwrap()
///     .with_basis(DayCountBasis::Act360);
/// let price = pricing::dirty_price(&bond, 3.0).unwrap();
/// assert!((price - 126.0201).abs() < 1e-4);
/// ```
pub fn dirty_price(bond: &CouponBond, market_yield: f64) -> BondResult<f64> {
    price_with(&CompoundPricing::new(bond), market_yield)
}

/// Dirty price using the discount-factor formulation found on financial
/// calculators. Agrees with [`dirty_price`].
pub fn dirty_price_calculator(bond: &CouponBond, market_yield: f64) -> BondResult<f64> {
    let y = yield_fraction(market_yield)?;
    let k = bond.frequency().as_f64();
    let h = f64::from(bond.coupons_remaining());
    let x = y / k;
    let s = 1.0 + x;
    check_base(s, y)?;

    let coupon = bond.coupon_rate() * 0.01 / k;
    let stream = coupon * annuity_factor(x, h) + s.powf(1.0 - h);
    Ok(bond.notional() * stream * s.powf(-bond.stub_fraction()))
}

/// Coupon accrued over `days_since_last_coupon`.
#[must_use]
pub fn accrued_interest(
    notional: f64,
    coupon_rate: f64,
    days_since_last_coupon: f64,
    basis: DayCountBasis,
) -> f64 {
    notional * coupon_rate * 0.01 * basis.year_fraction(days_since_last_coupon)
}

/// Dirty price less the coupon accrued since the last payment.
pub fn clean_price(
    bond: &CouponBond,
    market_yield: f64,
    days_since_last_coupon: f64,
    accrued_basis: DayCountBasis,
) -> BondResult<f64> {
    let accrued = accrued_interest(
        bond.notional(),
        bond.coupon_rate(),
        days_since_last_coupon,
        accrued_basis,
    );
    Ok(dirty_price(bond, market_yield)? - accrued)
}

/// Clean price inside the ex-dividend window.
///
/// The buyer will not receive the next coupon, so the accrued amount for the
/// days left to that coupon is owed to them and is added back.
pub fn clean_price_ex_dividend(
    bond: &CouponBond,
    market_yield: f64,
    accrued_basis: DayCountBasis,
) -> BondResult<f64> {
    let rebate = accrued_interest(
        bond.notional(),
        bond.coupon_rate(),
        bond.days_to_next_coupon(),
        accrued_basis,
    );
    Ok(dirty_price(bond, market_yield)? + rebate)
}

/// Dirty price under the Moosmüller convention: simple interest to the next
/// coupon, compound thereafter.
pub fn moosmuller_price(bond: &CouponBond, market_yield: f64) -> BondResult<f64> {
    price_with(&SimpleStubPricing::moosmuller(bond), market_yield)
}

/// Dirty price from a money market yield: simple interest to the next coupon
/// and periods scaled by `bond_basis / bond.basis()`.
pub fn money_market_price(
    bond: &CouponBond,
    market_yield: f64,
    bond_basis: DayCountBasis,
) -> BondResult<f64> {
    price_with(&SimpleStubPricing::money_market(bond, bond_basis), market_yield)
}

/// Calculator formulation of [`money_market_price`].
pub fn money_market_price_calculator(
    bond: &CouponBond,
    market_yield: f64,
    bond_basis: DayCountBasis,
) -> BondResult<f64> {
    let y = yield_fraction(market_yield)?;
    let k = bond.frequency().as_f64();
    let h = f64::from(bond.coupons_remaining());
    let time_scale = bond_basis.days_in_year() / bond.basis().days_in_year();
    let x = y * time_scale / k;
    let s = 1.0 + x;
    let u = 1.0 + y * bond.stub_fraction() / k;
    check_base(s, y)?;
    check_base(u, y)?;

    let coupon = bond.coupon_rate() * 0.01 / k;
    let stream = coupon * annuity_factor(x, h) + s.powf(1.0 - h);
    Ok(bond.notional() / u * stream)
}

/// Price of a stripped coupon or zero-coupon bond: [`dirty_price`] with the
/// coupon rate set to zero. Dirty and clean prices coincide.
pub fn stripped_price(bond: &CouponBond, market_yield: f64) -> BondResult<f64> {
    dirty_price(&bond.with_coupon_rate(0.0)?, market_yield)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tenor_core::Frequency;

    fn annual_bond(days: f64) -> CouponBond {
        CouponBond::new(100.0, 6.0, Frequency::Annual, 9, days)
            .unwrap()
            .with_basis(DayCountBasis::Act360)
    }

    fn numeric_derivative<M: PriceModel>(model: &M, y: f64, h: f64) -> f64 {
        (model.price(y + h) - model.price(y - h)) / (2.0 * h)
    }

    #[test]
    fn test_dirty_price() {
        let bond = annual_bond(100.0);
        assert_relative_eq!(dirty_price(&bond, 3.0).unwrap(), 126.0201, epsilon = 5e-5);
        assert_relative_eq!(
            dirty_price(&bond, 3.0).unwrap(),
            dirty_price_calculator(&bond, 3.0).unwrap(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_clean_prices() {
        let bond = annual_bond(100.0);
        assert_relative_eq!(accrued_interest(100.0, 6.0, 260.0, DayCountBasis::Act360), 4.3333, epsilon = 5e-5);
        assert_relative_eq!(
            clean_price(&bond, 3.0, 260.0, DayCountBasis::Act360).unwrap(),
            121.69,
            epsilon = 0.005
        );
        assert_relative_eq!(
            clean_price(&bond, 3.0, 0.0, DayCountBasis::Act365).unwrap(),
            dirty_price(&bond, 3.0).unwrap()
        );
        assert_relative_eq!(
            clean_price_ex_dividend(&annual_bond(4.0), 3.0, DayCountBasis::Act360).unwrap(),
            127.08,
            epsilon = 0.005
        );
    }

    #[test]
    fn test_simple_stub_prices() {
        let bond = CouponBond::new(100.0, 6.0, Frequency::Annual, 9, 100.0)
            .unwrap()
            .with_basis(DayCountBasis::Act360);
        let mm = money_market_price(&bond, 5.4, DayCountBasis::Act365).unwrap();
        assert_relative_eq!(mm, 107.7133, epsilon = 5e-5);
        assert_relative_eq!(
            mm,
            money_market_price_calculator(&bond, 5.4, DayCountBasis::Act365).unwrap(),
            epsilon = 1e-9
        );
        assert_relative_eq!(moosmuller_price(&bond, 5.4).unwrap(), 108.1931, epsilon = 5e-5);
    }

    #[test]
    fn test_stripped_price() {
        let bond = CouponBond::new(100.0, 6.0, Frequency::SemiAnnual, 9, 100.0)
            .unwrap()
            .with_basis(DayCountBasis::custom(182).unwrap());
        assert_relative_eq!(stripped_price(&bond, 6.0).unwrap(), 77.6692, epsilon = 5e-5);
    }

    #[test]
    fn test_zero_yield_limit() {
        // At zero yield the price is the undiscounted sum of cashflows.
        let bond = annual_bond(100.0);
        assert_relative_eq!(dirty_price(&bond, 0.0).unwrap(), 154.0, epsilon = 1e-9);
        assert_relative_eq!(dirty_price_calculator(&bond, 0.0).unwrap(), 154.0, epsilon = 1e-9);
        assert_relative_eq!(
            money_market_price(&bond, 0.0, DayCountBasis::Act365).unwrap(),
            154.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_analytic_derivatives() {
        let bond = CouponBond::new(100.0, 4.5, Frequency::SemiAnnual, 14, 47.0)
            .unwrap()
            .with_basis(DayCountBasis::custom(182).unwrap());
        let compound = CompoundPricing::new(&bond);
        let mm = SimpleStubPricing::money_market(&bond, DayCountBasis::Act365);
        let moos = SimpleStubPricing::moosmuller(&bond);

        for y in [0.01, 0.035, 0.08, 0.2] {
            assert_relative_eq!(compound.derivative(y), numeric_derivative(&compound, y, 1e-6), max_relative = 1e-6);
            assert_relative_eq!(mm.derivative(y), numeric_derivative(&mm, y, 1e-6), max_relative = 1e-6);
            assert_relative_eq!(moos.derivative(y), numeric_derivative(&moos, y, 1e-6), max_relative = 1e-6);
        }
    }

    #[test]
    fn test_derivative_near_zero_yield() {
        let bond = annual_bond(100.0);
        let compound = CompoundPricing::new(&bond);
        let mm = SimpleStubPricing::money_market(&bond, DayCountBasis::Act365);
        let moos = SimpleStubPricing::moosmuller(&bond);

        // A wider step keeps the finite difference clear of cancellation.
        for y in [0.0, 1e-9, -1e-9] {
            assert_relative_eq!(compound.derivative(y), numeric_derivative(&compound, y, 1e-4), max_relative = 1e-5);
            assert_relative_eq!(mm.derivative(y), numeric_derivative(&mm, y, 1e-4), max_relative = 1e-5);
            assert_relative_eq!(moos.derivative(y), numeric_derivative(&moos, y, 1e-4), max_relative = 1e-5);
        }
    }

    #[test]
    fn test_price_is_continuous_through_zero() {
        let bond = CouponBond::new(100.0, 8.0, Frequency::Quarterly, 40, 100.0).unwrap();
        let compound = CompoundPricing::new(&bond);
        let mm = SimpleStubPricing::money_market(&bond, DayCountBasis::Act365);

        let (at_zero, mm_at_zero) = (compound.price(0.0), mm.price(0.0));
        assert_relative_eq!(at_zero, 180.0, max_relative = 1e-14);
        assert_relative_eq!(mm_at_zero, 180.0, max_relative = 1e-14);
        for y in [1e-12, 1e-9, -1e-9] {
            assert_relative_eq!(compound.price(y), at_zero + y * compound.derivative(0.0), max_relative = 1e-11);
            assert_relative_eq!(mm.price(y), mm_at_zero + y * mm.derivative(0.0), max_relative = 1e-11);
        }
    }

    #[test]
    fn test_geometric_sum() {
        assert_eq!(geometric_sum(0.0, 9.0), (9.0, 36.0));

        let (sum, slope) = geometric_sum(0.01, 40.0);
        let exact = (1.01f64.powi(40) - 1.0) / 0.01;
        assert_relative_eq!(sum, exact, max_relative = 1e-13);
        assert_relative_eq!(slope, (40.0 * 1.01f64.powi(39) - exact) / 0.01, max_relative = 1e-10);

        // The series and closed forms meet at the switch-over.
        let h = 40.0;
        let (below, below_slope) = geometric_sum(SERIES_LIMIT / h * (1.0 - 1e-12), h);
        let (above, above_slope) = geometric_sum(SERIES_LIMIT / h * (1.0 + 1e-12), h);
        assert_relative_eq!(below, above, max_relative = 1e-10);
        assert_relative_eq!(below_slope, above_slope, max_relative = 1e-9);
    }

    #[test]
    fn test_domain_errors() {
        let bond = annual_bond(100.0);
        assert!(matches!(dirty_price(&bond, -100.0), Err(BondError::Domain { .. })));
        assert!(matches!(dirty_price(&bond, f64::NAN), Err(BondError::InvalidSpec { .. })));
        assert!(matches!(
            money_market_price(&bond, -150.0, DayCountBasis::Act365),
            Err(BondError::Domain { .. })
        ));
    }
}
