//! Yield calculations.
//!
//! The two Newton-Raphson solvers invert [`crate::pricing`] formulas using
//! their analytic derivatives. The remaining yields are closed form, apart
//! from [`yield_to_maturity`] which goes through the IRR solver.

use log::debug;

use tenor_core::tvm::{compound_yield_from_days, simple_yield};
use tenor_core::{CashflowSchedule, DayCountBasis, Frequency};
use tenor_math::solvers::newton_raphson;

use crate::bond::CouponBond;
use crate::config::{IrrConfig, YieldSolverConfig};
use crate::error::{ensure_positive, BondError, BondResult};
use crate::irr::irr_dated;
use crate::pricing::{accrued_interest, CompoundPricing, PriceModel, SimpleStubPricing};

/// Solves `model.price(y) = dirty_price` and returns the yield in percent.
fn solve<M: PriceModel>(
    model: &M,
    dirty_price: f64,
    config: &YieldSolverConfig,
) -> BondResult<f64> {
    ensure_positive("dirty price", dirty_price)?;
    let seed = config.initial_yield * 0.01;
    model.check_domain(seed)?;

    let result = newton_raphson(
        |y| model.price(y) - dirty_price,
        |y| model.derivative(y),
        seed,
        &config.solver_config(),
    )?;
    model.check_domain(result.root)?;

    debug!(
        "solved yield {:.10}% for price {dirty_price} in {} iterations",
        result.root * 100.0,
        result.iterations
    );
    Ok(result.root * 100.0)
}

/// Yield implied by a dirty price under compound discounting; the inverse of
/// [`crate::pricing::dirty_price`].
///
/// # Errors
///
/// Fails with [`tenor_math::MathError::DidNotConverge`] or
/// [`tenor_math::MathError::NumericalDivergence`] (wrapped in
/// [`BondError::Math`]) rather than returning an unconverged yield.
///
/// # Example
///
/// ```rust
/// use tenor_bonds::{pricing, yields, CouponBond, YieldSolverConfig};
/// use tenor_core::{DayCountBasis, Frequency};
///
/// let bond = CouponBond::new(100.0, 6.0, Frequency::Annual, 9, 100.0)
///     .unwrap()
///     .with_basis(DayCountBasis::Act360);
/// let price = pricing::dirty_price(&bond, 3.0).unwrap();
/// let y = yields::bond_yield(&bond, price, &YieldSolverConfig::default()).unwrap();
/// assert!((y - 3.0).abs() < 1e-9);
/// ```
pub fn bond_yield(
    bond: &CouponBond,
    dirty_price: f64,
    config: &YieldSolverConfig,
) -> BondResult<f64> {
    solve(&CompoundPricing::new(bond), dirty_price, config)
}

/// Money market yield implied by a dirty price; the inverse of
/// [`crate::pricing::money_market_price`].
pub fn money_market_yield(
    bond: &CouponBond,
    dirty_price: f64,
    bond_basis: DayCountBasis,
    config: &YieldSolverConfig,
) -> BondResult<f64> {
    solve(
        &SimpleStubPricing::money_market(bond, bond_basis),
        dirty_price,
        config,
    )
}

/// Moosmüller yield implied by a dirty price; the inverse of
/// [`crate::pricing::moosmuller_price`].
pub fn moosmuller_yield(
    bond: &CouponBond,
    dirty_price: f64,
    config: &YieldSolverConfig,
) -> BondResult<f64> {
    solve(&SimpleStubPricing::moosmuller(bond), dirty_price, config)
}

/// Closed-form yield of a zero-coupon bond, ignoring the bond's coupon.
pub fn zero_coupon_yield(bond: &CouponBond, dirty_price: f64) -> BondResult<f64> {
    ensure_positive("dirty price", dirty_price)?;
    let periods = bond.stub_fraction() + f64::from(bond.coupons_remaining() - 1);
    if periods <= 0.0 {
        return Err(BondError::domain(
            "zero-coupon yield needs a positive time to redemption",
        ));
    }
    let growth = (bond.notional() / dirty_price).powf(1.0 / periods);
    Ok((growth - 1.0) * bond.frequency().as_f64() * 100.0)
}

/// Yield to maturity of an annual-pay bond bought at `clean_price`: the IRR
/// of `years` coupons of `coupon` plus the notional at year `years`.
pub fn yield_to_maturity(
    notional: f64,
    clean_price: f64,
    coupon: f64,
    years: u32,
    config: &IrrConfig,
) -> BondResult<f64> {
    ensure_positive("clean price", clean_price)?;
    if years == 0 {
        return Err(BondError::invalid_spec("years to maturity must be at least 1"));
    }

    let schedule: CashflowSchedule = (1..=years)
        .map(|year| tenor_core::Cashflow::new(coupon, f64::from(year)))
        .chain(std::iter::once(tenor_core::Cashflow::new(
            notional,
            f64::from(years),
        )))
        .collect();
    irr_dated(clean_price, &schedule, config)
}

/// Yield with the capital gain amortised straight-line and no discounting.
pub fn simple_yield_to_maturity(
    notional: f64,
    clean_price: f64,
    coupon: f64,
    years: f64,
) -> BondResult<f64> {
    ensure_positive("clean price", clean_price)?;
    ensure_positive("years to maturity", years)?;
    Ok(100.0 * (coupon + (notional - clean_price) / years) / clean_price)
}

/// Coupon income over price.
pub fn current_yield(clean_price: f64, coupon: f64) -> BondResult<f64> {
    ensure_positive("clean price", clean_price)?;
    Ok(100.0 * coupon / clean_price)
}

/// Dirty price and final cashflow of a bond with one coupon left.
fn final_coupon_leg(
    notional: f64,
    clean_price: f64,
    coupon_rate: f64,
    frequency: Frequency,
    days_since_last_coupon: f64,
    basis: DayCountBasis,
) -> BondResult<(f64, f64)> {
    ensure_positive("clean price", clean_price)?;
    let dirty = clean_price + accrued_interest(notional, coupon_rate, days_since_last_coupon, basis);
    let redemption = notional * (1.0 + coupon_rate * 0.01 / frequency.as_f64());
    Ok((dirty, redemption))
}

/// Compound yield of a bond whose only remaining cashflow is the final
/// coupon plus redemption.
pub fn compound_yield_from_final_coupon(
    notional: f64,
    clean_price: f64,
    coupon_rate: f64,
    frequency: Frequency,
    days_since_last_coupon: f64,
    days_to_maturity: f64,
    basis: DayCountBasis,
) -> BondResult<f64> {
    ensure_positive("days to maturity", days_to_maturity)?;
    let (dirty, redemption) = final_coupon_leg(
        notional,
        clean_price,
        coupon_rate,
        frequency,
        days_since_last_coupon,
        basis,
    )?;
    Ok(compound_yield_from_days(dirty, redemption, days_to_maturity, basis))
}

/// Simple (money market style) yield of a bond in its final coupon period.
pub fn simple_yield_from_final_coupon(
    notional: f64,
    clean_price: f64,
    coupon_rate: f64,
    frequency: Frequency,
    days_since_last_coupon: f64,
    days_to_maturity: f64,
    basis: DayCountBasis,
) -> BondResult<f64> {
    ensure_positive("days to maturity", days_to_maturity)?;
    let (dirty, redemption) = final_coupon_leg(
        notional,
        clean_price,
        coupon_rate,
        frequency,
        days_since_last_coupon,
        basis,
    )?;
    Ok(simple_yield(dirty, redemption, days_to_maturity, basis))
}
