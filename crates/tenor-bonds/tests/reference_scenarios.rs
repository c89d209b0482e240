//! Reference scenarios for bond pricing, yield solving, IRR and risk.
//!
//! Expected values come from published worked examples for the money market
//! and bond market formulas, quoted to four decimal places unless noted.

use approx::assert_relative_eq;

use tenor_bonds::futures::{futures_hedge_notional, BondForward, CashAndCarry};
use tenor_bonds::prelude::*;
use tenor_bonds::risk::{duration_hedge_face_value, price_change_with_convexity, HedgePosition};
use tenor_bonds::yields::{yield_to_maturity, zero_coupon_yield};

// =============================================================================
// FIXTURES
// =============================================================================

/// 6% annual coupon, nine coupons left, next coupon in 100 days (ACT/360 stub).
fn nine_year_annual() -> CouponBond {
    CouponBond::new(100.0, 6.0, Frequency::Annual, 9, 100.0)
        .unwrap()
        .with_basis(DayCountBasis::Act360)
}

fn nine_year_flows() -> CashflowSchedule {
    CashflowSchedule::yearly(&[6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 6.0, 106.0])
}

// =============================================================================
// CLOSED-FORM PRICES
// =============================================================================

#[test]
fn dirty_price_of_annual_bond() {
    let price = dirty_price(&nine_year_annual(), 3.0).unwrap();
    assert_relative_eq!(price, 126.0201, epsilon = 5e-5);
}

#[test]
fn accrued_interest_after_260_days() {
    let accrued = accrued_interest(100.0, 6.0, 260.0, DayCountBasis::Act360);
    assert_relative_eq!(accrued, 4.3333, epsilon = 5e-5);
}

#[test]
fn money_market_and_moosmuller_prices() {
    let bond = nine_year_annual();
    assert_relative_eq!(
        money_market_price(&bond, 5.4, DayCountBasis::Act365).unwrap(),
        107.7133,
        epsilon = 5e-5
    );
    assert_relative_eq!(moosmuller_price(&bond, 5.4).unwrap(), 108.1931, epsilon = 5e-5);
}

#[test]
fn stripped_semi_annual_bond() {
    let bond = CouponBond::new(100.0, 6.0, Frequency::SemiAnnual, 9, 100.0)
        .unwrap()
        .with_basis(DayCountBasis::custom(182).unwrap());
    assert_relative_eq!(stripped_price(&bond, 6.0).unwrap(), 77.6692, epsilon = 5e-5);
}

// =============================================================================
// INVERSION
// =============================================================================

#[test]
fn bond_yield_recovers_market_yield() {
    let bond = nine_year_annual();
    let price = dirty_price(&bond, 3.0).unwrap();
    let y = bond_yield(&bond, price, &YieldSolverConfig::default()).unwrap();
    assert_relative_eq!(y, 3.0, epsilon = 1e-10);
}

#[test]
fn money_market_yield_from_quoted_price() {
    let y = money_market_yield(
        &nine_year_annual(),
        107.7133,
        DayCountBasis::Act365,
        &YieldSolverConfig::default(),
    )
    .unwrap();
    assert_relative_eq!(y, 5.4, epsilon = 5e-5);
}

#[test]
fn coarser_precision_still_round_trips() {
    let bond = nine_year_annual();
    let price = dirty_price(&bond, 7.25).unwrap();
    let config = YieldSolverConfig::default().with_decimal_places(6);
    let y = bond_yield(&bond, price, &config).unwrap();
    assert_relative_eq!(y, 7.25, epsilon = 1e-4);
    assert_relative_eq!(dirty_price(&bond, y).unwrap(), price, epsilon = 1e-4);
}

#[test]
fn zero_coupon_yield_semi_annual() {
    let bond = CouponBond::zero_coupon(100.0, Frequency::SemiAnnual, 16, 69.0)
        .unwrap()
        .with_basis(DayCountBasis::custom(184).unwrap());
    assert_relative_eq!(zero_coupon_yield(&bond, 65.48).unwrap(), 5.5845, epsilon = 5e-5);
}

#[test]
fn yield_to_maturity_of_discount_bond() {
    let ytm = yield_to_maturity(100.0, 90.0, 6.0, 9, &IrrConfig::default()).unwrap();
    assert_relative_eq!(ytm, 7.57, epsilon = 0.005);
}

// =============================================================================
// IRR
// =============================================================================

#[test]
fn irr_of_yearly_cashflows() {
    let rate = irr_yearly(1300.0, &[100.0, -200.0, 1100.0, 350.0], &IrrConfig::default()).unwrap();
    assert_relative_eq!(rate, 1.1654, epsilon = 5e-5);
}

#[test]
fn irr_of_half_yearly_cashflows() {
    let rate = irr_dated_flows(
        1300.0,
        &[1000.0, -200.0, 300.0, 400.0],
        &[0.5, 1.0, 1.5, 2.0],
        &IrrConfig::default(),
    )
    .unwrap();
    assert_relative_eq!(rate, 15.3945, epsilon = 5e-5);
}

// =============================================================================
// RISK
// =============================================================================

#[test]
fn duration_convexity_and_price_change() {
    let flows = nine_year_flows();
    assert_relative_eq!(macaulay_duration(5.4, &flows).unwrap(), 7.2510, epsilon = 5e-5);
    assert_relative_eq!(
        convexity(100.0, 5.4, Frequency::Annual, &flows).unwrap(),
        62.8629,
        epsilon = 5e-5
    );
    assert_relative_eq!(
        price_change_with_convexity(100.0, 5.4, 1.0, Frequency::Annual, &flows).unwrap(),
        -6.5652,
        epsilon = 5e-5
    );
}

#[test]
fn duration_hedge_of_three_holdings() {
    let positions = [
        HedgePosition::new(1_000_000.0, 109.20, 6.03),
        HedgePosition::new(3_000_000.0, 95.30, 9.20),
        HedgePosition::new(5_000_000.0, 102.80, 5.09),
    ];
    let face = duration_hedge_face_value(105.39, 8.25, &positions).unwrap();
    assert_relative_eq!(face, 6_791_531.60, epsilon = 0.005);
}

// =============================================================================
// FUTURES AND REPO
// =============================================================================

#[test]
fn bond_futures_price_and_hedge() {
    let forward = BondForward {
        clean_price: 105.0,
        coupon_rate: 6.0,
        frequency: Frequency::SemiAnnual,
        repo_rate: 5.4,
        days_since_last_coupon: 23.0,
        days_to_delivery: 100.0,
        days_in_coupon_period: 184.0,
        basis: DayCountBasis::Act360,
    };
    assert_relative_eq!(forward.futures_price(1.0087).unwrap(), 104.04, epsilon = 0.01);

    let notional =
        futures_hedge_notional(1_000_000.0, 5.4, 1.0087, 100.0, DayCountBasis::Act360).unwrap();
    assert_relative_eq!(notional, 993_793.10, epsilon = 0.005);
}

#[test]
fn implied_repo_and_carry() {
    let trade = CashAndCarry {
        clean_price: 105.0,
        futures_price: 104.0,
        accrued_now: 2.1,
        accrued_at_delivery: 2.8,
        coupon_reinvested: 0.0,
        conversion_factor: 1.034,
        days_to_delivery: 100.0,
        basis: DayCountBasis::Act360,
    };
    assert_relative_eq!(trade.implied_repo_rate().unwrap(), 10.8773, epsilon = 5e-5);
    assert_relative_eq!(trade.arbitrage_profit(100_000.0, 10.2).unwrap(), 194.87, epsilon = 0.005);
}
