//! Reference scenarios for money market instruments.

use approx::assert_relative_eq;

use tenor_rates::prelude::*;
use tenor_rates::{annuity, deposits, discount, forwards};

const MM: DayCountBasis = DayCountBasis::Act360;

// =============================================================================
// DISCOUNT INSTRUMENTS
// =============================================================================

#[test]
fn treasury_bill_quotes() {
    assert_relative_eq!(price_from_yield(1e6, 8.0, 100.0, MM).unwrap(), 978_260.87, epsilon = 0.005);
    assert_relative_eq!(price_from_discount_rate(1e6, 8.0, 100.0, MM), 977_777.78, epsilon = 0.005);
    assert_relative_eq!(discount::discount_amount(1e6, 8.0, 100.0, MM), 22_222.22, epsilon = 0.005);
    assert_relative_eq!(yield_from_discount_rate(8.0, 100.0, MM).unwrap(), 8.1818, epsilon = 5e-5);
}

#[test]
fn bond_equivalent_yield_across_half_year() {
    let basis = DiscountBasis::default();
    let short = bond_equivalent_yield(8.0, 100.0, basis).unwrap();
    let at = bond_equivalent_yield(8.0, 182.0, basis).unwrap();
    let after = bond_equivalent_yield(8.0, 183.0, basis).unwrap();

    assert_relative_eq!(short, 8.2955, epsilon = 5e-5);
    assert_relative_eq!(at, 8.4530, epsilon = 5e-5);
    assert_relative_eq!(after, 8.4540, epsilon = 5e-5);
    assert!((after - at).abs() < 0.01);
}

#[test]
fn bond_equivalent_yield_round_trip() {
    let basis = DiscountBasis::default();
    for days in [91.0, 182.0, 183.0, 273.0, 364.0] {
        let bey = bond_equivalent_yield(5.25, days, basis).unwrap();
        let rate = discount_rate_from_bond_equivalent_yield(bey, days, basis).unwrap();
        assert_relative_eq!(rate, 5.25, epsilon = 1e-9);
    }
}

// =============================================================================
// CERTIFICATES OF DEPOSIT
// =============================================================================

#[test]
fn certificate_of_deposit_lifecycle() {
    let proceeds = deposits::maturity_proceeds(1e6, 8.0, 100.0, MM);
    assert_relative_eq!(proceeds, 1_022_222.22, epsilon = 0.005);

    let price = deposits::secondary_market_price(proceeds, 7.0, 75.0, MM).unwrap();
    assert_relative_eq!(price, 1_007_529.09, epsilon = 0.005);

    let held = deposits::holding_period_yield(7.0, 6.0, 75.0, 25.0, MM).unwrap();
    assert_relative_eq!(held, 8.9256, epsilon = 5e-5);

    let price = deposits::multi_coupon_price(1e6, 8.0, 7.0, 40.0, &[92.0, 81.0, 91.0, 92.0], MM).unwrap();
    assert_relative_eq!(price, 1_019_603.36, epsilon = 0.005);
}

// =============================================================================
// ANNUITIES
// =============================================================================

#[test]
fn five_year_annuities_at_eight_percent() {
    assert_relative_eq!(annuity::deferred_initial_cost(5000.0, 8.0, 5).unwrap(), 19_963.55, epsilon = 0.005);
    assert_relative_eq!(annuity::deferred_payment(50_000.0, 8.0, 5).unwrap(), 12_522.82, epsilon = 0.005);
    assert_relative_eq!(annuity::due_initial_cost(5000.0, 8.0, 5).unwrap(), 21_560.63, epsilon = 0.005);
    assert_relative_eq!(annuity::due_payment(50_000.0, 8.0, 5).unwrap(), 11_595.21, epsilon = 0.005);
    assert_relative_eq!(annuity::perpetual_initial_cost(5000.0, 8.0).unwrap(), 62_500.0, epsilon = 1e-9);
    assert_relative_eq!(annuity::perpetual_payment(50_000.0, 8.0), 4000.0, epsilon = 1e-9);
}

// =============================================================================
// FORWARDS AND FUTURES
// =============================================================================

#[test]
fn forward_rates_and_fras() {
    let ffr = forward_forward_rate(10.0, 12.0, 30.0, 90.0, DayCountBasis::Act365).unwrap();
    assert_relative_eq!(ffr, 12.8940, epsilon = 5e-5);
    assert_relative_eq!(fra_settlement(1e6, 3.0, 1.5, 100.0, MM).unwrap(), 4149.38, epsilon = 0.005);
    assert_relative_eq!(
        forwards::fra_settlement_from_futures_price(1e6, 95.25, 6.5, 100.0, MM).unwrap(),
        -4774.90,
        epsilon = 0.005
    );
}

#[test]
fn strips_and_stir_hedges() {
    let strip =
        forwards::interest_rate_strip(&[3.5, 3.8, 4.2], &[31.0, 31.0, 30.0], DayCountBasis::Act365)
            .unwrap();
    assert_relative_eq!(strip, 3.8417, epsilon = 5e-5);
    assert_relative_eq!(forwards::stir_futures_pnl(3e6, 1.0, 0.005, 3.0), 37.5, epsilon = 1e-9);
    assert_relative_eq!(forwards::hedge_contracts(3e6, 1e6, 6.5, 100.0, 90.0, MM).unwrap(), 3.0);

    let split = forwards::contracts_by_interpolation(10.0, 10.0, 90.0, 120.0, 110.0).unwrap();
    assert_eq!(split, ContractSplit { near: 10.0, far: 10.0 * (20.0 / 30.0) });
}
