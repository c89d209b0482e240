//! Benchmarks for the yield and IRR solvers.
//!
//! Run with: cargo bench -p tenor-bonds

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use tenor_bonds::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_bond(coupons: u32) -> CouponBond {
    CouponBond::new(100.0, 4.5, Frequency::SemiAnnual, coupons, 47.0)
        .unwrap()
        .with_basis(DayCountBasis::custom(182).unwrap())
}

fn create_flows(years: usize) -> Vec<f64> {
    let mut flows = vec![6.0; years];
    if let Some(last) = flows.last_mut() {
        *last += 100.0;
    }
    flows
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_bond_yield(c: &mut Criterion) {
    let config = YieldSolverConfig::default();
    let mut group = c.benchmark_group("bond_yield");

    for coupons in [4u32, 20, 60] {
        let bond = create_bond(coupons);
        let price = dirty_price(&bond, 6.25).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(coupons), &price, |b, &price| {
            b.iter(|| bond_yield(black_box(&bond), black_box(price), &config));
        });
    }
    group.finish();
}

fn bench_money_market_yield(c: &mut Criterion) {
    let config = YieldSolverConfig::default();
    let bond = create_bond(20);
    let price = money_market_price(&bond, 6.25, DayCountBasis::Act365).unwrap();

    c.bench_function("money_market_yield", |b| {
        b.iter(|| {
            money_market_yield(
                black_box(&bond),
                black_box(price),
                DayCountBasis::Act365,
                &config,
            )
        });
    });
}

fn bench_irr(c: &mut Criterion) {
    let config = IrrConfig::default();
    let mut group = c.benchmark_group("irr_yearly");

    for years in [5usize, 10, 30] {
        let flows = create_flows(years);
        group.bench_with_input(BenchmarkId::from_parameter(years), &flows, |b, flows| {
            b.iter(|| irr_yearly(black_box(95.0), black_box(flows), &config));
        });
    }
    group.finish();
}

criterion_group!(solvers, bench_bond_yield, bench_money_market_yield);
criterion_group!(irr, bench_irr);
criterion_main!(solvers, irr);
