//! Criterion benchmarks for Black-Scholes pricing and implied volatility.
//!
//! Measures a single closed-form price and a full bisection inversion,
//! the latter across moneyness to show how iteration counts move cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::analytical::price;
use pricer_models::implied_vol::ImpliedVolSolver;
use pricer_models::instruments::{OptionContract, OptionKind};

/// Benchmark the closed-form pricer for both kinds.
fn bench_black_scholes_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("black_scholes_price");

    for kind in OptionKind::ALL {
        let contract = OptionContract::new(100.0, 100.0, 0.05, 1.0, kind).unwrap();
        group.bench_with_input(BenchmarkId::new("atm", kind), &contract, |b, contract| {
            b.iter(|| price(black_box(contract), black_box(0.2)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark implied volatility across strikes.
fn bench_implied_volatility(c: &mut Criterion) {
    let mut group = c.benchmark_group("implied_volatility");
    let solver = ImpliedVolSolver::with_defaults();

    for strike in [80.0, 100.0, 120.0] {
        let contract = OptionContract::new(100.0, strike, 0.05, 1.0, OptionKind::Call).unwrap();
        let target = price(&contract, 0.35).unwrap();

        group.bench_with_input(
            BenchmarkId::new("call", strike),
            &(contract, target),
            |b, (contract, target)| {
                b.iter(|| solver.solve(black_box(contract), black_box(*target)).unwrap());
            },
        );
    }

    // Sample contract from the CLI report
    let sample = OptionContract::new(2.651, 2.65, 0.03, 28.0 / 365.0, OptionKind::Put).unwrap();
    group.bench_function("sample_put", |b| {
        b.iter(|| solver.solve(black_box(&sample), black_box(0.1134)).unwrap());
    });

    // Out-of-bracket target runs the full iteration budget
    group.bench_function("not_found", |b| {
        b.iter(|| solver.solve(black_box(&sample), black_box(0.5)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_black_scholes_price, bench_implied_volatility);
criterion_main!(benches);
