//! Benchmarks for the sequential bootstrap.
//!
//! Run with: cargo bench -p parcurve-curves

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use parcurve_curves::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Upward sloping quotes every `step` years out to `count * step`.
fn create_quotes(count: usize, step: f64) -> Vec<SwapQuote> {
    (1..=count)
        .map(|i| {
            let maturity = i as f64 * step;
            SwapQuote::new(maturity, 0.03 + 0.002 * maturity.ln_1p())
        })
        .collect()
}

fn krw_quotes() -> Vec<SwapQuote> {
    quotes_from_parallel(
        &[1.0, 2.0, 3.0, 5.0, 7.0, 10.0, 15.0, 20.0],
        &[0.032, 0.0335, 0.035, 0.0365, 0.0375, 0.038, 0.0385, 0.039],
    )
    .unwrap_or_default()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_krw_curve(c: &mut Criterion) {
    let quotes = krw_quotes();
    let bootstrapper = CurveBootstrapper::default();

    c.bench_function("bootstrap_krw_8_pillars", |b| {
        b.iter(|| bootstrapper.bootstrap(black_box(&quotes)))
    });
}

fn bench_pillar_count(c: &mut Criterion) {
    let bootstrapper = CurveBootstrapper::default();

    let mut group = c.benchmark_group("bootstrap_pillars");
    for count in [5, 20, 60] {
        let quotes = create_quotes(count, 0.5);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &quotes, |b, quotes| {
            b.iter(|| bootstrapper.bootstrap(black_box(quotes)))
        });
    }
    group.finish();
}

fn bench_frequency(c: &mut Criterion) {
    let quotes = krw_quotes();

    let mut group = c.benchmark_group("bootstrap_frequency");
    for frequency in [Frequency::Annual, Frequency::Quarterly, Frequency::Monthly] {
        let bootstrapper = CurveBootstrapper::default().with_frequency(frequency);
        group.bench_with_input(
            BenchmarkId::from_parameter(frequency),
            &quotes,
            |b, quotes| b.iter(|| bootstrapper.bootstrap(black_box(quotes))),
        );
    }
    group.finish();
}

fn bench_curve_queries(c: &mut Criterion) {
    let Ok(output) = CurveBootstrapper::default().bootstrap(&krw_quotes()) else {
        return;
    };
    let Ok(interp) = output.curve.interpolator() else {
        return;
    };
    let times: Vec<f64> = (1..=80).map(|i| f64::from(i) * 0.25).collect();

    c.bench_function("discount_factor_80_times", |b| {
        b.iter(|| {
            times
                .iter()
                .map(|&t| interp.discount_factor(black_box(t)).unwrap_or(0.0))
                .sum::<f64>()
        })
    });
}

criterion_group!(
    benches,
    bench_krw_curve,
    bench_pillar_count,
    bench_frequency,
    bench_curve_queries,
);

criterion_main!(benches);
