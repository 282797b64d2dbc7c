//! Criterion benchmarks for recip-math
//!
//! Measures the per-vector cost of the reciprocal kernel for both seed modes.
//! Run with: cargo bench --bench criterion_benches

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use recip_math::math::{recip_newton, InverseSeed, SeedMode};
use recip_math::{DefaultSimdVector, SimdVector};
use std::hint::black_box;

/// Benchmark one vector through the kernel at several iteration budgets
fn bench_recip_newton(c: &mut Criterion) {
    let mut group = c.benchmark_group("recip_newton");
    let x = DefaultSimdVector::splat(3.7);

    for mode in [SeedMode::Bucketed, SeedMode::Normalized] {
        for iterations in [1usize, 4, 8, 16] {
            let seed = InverseSeed::new(mode, iterations);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", mode), iterations),
                &seed,
                |bencher, seed| bencher.iter(|| black_box(recip_newton(black_box(x), seed))),
            );
        }
    }

    group.finish();
}

/// Baseline: hardware division
fn bench_division_baseline(c: &mut Criterion) {
    c.bench_function("division_baseline", |bencher| {
        bencher.iter(|| black_box(1.0f32 / black_box(3.7f32)))
    });
}

criterion_group!(benches, bench_recip_newton, bench_division_baseline);
criterion_main!(benches);
