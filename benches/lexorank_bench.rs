//! Criterion benchmarks for rank derivation.
//!
//! Measures the digit arithmetic in isolation: midpoints at growing
//! precision, skewed append chains, and whole-bucket rebalancing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_lexorank::lexorank::{rank_after, rank_between, rank_successor, rebalance};

// ===========================================================================
// Midpoints between neighbours of a given length
// ===========================================================================

fn bench_between_by_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_between_length");

    for &len in &[6usize, 50, 200] {
        let low = format!("0|{}", "m".repeat(len));
        let high = format!("0|{}n", "m".repeat(len - 1));
        group.bench_with_input(BenchmarkId::from_parameter(len), &(low, high), |b, (l, h)| {
            b.iter(|| {
                let rank = rank_between(Some(black_box(l)), Some(black_box(h)), 1_000, false);
                black_box(rank)
            })
        });
    }
    group.finish();
}

// ===========================================================================
// Skewed workload: always insert directly after the previous insert
// ===========================================================================

fn bench_append_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_chain");
    group.sample_size(20);

    for &n in &[10usize, 100, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut prev = rank_between(None, None, n, false).ok();
                for _ in 0..n {
                    prev = rank_between(prev.as_deref(), None, n, false).ok();
                }
                black_box(prev)
            })
        });
    }
    group.finish();
}

fn bench_step_and_successor(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    group.bench_function("rank_after", |b| {
        b.iter(|| black_box(rank_after(black_box("0|mmmmmm"), black_box(1_000))))
    });
    group.bench_function("rank_successor_carry", |b| {
        b.iter(|| black_box(rank_successor(black_box("0|zzzzzzzzzzzz"))))
    });
    group.finish();
}

fn bench_rebalance(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebalance");
    group.sample_size(10);

    for &n in &[100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(rebalance(black_box(n), 0)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_between_by_length,
    bench_append_chain,
    bench_step_and_successor,
    bench_rebalance
);
criterion_main!(benches);
