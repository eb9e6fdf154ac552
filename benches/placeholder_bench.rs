//! Benchmark for placeholder composition.
//!
//! Compares composed placeholder callables against the equivalent
//! hand-written closures to evaluate the overhead (if any) of the
//! abstraction.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use placeholder::{__, value};
use std::hint::black_box;

// =============================================================================
// Predicate Benchmarks
// =============================================================================

fn benchmark_even_predicate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("even_predicate");

    for size in [100_i64, 10_000] {
        group.throughput(Throughput::Elements(size.unsigned_abs()));

        group.bench_with_input(BenchmarkId::new("placeholder", size), &size, |bencher, &size| {
            let is_even = (__ % 2).equals(0);
            bencher.iter(|| black_box((0..size).filter(|n| is_even.call(*n)).count()));
        });

        group.bench_with_input(BenchmarkId::new("closure", size), &size, |bencher, &size| {
            let is_even = |n: i64| n % 2 == 0;
            bencher.iter(|| black_box((0..size).filter(|n| is_even(*n)).count()));
        });
    }

    group.finish();
}

// =============================================================================
// Arithmetic Chain Benchmarks
// =============================================================================

fn benchmark_arithmetic_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("arithmetic_chain");

    group.bench_function("placeholder", |bencher| {
        let chained = ((__ + 3) * 2 - 7).greater_than(100);
        bencher.iter(|| black_box(chained.call(black_box(60_i32))));
    });

    group.bench_function("closure", |bencher| {
        let chained = |x: i32| ((x + 3) * 2 - 7) > 100;
        bencher.iter(|| black_box(chained(black_box(60_i32))));
    });

    group.bench_function("placeholder_left_operand", |bencher| {
        let chained = value(1_000_i32) - (__ * 4);
        bencher.iter(|| black_box(chained.call(black_box(60_i32))));
    });

    group.finish();
}

// =============================================================================
// Mutation Benchmarks
// =============================================================================

fn benchmark_increment(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("increment");

    group.bench_function("placeholder_post_increment", |bencher| {
        let increment = __.post_increment();
        bencher.iter(|| {
            let mut counter = black_box(0_u64);
            for _ in 0..1_000 {
                increment.call(&mut counter);
            }
            black_box(counter)
        });
    });

    group.bench_function("manual_increment", |bencher| {
        bencher.iter(|| {
            let mut counter = black_box(0_u64);
            for _ in 0..1_000 {
                counter += 1;
            }
            black_box(counter)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_even_predicate,
    benchmark_arithmetic_chain,
    benchmark_increment
);
criterion_main!(benches);
