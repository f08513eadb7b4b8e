//! Criterion micro-benchmarks for cursor walks and element access.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use smarray::prelude::*;
use smarray_bench::{prefilled, reference_input};

/// Benchmark: forward cursor walk over 10K elements.
fn bench_forward_walk_10k(c: &mut Criterion) {
    let array = prefilled(&reference_input(42));

    c.bench_function("forward_walk_10k", |b| {
        b.iter(|| {
            let sum: i64 = array.walk(array.begin(), array.end()).sum();
            black_box(sum);
        });
    });
}

/// Benchmark: reverse cursor walk over 10K elements.
fn bench_reverse_walk_10k(c: &mut Criterion) {
    let array = prefilled(&reference_input(42));

    c.bench_function("reverse_walk_10k", |b| {
        b.iter(|| {
            let sum: i64 = array.walk(array.rbegin(), array.rend()).sum();
            black_box(sum);
        });
    });
}

/// Benchmark: manual increment loop with cursor indexing.
fn bench_cursor_index_10k(c: &mut Criterion) {
    let array = prefilled(&reference_input(42));

    c.bench_function("cursor_index_10k", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            let mut it = array.begin();
            while it != array.end() {
                sum = sum.wrapping_add(array[it]);
                it.increment();
            }
            black_box(sum);
        });
    });
}

/// Benchmark: checked access over every live index.
fn bench_checked_at_10k(c: &mut Criterion) {
    let array = prefilled(&reference_input(42));

    c.bench_function("checked_at_10k", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for i in 0..array.size() {
                if let Ok(v) = array.at(i) {
                    sum = sum.wrapping_add(*v);
                }
            }
            black_box(sum);
        });
    });
}

criterion_group!(
    benches,
    bench_forward_walk_10k,
    bench_reverse_walk_10k,
    bench_cursor_index_10k,
    bench_checked_at_10k
);
criterion_main!(benches);
