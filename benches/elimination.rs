//! Criterion benchmarks for the elimination strategies.
//!
//! The timing harness in `src/bench.rs` prints the plain stdout report;
//! these benchmarks are the statistically careful companion for
//! regression tracking. Inputs are seeded so runs are comparable across
//! checkouts.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use elimr::generate;
use elimr::kernel::{eliminate, Strategy};
use elimr::parallelism::ParallelismConfig;

fn strategy_comparison(c: &mut Criterion) {
    let parallelism = ParallelismConfig::default();
    let base = generate::dense_test_matrix(256, 42);
    let mut group = c.benchmark_group("eliminate_256");
    group.sample_size(20);
    for strategy in Strategy::ACTIVE {
        group.bench_with_input(
            BenchmarkId::from_parameter(strategy.label()),
            &strategy,
            |b, &strategy| {
                b.iter(|| {
                    let mut m = base.clone();
                    eliminate(&mut m, strategy, &parallelism).unwrap();
                    black_box(m);
                });
            },
        );
    }
    group.finish();
}

fn thread_scaling(c: &mut Criterion) {
    let base = generate::dense_test_matrix(256, 42);
    let mut group = c.benchmark_group("even_block_threads_256");
    group.sample_size(20);
    for threads in [1, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            let parallelism = ParallelismConfig::new(threads);
            b.iter(|| {
                let mut m = base.clone();
                eliminate(&mut m, Strategy::EvenBlock, &parallelism).unwrap();
                black_box(m);
            });
        });
    }
    group.finish();
}

fn generator_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_test_pattern");
    for dim in [128usize, 512] {
        group.bench_with_input(BenchmarkId::from_parameter(dim), &dim, |b, &dim| {
            let mut m = elimr::matrix::Matrix::zeros(dim);
            b.iter(|| generate::fill_test_pattern(black_box(&mut m)));
        });
    }
    group.finish();
}

criterion_group!(benches, strategy_comparison, thread_scaling, generator_fill);
criterion_main!(benches);
