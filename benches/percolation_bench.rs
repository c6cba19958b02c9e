// benches/percolation_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use percolation::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn benchmark_grid_operations(c: &mut Criterion) {
    c.bench_function("open_until_percolates_100", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        b.iter(|| run_trial(black_box(100), &mut rng).unwrap());
    });

    c.bench_function("open_full_column_50", |b| {
        b.iter(|| {
            let mut grid = Percolation::new(50).unwrap();
            for row in 1..=50 {
                grid.open(row, 25).unwrap();
            }
            black_box(grid.percolates())
        });
    });

    c.bench_function("union_find_chain_10k", |b| {
        b.iter(|| {
            let mut uf = UnionFind::new(10_000);
            for i in 1..10_000 {
                uf.union(i - 1, i);
            }
            black_box(uf.connected(0, 9_999))
        });
    });
}

fn benchmark_estimator(c: &mut Criterion) {
    c.bench_function("stats_n50_t20", |b| {
        b.iter(|| PercolationStats::with_seed(black_box(50), 20, 42).unwrap().mean());
    });
}

criterion_group!(benches, benchmark_grid_operations, benchmark_estimator);
criterion_main!(benches);
