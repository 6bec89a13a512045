//! Criterion micro-benchmarks for grid access and neighbour counting.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use toroid_bench::reference_profile;
use toroid_space::state_hash;

/// Benchmark: count_neighbours() on all 16K cells of a 128x128 grid.
fn bench_count_neighbours_16k(c: &mut Criterion) {
    let grid = reference_profile(1);
    c.bench_function("count_neighbours_128", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for r in 0..128i64 {
                for col in 0..128i64 {
                    total += grid.count_neighbours(r, col) as u32;
                }
            }
            black_box(total)
        });
    });
}

/// Benchmark: get() with coordinates far outside the bounds.
fn bench_get_wrapped(c: &mut Criterion) {
    let grid = reference_profile(1);
    c.bench_function("get_wrapped_10k", |b| {
        b.iter(|| {
            let mut live = 0usize;
            for i in 0..10_000i64 {
                let r = i.wrapping_mul(6364136223846793007) >> 20;
                let col = i.wrapping_mul(1442695040888963407) >> 20;
                live += grid.get(r, col).is_alive() as usize;
            }
            black_box(live)
        });
    });
}

/// Benchmark: state_hash() of a 128x128 grid.
fn bench_state_hash(c: &mut Criterion) {
    let grid = reference_profile(1);
    c.bench_function("state_hash_128", |b| {
        b.iter(|| black_box(state_hash(&grid)));
    });
}

criterion_group!(
    benches,
    bench_count_neighbours_16k,
    bench_get_wrapped,
    bench_state_hash
);
criterion_main!(benches);
