//! Criterion benchmarks for generation advance across execution modes.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use toroid_bench::{engine_matrix, reference_profile, stress_profile};
use toroid_engine::{Engine, EngineConfig, Simulation};

/// Benchmark: one advance of the 128x128 profile under each mode.
fn bench_advance_reference(c: &mut Criterion) {
    let grid = reference_profile(42);
    let mut group = c.benchmark_group("advance_128");
    for (name, cfg) in engine_matrix(grid.width()) {
        let engine = Engine::new(&cfg).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &grid, |b, g| {
            b.iter(|| black_box(engine.advance(g)));
        });
    }
    group.finish();
}

/// Benchmark: one advance of the 512x512 profile, sequential vs rows.
fn bench_advance_stress(c: &mut Criterion) {
    let grid = stress_profile(42);
    let mut group = c.benchmark_group("advance_512");
    group.sample_size(20);
    for (name, cfg) in [
        ("sequential", EngineConfig::sequential()),
        ("parallel_rows", EngineConfig::default()),
    ] {
        let engine = Engine::new(&cfg).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &grid, |b, g| {
            b.iter(|| black_box(engine.advance(g)));
        });
    }
    group.finish();
}

/// Benchmark: 100 driver steps including metrics and repeat detection.
fn bench_simulation_100_steps(c: &mut Criterion) {
    let seed = reference_profile(7);
    c.bench_function("simulation_100_steps_128", |b| {
        b.iter(|| {
            let cfg = EngineConfig::default().with_cycle_window(0);
            let mut sim = Simulation::new(seed.clone(), cfg).unwrap();
            black_box(sim.run(100));
        });
    });
}

criterion_group!(
    benches,
    bench_advance_reference,
    bench_advance_stress,
    bench_simulation_100_steps
);
criterion_main!(benches);
