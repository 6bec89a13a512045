//! A glider crossing a small torus.
//!
//! Seeds a 5x9 grid with a glider, then prints five generations computed
//! by the parallel engine.
//!
//! Run with:
//!   RUST_LOG=toroid_engine=debug cargo run --example glider

use toroid::prelude::*;
use tracing_subscriber::EnvFilter;

const HEIGHT: usize = 5;
const WIDTH: usize = 9;
const STEPS: u64 = 5;

const GLIDER: [Coord; 5] = [(0, 3), (1, 4), (2, 2), (2, 3), (2, 4)];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut sim = Simulation::empty(HEIGHT, WIDTH, EngineConfig::default())?;
    for (row, col) in GLIDER {
        sim.set(row, col, CellState::Alive);
    }

    for _ in 0..STEPS {
        println!("Step: {}", sim.generation());
        println!("{}", sim.grid());
        let result = sim.step();
        tracing::info!(
            generation = result.generation.0,
            live = result.metrics.live_cells,
            births = result.metrics.births,
            deaths = result.metrics.deaths,
            us = result.metrics.total_us,
            "step complete"
        );
    }
    Ok(())
}
