//! Toroid: Conway's Game of Life on a wraparound grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Toroid sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use toroid::prelude::*;
//!
//! // A blinker on a 5x5 torus.
//! let mut seed = Grid::new(5, 5).unwrap();
//! for col in 1..4 {
//!     seed.set(2, col, CellState::Alive);
//! }
//!
//! // One generation, computed on the calling thread.
//! let next = advance_generation(&seed);
//! assert_eq!(next.get(1, 2), CellState::Alive);
//! assert_eq!(next.get(2, 1), CellState::Dead);
//!
//! // The same pattern driven by worker threads.
//! let mut sim = Simulation::new(seed.clone(), EngineConfig::parallel(2)).unwrap();
//! let cycle = sim.run(10).unwrap();
//! assert_eq!(cycle.period(), 2);
//! assert_eq!(sim.grid(), &seed);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `toroid-core` | `CellState`, `Generation`, `GridError` |
//! | [`space`] | `toroid-space` | `Grid`, wraparound, state hashing |
//! | [`engine`] | `toroid-engine` | Rule, advance, config, `Simulation` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`toroid-core`).
pub use toroid_core as types;

/// Toroidal grid storage (`toroid-space`).
pub use toroid_space as space;

/// Transition rule, generation advance, and the simulation driver
/// (`toroid-engine`).
pub use toroid_engine as engine;

/// Common imports for typical Toroid usage.
///
/// ```rust
/// use toroid::prelude::*;
/// ```
pub mod prelude {
    pub use toroid_core::{CellState, Coord, Generation, GridError};

    pub use toroid_space::Grid;

    pub use toroid_engine::{
        advance_generation, next_state, ConfigError, Cycle, Engine, EngineConfig, ExecutionMode,
        Simulation, StepMetrics, StepResult,
    };
}
