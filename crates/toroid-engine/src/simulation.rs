//! Lockstep simulation driver.
//!
//! [`Simulation`] owns the current grid and replaces it with the engine's
//! output on every [`step()`](Simulation::step). It counts generations,
//! reports [`StepMetrics`], and remembers the state hashes of recent
//! generations so a repeating pattern (still life, oscillator, or
//! extinction) is reported as a [`Cycle`].
//!
//! # Ownership model
//!
//! `step()` returns a [`StepResult`] that borrows the new grid from the
//! simulation, so the caller cannot step again while holding it. The
//! superseded grid is dropped; callers that want history clone
//! [`grid()`](Simulation::grid) before stepping.

use std::time::Instant;

use indexmap::IndexMap;
use toroid_core::{CellState, Generation};
use toroid_space::{state_hash, Grid};
use tracing::{debug, info, trace};

use crate::advance::Engine;
use crate::config::{ConfigError, EngineConfig};
use crate::metrics::StepMetrics;

// ── Cycle ────────────────────────────────────────────────────────

/// A repeated grid state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cycle {
    /// Most recent earlier generation with the same state.
    pub first_seen: Generation,
    /// Generation at which the state recurred.
    pub repeated_at: Generation,
}

impl Cycle {
    /// Number of generations between the two occurrences.
    ///
    /// 1 means the grid stopped changing.
    pub fn period(&self) -> u64 {
        self.repeated_at.0 - self.first_seen.0
    }
}

// ── StepResult ───────────────────────────────────────────────────

/// Result of a [`Simulation::step()`] call.
#[derive(Debug)]
pub struct StepResult<'s> {
    /// The new current grid.
    pub grid: &'s Grid,
    /// Generation number of `grid`.
    pub generation: Generation,
    /// Timing and population metrics for this step.
    pub metrics: StepMetrics,
    /// Set when `grid` repeats a generation inside the history window.
    pub cycle: Option<Cycle>,
}

// ── Simulation ───────────────────────────────────────────────────

/// Lockstep driver: seed once, then step.
///
/// ```
/// use toroid_core::CellState;
/// use toroid_engine::{EngineConfig, Simulation};
/// use toroid_space::Grid;
///
/// let mut seed = Grid::new(5, 5).unwrap();
/// for c in 1..4 {
///     seed.set(2, c, CellState::Alive);
/// }
/// let mut sim = Simulation::new(seed.clone(), EngineConfig::sequential()).unwrap();
/// sim.step();
/// let result = sim.step();
/// assert_eq!(result.grid, &seed);
/// assert_eq!(result.cycle.map(|c| c.period()), Some(2));
/// ```
#[derive(Debug)]
pub struct Simulation {
    engine: Engine,
    config: EngineConfig,
    grid: Grid,
    generation: Generation,
    history: IndexMap<u64, Generation>,
}

impl Simulation {
    /// Create a simulation whose generation 0 is `seed`.
    ///
    /// Validates `config` and resolves the worker count.
    pub fn new(seed: Grid, config: EngineConfig) -> Result<Self, ConfigError> {
        let engine = Engine::new(&config)?;
        info!(
            height = seed.height(),
            width = seed.width(),
            live = seed.live_count(),
            mode = ?config.mode,
            workers = engine.workers(),
            "simulation created"
        );
        let mut sim = Self {
            engine,
            config,
            grid: seed,
            generation: Generation(0),
            history: IndexMap::new(),
        };
        sim.remember();
        Ok(sim)
    }

    /// Create a simulation seeded with an all-dead `height x width` grid.
    pub fn empty(height: usize, width: usize, config: EngineConfig) -> Result<Self, ConfigError> {
        Self::new(Grid::new(height, width)?, config)
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Generation number of the current grid.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The configuration this simulation was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Consume the simulation, returning the current grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Write a single cell of the current grid, for seeding between steps.
    ///
    /// Clears the repeat history, since the edited state was never
    /// produced by the rule.
    pub fn set(&mut self, row: i64, col: i64, state: CellState) {
        self.grid.set(row, col, state);
        self.history.clear();
        self.remember();
    }

    /// Replace the current grid with `seed` and restart at generation 0.
    pub fn reset(&mut self, seed: Grid) {
        self.grid = seed;
        self.generation = Generation(0);
        self.history.clear();
        self.remember();
    }

    /// Advance one generation.
    pub fn step(&mut self) -> StepResult<'_> {
        let start = Instant::now();
        let advance = self.engine.advance(&self.grid);

        let (births, deaths) = self
            .grid
            .cells()
            .iter()
            .zip(advance.grid.cells())
            .fold((0, 0), |(b, d), (old, new)| match (old, new) {
                (CellState::Dead, CellState::Alive) => (b + 1, d),
                (CellState::Alive, CellState::Dead) => (b, d + 1),
                _ => (b, d),
            });

        self.grid = advance.grid;
        self.generation = self.generation.next();
        let cycle = self.remember();

        let metrics = StepMetrics {
            total_us: start.elapsed().as_micros() as u64,
            live_cells: self.grid.live_count(),
            births,
            deaths,
            units_dispatched: advance.units,
            workers_used: advance.workers,
        };

        StepResult {
            grid: &self.grid,
            generation: self.generation,
            metrics,
            cycle,
        }
    }

    /// Step up to `generations` times, stopping at the first repeat.
    ///
    /// Returns the repeat if one was found.
    pub fn run(&mut self, generations: u64) -> Option<Cycle> {
        for _ in 0..generations {
            if let Some(cycle) = self.step().cycle {
                return Some(cycle);
            }
        }
        None
    }

    /// Record the current grid in the history window and report a repeat.
    fn remember(&mut self) -> Option<Cycle> {
        let window = self.config.cycle_window;
        if window == 0 {
            return None;
        }
        let hash = state_hash(&self.grid);
        let cycle = self
            .history
            .shift_remove(&hash)
            .map(|first_seen| Cycle {
                first_seen,
                repeated_at: self.generation,
            });
        self.history.insert(hash, self.generation);
        while self.history.len() > window {
            self.history.shift_remove_index(0);
        }
        match cycle {
            Some(c) => debug!(
                generation = c.repeated_at.0,
                period = c.period(),
                "repeated state detected"
            ),
            None => trace!(generation = self.generation.0, hash, "state recorded"),
        }
        cycle
    }
}
