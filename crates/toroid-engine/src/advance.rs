//! Generation advance: compute the next grid from the current one.
//!
//! Every cell's next state depends only on the current generation, so the
//! per-cell work has no ordering constraints. The [`Engine`] either runs it
//! on the calling thread or splits the next grid's store into disjoint
//! [`CellRun`]s and feeds them through a channel to scoped workers.
//!
//! # Completion
//!
//! Workers are spawned inside [`std::thread::scope`], which does not return
//! until every worker has joined. The next grid is moved out to the caller
//! only after the scope, so a partially written grid is unobservable. A
//! worker panic is re-raised on the calling thread.
//!
//! # Data races
//!
//! The current grid is shared by `&` for the whole call. Each run is a
//! distinct `&mut` sub-slice of the next grid, received by exactly one
//! worker. No locks are involved.

use std::thread;

use crossbeam_channel::SendError;
use toroid_space::{CellRun, Grid};
use tracing::debug;

use crate::config::{ConfigError, EngineConfig, ExecutionMode};
use crate::rule::next_state;

/// Advance `current` by one generation on the calling thread.
///
/// Returns a freshly allocated grid; `current` is left untouched.
pub fn advance_generation(current: &Grid) -> Grid {
    Engine::sequential().advance(current).grid
}

// ── Advance ──────────────────────────────────────────────────────

/// A completed generation advance.
#[derive(Debug)]
pub struct Advance {
    /// The fully computed next generation.
    pub grid: Grid,
    /// Units of work the cells were split into.
    pub units: usize,
    /// Threads that computed cells.
    pub workers: usize,
}

// ── Engine ───────────────────────────────────────────────────────

/// Executes generation advances according to a validated
/// [`EngineConfig`].
#[derive(Clone, Debug)]
pub struct Engine {
    mode: ExecutionMode,
    workers: usize,
    run_len: Option<usize>,
}

impl Engine {
    /// Build an engine, validating `config` and resolving the worker count
    /// once up front.
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            mode: config.mode,
            workers: config.mode.resolved_worker_count(),
            run_len: config.run_len,
        })
    }

    /// An engine that computes every cell on the calling thread.
    pub fn sequential() -> Self {
        Self {
            mode: ExecutionMode::Sequential,
            workers: 1,
            run_len: None,
        }
    }

    /// The configured execution mode.
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Resolved number of worker threads (1 in sequential mode).
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Compute the next generation of `current`.
    pub fn advance(&self, current: &Grid) -> Advance {
        let advance = match self.mode {
            ExecutionMode::Sequential => self.advance_sequential(current),
            ExecutionMode::Parallel { .. } => self.advance_parallel(current),
        };
        debug!(
            height = current.height(),
            width = current.width(),
            units = advance.units,
            workers = advance.workers,
            live = advance.grid.live_count(),
            "advanced generation"
        );
        advance
    }

    fn advance_sequential(&self, current: &Grid) -> Advance {
        let mut next = current.empty_like();
        let cell_count = next.cell_count();
        for run in next.runs_mut(cell_count) {
            fill_run(current, run);
        }
        Advance {
            grid: next,
            units: 1,
            workers: 1,
        }
    }

    fn advance_parallel(&self, current: &Grid) -> Advance {
        let mut next = current.empty_like();
        let run_len = self.run_len.unwrap_or(current.width());
        let runs: Vec<CellRun<'_>> = next.runs_mut(run_len).collect();
        let units = runs.len();
        let workers = self.workers.min(units).max(1);

        let (tx, rx) = crossbeam_channel::unbounded::<CellRun<'_>>();
        let mut completed = 0usize;

        thread::scope(|s| {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    let rx = rx.clone();
                    s.spawn(move || {
                        let mut done = 0usize;
                        for run in rx.iter() {
                            fill_run(current, run);
                            done += 1;
                        }
                        done
                    })
                })
                .collect();
            drop(rx);

            for run in runs {
                // Only fails once every worker has exited; finish the run here.
                if let Err(SendError(run)) = tx.send(run) {
                    fill_run(current, run);
                    completed += 1;
                }
            }
            drop(tx);

            for handle in handles {
                match handle.join() {
                    Ok(done) => completed += done,
                    Err(payload) => std::panic::resume_unwind(payload),
                }
            }
        });

        debug_assert_eq!(completed, units, "every run must be computed exactly once");
        Advance {
            grid: next,
            units,
            workers,
        }
    }
}

/// Compute every cell of `run` from `current`.
fn fill_run(current: &Grid, run: CellRun<'_>) {
    let width = current.width();
    for (offset, cell) in run.cells.iter_mut().enumerate() {
        let index = run.start + offset;
        let row = (index / width) as i64;
        let col = (index % width) as i64;
        *cell = next_state(current.get(row, col), current.count_neighbours(row, col));
    }
}
