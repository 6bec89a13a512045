//! Engine configuration, validation, and error types.
//!
//! [`EngineConfig`] selects how a generation advance is executed and how
//! much history the [`Simulation`](crate::Simulation) driver keeps for
//! repeat detection. [`validate()`](EngineConfig::validate) checks its
//! invariants before any stepping happens.

use std::error::Error;
use std::fmt;

use toroid_core::GridError;

// ── ExecutionMode ─────────────────────────────────────────────────

/// How the per-cell work of one advance is scheduled.
///
/// Both modes compute identical grids; they differ only in which threads
/// do the work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Every cell is computed on the calling thread.
    Sequential,
    /// Cells are split into disjoint runs and computed by a fixed set of
    /// scoped worker threads. The advance returns only after all of them
    /// have joined.
    Parallel {
        /// Number of worker threads. `None` = auto-detect
        /// (`available_parallelism`, clamped to `[1, 64]`).
        workers: Option<usize>,
    },
}

impl Default for ExecutionMode {
    fn default() -> Self {
        Self::Parallel { workers: None }
    }
}

impl ExecutionMode {
    /// Largest worker count the engine will spawn.
    pub const MAX_WORKERS: usize = 64;

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Sequential mode always resolves to 1. Explicit values are clamped
    /// to `[1, MAX_WORKERS]`.
    pub fn resolved_worker_count(&self) -> usize {
        match *self {
            Self::Sequential => 1,
            Self::Parallel { workers: Some(n) } => n.clamp(1, Self::MAX_WORKERS),
            Self::Parallel { workers: None } => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, Self::MAX_WORKERS),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EngineConfig::validate()`] or while building
/// a simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The seed grid could not be constructed.
    Grid(GridError),
    /// Parallel mode was configured with zero workers.
    ZeroWorkers,
    /// The unit-of-work length was set to zero cells.
    ZeroRunLength,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::ZeroWorkers => write!(f, "parallel mode needs at least 1 worker"),
            Self::ZeroRunLength => write!(f, "run_len must be at least 1 cell"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── EngineConfig ───────────────────────────────────────────────────

/// Configuration for an [`Engine`](crate::Engine) and the
/// [`Simulation`](crate::Simulation) driver built on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Sequential or parallel execution. Default: parallel, auto workers.
    pub mode: ExecutionMode,
    /// Cells per unit of work in parallel mode. `None` = one row.
    /// `Some(1)` dispatches every cell as its own unit.
    pub run_len: Option<usize>,
    /// Number of past generations remembered for repeat detection.
    /// 0 disables detection. Default: 10.
    pub cycle_window: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::default(),
            run_len: None,
            cycle_window: 10,
        }
    }
}

impl EngineConfig {
    /// A configuration that computes every cell on the calling thread.
    pub fn sequential() -> Self {
        Self {
            mode: ExecutionMode::Sequential,
            ..Self::default()
        }
    }

    /// A configuration with `workers` parallel worker threads.
    pub fn parallel(workers: usize) -> Self {
        Self {
            mode: ExecutionMode::Parallel {
                workers: Some(workers),
            },
            ..Self::default()
        }
    }

    /// Set the unit-of-work length.
    pub fn with_run_len(mut self, run_len: usize) -> Self {
        self.run_len = Some(run_len);
        self
    }

    /// Set the repeat-detection window.
    pub fn with_cycle_window(mut self, cycle_window: usize) -> Self {
        self.cycle_window = cycle_window;
        self
    }

    /// Check structural invariants.
    ///
    /// Explicit zero workers and zero-length runs are rejected rather than
    /// silently clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let ExecutionMode::Parallel { workers: Some(0) } = self.mode {
            return Err(ConfigError::ZeroWorkers);
        }
        if self.run_len == Some(0) {
            return Err(ConfigError::ZeroRunLength);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = EngineConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.mode, ExecutionMode::Parallel { workers: None });
        assert_eq!(cfg.run_len, None);
        assert_eq!(cfg.cycle_window, 10);
    }

    #[test]
    fn zero_workers_rejected() {
        let cfg = EngineConfig::parallel(0);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroWorkers));
    }

    #[test]
    fn zero_run_len_rejected() {
        let cfg = EngineConfig::sequential().with_run_len(0);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroRunLength));
    }

    #[test]
    fn resolved_worker_count_clamps() {
        assert_eq!(ExecutionMode::Sequential.resolved_worker_count(), 1);
        assert_eq!(
            ExecutionMode::Parallel { workers: Some(3) }.resolved_worker_count(),
            3
        );
        assert_eq!(
            ExecutionMode::Parallel {
                workers: Some(1000)
            }
            .resolved_worker_count(),
            ExecutionMode::MAX_WORKERS
        );
        let auto = ExecutionMode::Parallel { workers: None }.resolved_worker_count();
        assert!((1..=ExecutionMode::MAX_WORKERS).contains(&auto));
    }

    #[test]
    fn grid_error_converts_with_source() {
        let e: ConfigError = GridError::EmptyGrid {
            height: 0,
            width: 0,
        }
        .into();
        assert!(e.source().is_some());
        assert_eq!(
            e.to_string(),
            "grid: grid must have at least one cell, got 0x0"
        );
    }

    #[test]
    fn builders_compose() {
        let cfg = EngineConfig::parallel(2)
            .with_run_len(7)
            .with_cycle_window(0);
        assert_eq!(cfg.mode, ExecutionMode::Parallel { workers: Some(2) });
        assert_eq!(cfg.run_len, Some(7));
        assert_eq!(cfg.cycle_window, 0);
    }
}
