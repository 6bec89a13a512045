//! Per-step metrics for the simulation driver.
//!
//! [`StepMetrics`] captures timing, population, and dispatch data for a
//! single generation advance.

/// Timing and population metrics collected during a single step.
///
/// Durations are in microseconds. The driver populates these fields after
/// each [`step()`](crate::Simulation::step) call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the whole step, in microseconds.
    pub total_us: u64,
    /// Live cells in the new generation.
    pub live_cells: usize,
    /// Cells that went from dead to alive.
    pub births: usize,
    /// Cells that went from alive to dead.
    pub deaths: usize,
    /// Units of work the advance was split into.
    pub units_dispatched: usize,
    /// Threads that computed cells (1 for sequential execution).
    pub workers_used: usize,
}
