//! Simulation engine for Toroid cellular automata.
//!
//! Provides the transition rule ([`next_state`]), the generation advance
//! ([`advance_generation`] and the configurable [`Engine`]), and the
//! lockstep [`Simulation`] driver that owns the current grid, counts
//! generations, reports per-step metrics, and detects repeating states.
//!
//! Advancing never mutates its input: the next generation is written into
//! a fresh grid that is handed back only once every cell has been
//! computed, whether the work ran on the calling thread or on a pool of
//! scoped workers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod advance;
pub mod config;
pub mod metrics;
pub mod rule;
pub mod simulation;

pub use advance::{advance_generation, Advance, Engine};
pub use config::{ConfigError, EngineConfig, ExecutionMode};
pub use metrics::StepMetrics;
pub use rule::next_state;
pub use simulation::{Cycle, Simulation, StepResult};
