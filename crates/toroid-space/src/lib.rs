//! Toroidal grid storage for Toroid simulations.
//!
//! This crate defines [`Grid`], a fixed-size row-major cell store whose
//! edges wrap around on both axes, together with the wraparound
//! arithmetic and Moore-neighbourhood lookups built on it.
//!
//! # Topology
//!
//! Every signed `(row, col)` pair is a valid address. Coordinates are
//! normalized with Euclidean remainder, so `-1` names the last row and
//! `height` names the first. Reads and writes never fail.
//!
//! ```
//! use toroid_core::CellState;
//! use toroid_space::Grid;
//!
//! let mut grid = Grid::new(4, 4).unwrap();
//! grid.set(-1, -1, CellState::Alive);
//! assert_eq!(grid.get(3, 3), CellState::Alive);
//! assert_eq!(grid.count_neighbours(0, 0), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod hash;
pub mod wrap;

#[cfg(test)]
pub(crate) mod compliance;

pub use grid::{CellRun, Grid, MOORE_OFFSETS};
pub use hash::state_hash;
pub use wrap::wrap_axis;
