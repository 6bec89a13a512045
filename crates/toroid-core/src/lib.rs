//! Core types for the Toroid cellular automaton engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the cell state enumeration, the generation counter, the coordinate
//! alias, and the construction error shared by the grid and engine crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;

pub use cell::CellState;
pub use error::GridError;
pub use id::{Coord, Generation};
