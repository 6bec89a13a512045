//! Error types for grid construction.

use std::error::Error;
use std::fmt;

/// Errors arising from grid construction.
///
/// Coordinate access never fails: wraparound is total over the integers,
/// so the only rejectable input is a degenerate size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero rows or zero columns.
    EmptyGrid {
        /// Requested height.
        height: usize,
        /// Requested width.
        width: usize,
    },
    /// A dimension exceeds the maximum supported size.
    DimensionTooLarge {
        /// Which dimension (`"height"`, `"width"` or `"cells"`).
        name: &'static str,
        /// The requested value.
        value: usize,
        /// The maximum allowed value.
        max: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { height, width } => {
                write!(f, "grid must have at least one cell, got {height}x{width}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for GridError {}
