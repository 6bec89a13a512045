//! Generation counter and the [`Coord`] type alias.

use std::fmt;

/// A signed `(row, col)` coordinate.
///
/// Either component may be negative or beyond the grid bounds; grids
/// normalize coordinates with wraparound before indexing.
pub type Coord = (i64, i64);

/// Monotonically increasing generation counter.
///
/// The seed grid of a simulation is generation 0; each advance
/// increments it by one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The following generation.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
