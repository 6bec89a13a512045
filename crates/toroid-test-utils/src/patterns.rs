//! Canonical seed patterns.
//!
//! Cell offsets are `(row, col)` relative to an origin; stamping wraps
//! around the grid like every other write.

use toroid_core::{CellState, Coord};
use toroid_space::Grid;

/// A named set of live-cell offsets.
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [Coord],
    /// Generations until the pattern repeats in place; 1 for still lifes,
    /// 0 for patterns that move or never settle.
    pub period: u64,
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    period: 1,
};

/// Horizontal phase.
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
    period: 2,
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    period: 2,
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[
        (0, 0),
        (0, 1),
        (1, 0),
        (1, 1),
        (2, 2),
        (2, 3),
        (3, 2),
        (3, 3),
    ],
    period: 2,
};

/// Travels one cell down and one cell right every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    period: 0,
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    period: 0,
};

pub const ALL: &[Pattern] = &[BLOCK, BLINKER, TOAD, BEACON, GLIDER, R_PENTOMINO];

/// Set every cell of `pattern`, offset by `origin`, to alive.
pub fn stamp(grid: &mut Grid, pattern: &Pattern, origin: Coord) {
    for &(r, c) in pattern.cells {
        grid.set(origin.0 + r, origin.1 + c, CellState::Alive);
    }
}

/// A fresh `height x width` grid holding only `pattern` at `origin`.
pub fn pattern_grid(height: usize, width: usize, pattern: &Pattern, origin: Coord) -> Grid {
    let mut grid = Grid::new(height, width).expect("pattern grid dimensions must be non-zero");
    stamp(&mut grid, pattern, origin);
    grid
}
