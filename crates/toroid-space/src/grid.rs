//! Fixed-size toroidal cell store with 8-connected neighbourhood.

use std::fmt;

use crate::wrap::wrap_axis;
use smallvec::SmallVec;
use toroid_core::{CellState, Coord, GridError};

/// Moore offsets in compass order: N, NE, E, SE, S, SW, W, NW.
pub const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// A two-dimensional grid whose edges wrap around on both axes (a torus).
///
/// Cells are stored row-major in a single allocation of exactly
/// `height * width` states. Any signed `(row, col)` is a valid address:
/// it is normalized with Euclidean remainder before indexing, so there is
/// no boundary and no out-of-bounds access.
///
/// A `Grid` owns its store exclusively. Cloning produces an independent
/// copy; the simulation engine always writes the next generation into a
/// fresh grid and never mutates the one it reads from.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<CellState>,
}

/// A disjoint, mutable run of consecutive cells in a grid's store.
///
/// Produced by [`Grid::runs_mut`]. `start` is the row-major index of
/// `cells[0]`; [`Grid::coord_of`] maps it back to `(row, col)`.
#[derive(Debug)]
pub struct CellRun<'a> {
    /// Row-major index of the first cell in the run.
    pub start: usize,
    /// The cells of the run.
    pub cells: &'a mut [CellState],
}

impl Grid {
    /// Largest size accepted for either axis.
    ///
    /// Coordinates are `i64`, so every in-bounds index must also be a valid
    /// non-negative `i64`.
    pub const MAX_DIM: usize = i64::MAX as usize;

    /// Create a `height x width` grid with every cell [`CellState::Dead`].
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if an axis exceeds
    /// [`MAX_DIM`](Self::MAX_DIM) or the cell count overflows `usize`.
    pub fn new(height: usize, width: usize) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::EmptyGrid { height, width });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        let cell_count = height
            .checked_mul(width)
            .ok_or(GridError::DimensionTooLarge {
                name: "cells",
                value: height.saturating_mul(width),
                max: usize::MAX,
            })?;
        Ok(Self {
            height,
            width,
            cells: vec![CellState::Dead; cell_count],
        })
    }

    /// A fresh all-dead grid with the same dimensions as `self`.
    ///
    /// Infallible: the dimensions were validated when `self` was built.
    pub fn empty_like(&self) -> Self {
        Self {
            height: self.height,
            width: self.width,
            cells: vec![CellState::Dead; self.cells.len()],
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells (`height * width`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Row-major index of a coordinate after wraparound.
    #[inline]
    fn index(&self, row: i64, col: i64) -> usize {
        wrap_axis(row, self.height) * self.width + wrap_axis(col, self.width)
    }

    /// Map a row-major index back to its `(row, col)` position.
    ///
    /// `index` is taken modulo the cell count.
    pub fn coord_of(&self, index: usize) -> (usize, usize) {
        let index = index % self.cells.len();
        (index / self.width, index % self.width)
    }

    /// Read the state at `(row, col)`, wrapping both axes.
    #[inline]
    pub fn get(&self, row: i64, col: i64) -> CellState {
        self.cells[self.index(row, col)]
    }

    /// Write `state` at `(row, col)`, wrapping both axes.
    ///
    /// Only the addressed cell changes.
    #[inline]
    pub fn set(&mut self, row: i64, col: i64, state: CellState) {
        let i = self.index(row, col);
        self.cells[i] = state;
    }

    /// The 8 Moore neighbours of `(row, col)` as normalized coordinates,
    /// in [`MOORE_OFFSETS`] order.
    ///
    /// On grids narrower than 3 on an axis the same cell appears more than
    /// once; on a 1x1 grid all eight entries are the cell itself.
    pub fn neighbours(&self, row: i64, col: i64) -> SmallVec<[Coord; 8]> {
        // Normalize first so the offsets below cannot overflow at i64 extremes.
        let r = wrap_axis(row, self.height) as i64;
        let c = wrap_axis(col, self.width) as i64;
        MOORE_OFFSETS
            .iter()
            .map(|&(dr, dc)| {
                (
                    wrap_axis(r + dr, self.height) as i64,
                    wrap_axis(c + dc, self.width) as i64,
                )
            })
            .collect()
    }

    /// Count the [`CellState::Alive`] cells among the 8 Moore neighbours of
    /// `(row, col)`. Always in `[0, 8]`.
    pub fn count_neighbours(&self, row: i64, col: i64) -> u8 {
        let r = wrap_axis(row, self.height) as i64;
        let c = wrap_axis(col, self.width) as i64;
        MOORE_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| self.get(r + dr, c + dc).is_alive())
            .count() as u8
    }

    /// Number of live cells in the whole grid.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// The row-major cell store.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Iterate over the rows as slices, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[CellState]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Split the store into disjoint mutable runs of at most `run_len`
    /// consecutive cells (row-major).
    ///
    /// This is the write path for filling a fresh grid from several
    /// threads: each run can be handed to a different worker, and no two
    /// runs overlap. Dimensions cannot change through it. A `run_len` of 0
    /// is treated as 1.
    pub fn runs_mut(&mut self, run_len: usize) -> impl Iterator<Item = CellRun<'_>> + '_ {
        let run_len = run_len.max(1);
        self.cells
            .chunks_mut(run_len)
            .enumerate()
            .map(move |(i, cells)| CellRun {
                start: i * run_len,
                cells,
            })
    }

    /// Render the grid as text, one line per row, using
    /// [`CellState::glyph`].
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("height", &self.height)
            .field("width", &self.width)
            .field("live", &self.live_count())
            .finish()
    }
}
