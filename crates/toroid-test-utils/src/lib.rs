//! Test utilities for Toroid development.
//!
//! Provides canonical [`patterns`] for seeding grids, deterministic
//! random soups ([`random_soup`]), and [`reference_step`], a deliberately
//! naive stepper that shares no code with the engine and serves as the
//! oracle in consistency tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod patterns;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use toroid_core::CellState;
use toroid_space::Grid;

pub use patterns::{pattern_grid, stamp, Pattern};

/// Build a `height x width` grid where each cell is alive with probability
/// `density` (clamped to `[0, 1]`).
///
/// Deterministic: the same `seed` always yields the same grid.
pub fn random_soup(height: usize, width: usize, density: f64, seed: u64) -> Grid {
    let density = density.clamp(0.0, 1.0);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut grid = Grid::new(height, width).expect("soup dimensions must be non-zero");
    for r in 0..height as i64 {
        for c in 0..width as i64 {
            if rng.random_bool(density) {
                grid.set(r, c, CellState::Alive);
            }
        }
    }
    grid
}

/// Advance `grid` one generation with explicit modular arithmetic.
///
/// Independent of `Grid::count_neighbours` and the engine's rule function,
/// so agreement with the engine is meaningful.
pub fn reference_step(grid: &Grid) -> Grid {
    let h = grid.height();
    let w = grid.width();
    let alive: Vec<bool> = grid.cells().iter().map(|c| c.is_alive()).collect();
    // Offsets as additive residues so no subtraction can underflow.
    let offsets = [
        (h - 1, w - 1),
        (h - 1, 0),
        (h - 1, 1),
        (0, w - 1),
        (0, 1),
        (1, w - 1),
        (1, 0),
        (1, 1),
    ];
    let mut next = grid.empty_like();
    for r in 0..h {
        for c in 0..w {
            let n = offsets
                .iter()
                .filter(|&&(dr, dc)| alive[((r + dr) % h) * w + (c + dc) % w])
                .count();
            let live = matches!((alive[r * w + c], n), (true, 2) | (true, 3) | (false, 3));
            if live {
                next.set(r as i64, c as i64, CellState::Alive);
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soup_is_deterministic() {
        let a = random_soup(16, 16, 0.4, 7);
        let b = random_soup(16, 16, 0.4, 7);
        let c = random_soup(16, 16, 0.4, 8);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn soup_density_extremes() {
        assert_eq!(random_soup(5, 5, 0.0, 1).live_count(), 0);
        assert_eq!(random_soup(5, 5, 1.0, 1).live_count(), 25);
        assert_eq!(random_soup(5, 5, 7.0, 1).live_count(), 25);
    }

    #[test]
    fn reference_block_is_still() {
        let g = pattern_grid(6, 6, &patterns::BLOCK, (2, 2));
        assert_eq!(reference_step(&g), g);
    }

    #[test]
    fn reference_single_cell_torus() {
        let mut g = Grid::new(1, 1).unwrap();
        g.set(0, 0, CellState::Alive);
        // Eight self-neighbours: overcrowded.
        assert_eq!(reference_step(&g).live_count(), 0);
    }
}
