//! Grid compliance test helpers.
//!
//! These functions verify the toroidal invariants over every cell of a
//! populated grid. Reused by the grid tests across a range of shapes,
//! including the degenerate 1xN and 2x2 cases.

use crate::grid::Grid;
use indexmap::IndexSet;

/// Assert that every row-major index maps to a distinct in-bounds cell.
pub fn assert_store_bijective(grid: &Grid) {
    assert_eq!(grid.cell_count(), grid.height() * grid.width());
    let coords: IndexSet<(usize, usize)> =
        (0..grid.cell_count()).map(|i| grid.coord_of(i)).collect();
    assert_eq!(
        coords.len(),
        grid.cell_count(),
        "coord_of maps two indices to the same cell"
    );
    for &(r, c) in &coords {
        assert!(r < grid.height() && c < grid.width(), "({r}, {c}) out of bounds");
    }
}

/// Assert that reads are periodic in both axes.
pub fn assert_periodic(grid: &Grid) {
    let h = grid.height() as i64;
    let w = grid.width() as i64;
    for r in 0..h {
        for c in 0..w {
            let s = grid.get(r, c);
            assert_eq!(s, grid.get(r + h, c), "row period broken at ({r}, {c})");
            assert_eq!(s, grid.get(r, c - w), "col period broken at ({r}, {c})");
            assert_eq!(
                s,
                grid.get(r - 3 * h, c + 2 * w),
                "joint period broken at ({r}, {c})"
            );
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`, with
/// matching multiplicity.
pub fn assert_neighbours_symmetric(grid: &Grid) {
    for r in 0..grid.height() as i64 {
        for c in 0..grid.width() as i64 {
            let here = (r, c);
            for nb in grid.neighbours(r, c) {
                let forward = grid.neighbours(r, c).iter().filter(|&&x| x == nb).count();
                let back = grid
                    .neighbours(nb.0, nb.1)
                    .iter()
                    .filter(|&&x| x == here)
                    .count();
                assert_eq!(
                    forward, back,
                    "neighbour symmetry violated between {here:?} and {nb:?}"
                );
            }
        }
    }
}

/// Assert that `count_neighbours` agrees with the live entries of
/// `neighbours`.
pub fn assert_count_matches_neighbours(grid: &Grid) {
    for r in 0..grid.height() as i64 {
        for c in 0..grid.width() as i64 {
            let expected = grid
                .neighbours(r, c)
                .iter()
                .filter(|&&(nr, nc)| grid.get(nr, nc).is_alive())
                .count();
            assert_eq!(
                grid.count_neighbours(r, c) as usize,
                expected,
                "count mismatch at ({r}, {c})"
            );
        }
    }
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance(grid: &Grid) {
    assert_store_bijective(grid);
    assert_periodic(grid);
    assert_neighbours_symmetric(grid);
    assert_count_matches_neighbours(grid);
}
