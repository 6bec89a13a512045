//! State hashing for grid comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of grid contents. The
//! hash is not cryptographically secure; it backs repeat detection in
//! the simulation driver, where a collision only costs a false report.

use crate::grid::Grid;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Compute a hash over the dimensions and every cell of `grid`.
///
/// Dimensions are folded in first, so a 2x3 and a 3x2 grid with the same
/// flat contents hash differently.
pub fn state_hash(grid: &Grid) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u64(hash, grid.height() as u64);
    hash = fnv1a_u64(hash, grid.width() as u64);
    for &cell in grid.cells() {
        hash = fnv1a_byte(hash, cell as u8);
    }
    hash
}
