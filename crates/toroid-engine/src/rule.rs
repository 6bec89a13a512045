//! The birth/survival transition rule (B3/S23).

use toroid_core::CellState;

/// Next state of a cell given its current state and live-neighbour count.
///
/// A live cell survives with 2 or 3 live neighbours; a dead cell is born
/// with exactly 3. Everything else is dead in the next generation. Total
/// over every `u8`: counts above 8 cannot occur on a grid but map to
/// [`CellState::Dead`].
#[inline]
pub fn next_state(current: CellState, live_neighbours: u8) -> CellState {
    match (current, live_neighbours) {
        (CellState::Alive, 2 | 3) => CellState::Alive,
        (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}
