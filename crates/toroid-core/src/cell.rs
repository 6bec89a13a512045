//! The two-valued cell state.

use std::fmt;

/// State of a single cell. There are exactly two.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellState {
    /// Unoccupied. Every freshly constructed grid is filled with this.
    #[default]
    Dead,
    /// Occupied.
    Alive,
}

impl CellState {
    /// Glyph used when rendering a grid as text.
    ///
    /// `Alive` renders as `*`, `Dead` as `-`.
    pub const fn glyph(self) -> char {
        match self {
            Self::Alive => '*',
            Self::Dead => '-',
        }
    }

    /// `true` for [`CellState::Alive`].
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dead() {
        assert_eq!(CellState::default(), CellState::Dead);
    }

    #[test]
    fn glyphs_are_distinct() {
        assert_eq!(CellState::Alive.glyph(), '*');
        assert_eq!(CellState::Dead.glyph(), '-');
        assert_eq!(CellState::Alive.to_string(), "*");
    }

    #[test]
    fn from_bool() {
        assert_eq!(CellState::from(true), CellState::Alive);
        assert_eq!(CellState::from(false), CellState::Dead);
        assert!(CellState::Alive.is_alive());
        assert!(!CellState::Dead.is_alive());
    }
}
