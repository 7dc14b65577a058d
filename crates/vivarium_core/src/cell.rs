use serde::{Deserialize, Serialize};

/// A single automaton unit: alive or dead, at a fixed grid position.
///
/// Coordinates are set at creation and never change; a cell's identity
/// is its position. Only the engine flips aliveness, and it does so by
/// building replacement cells, never by mutating in place.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    alive: bool,
}

impl Cell {
    pub fn new(row: usize, col: usize, alive: bool) -> Self {
        Self { row, col, alive }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Returns a copy of this cell with the given state, coordinates
    /// preserved.
    pub fn with_state(&self, alive: bool) -> Self {
        Self { alive, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_state_preserves_position() {
        let cell = Cell::new(3, 7, false);
        let flipped = cell.with_state(true);
        assert_eq!(flipped.row(), 3);
        assert_eq!(flipped.col(), 7);
        assert!(flipped.is_alive());
        assert!(!cell.is_alive(), "original cell is untouched");
    }

    #[test]
    fn test_with_state_same_state_is_identity() {
        let cell = Cell::new(0, 0, true);
        assert_eq!(cell.with_state(true), cell);
    }
}
