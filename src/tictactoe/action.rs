//! Moves and move errors.
//!
//! A move only names a target cell. Who plays it is passed alongside when
//! the move is applied, so the same value can be validated, searched and
//! replayed.

use super::types::{CELL_COUNT, SIDE, Symbol};
use serde::{Deserialize, Serialize};

/// A move: the `(row, col)` of the target cell.
///
/// Out-of-range coordinates are representable so that input mapping bugs
/// surface as [`MoveError::OutOfRange`] instead of panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row, 0 at the top.
    pub row: usize,
    /// Column, 0 at the left.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a move from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then(|| Self::new(index / SIDE, index % SIDE))
    }

    /// Row-major index of the target cell, or `None` when out of range.
    pub fn index(&self) -> Option<usize> {
        self.is_in_range().then(|| self.row * SIDE + self.col)
    }

    /// Checks that both coordinates are in `0..3`.
    pub fn is_in_range(&self) -> bool {
        self.row < SIDE && self.col < SIDE
    }

    /// Human-readable name of the target cell.
    pub fn label(&self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            (2, 2) => "Bottom-right",
            _ => "Off-board",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error that can occur when applying a move.
///
/// Every kind is recoverable; the driving loop decides how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already ended.
    #[display("Game is already over")]
    GameOver,

    /// Row or column outside `0..3`.
    #[display("Cell ({}, {}) is off the board", _0, _1)]
    OutOfRange(usize, usize),

    /// The target cell is not empty.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Move),

    /// The symbol is not the one whose turn it is.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Symbol),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for i in 0..CELL_COUNT {
            let mv = Move::from_index(i).unwrap();
            assert_eq!(mv.index(), Some(i));
        }
        assert_eq!(Move::from_index(9), None);
    }

    #[test]
    fn test_out_of_range_has_no_index() {
        assert_eq!(Move::new(0, 3).index(), None);
        assert_eq!(Move::new(3, 0).index(), None);
        assert_eq!(Move::new(3, 3).label(), "Off-board");
    }

    #[test]
    fn test_labels_follow_row_major_order() {
        assert_eq!(Move::new(0, 0).label(), "Top-left");
        assert_eq!(Move::new(1, 1).label(), "Center");
        assert_eq!(Move::new(2, 2).label(), "Bottom-right");
    }
}
