//! Full-board detection and move enumeration.

use super::super::{Board, Cell, Move};

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// Lists every empty cell in row-major order.
///
/// The order is part of the contract: the search breaks ties in favour of
/// the first move enumerated.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == Cell::Empty)
        .filter_map(|(i, _)| Move::from_index(i))
        .collect()
}
