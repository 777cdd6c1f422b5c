//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Symbol};

/// The 8 winning lines as row-major indices: rows, then columns, then
/// diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the symbol of the first complete line in scan order, `None`
/// otherwise. Makes no assumption that the board came from legal play.
pub fn winner(board: &Board) -> Option<Symbol> {
    let cells = board.cells();
    for [a, b, c] in LINES {
        if let Cell::Occupied(symbol) = cells[a]
            && cells[a] == cells[b]
            && cells[b] == cells[c]
        {
            return Some(symbol);
        }
    }

    None
}
