//! Pointer and keyboard mapping onto board cells.

use super::ui::{CELL_HEIGHT, CELL_WIDTH};
use crate::tictactoe::{Move, SIDE};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;

/// Checks whether a terminal cell lies inside `rect`.
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && row >= rect.y
        && column - rect.x < rect.width
        && row - rect.y < rect.height
}

/// Maps a click at `(column, row)` to the board cell under it.
///
/// `board` is the rectangle the board was drawn in. Clicks outside it or on
/// a grid line map to `None`.
pub fn cell_at(board: Rect, column: u16, row: u16) -> Option<Move> {
    if !contains(board, column, row) {
        return None;
    }

    let dx = column - board.x;
    let dy = row - board.y;
    let (stride_x, stride_y) = (CELL_WIDTH + 1, CELL_HEIGHT + 1);
    if dx % stride_x == CELL_WIDTH || dy % stride_y == CELL_HEIGHT {
        return None;
    }

    let mv = Move::new(usize::from(dy / stride_y), usize::from(dx / stride_x));
    mv.is_in_range().then_some(mv)
}

/// Moves the cursor with the arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Move, key: KeyCode) -> Move {
    let last = SIDE - 1;
    match key {
        KeyCode::Left => Move::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right => Move::new(cursor.row, (cursor.col + 1).min(last)),
        KeyCode::Up => Move::new(cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down => Move::new((cursor.row + 1).min(last), cursor.col),
        _ => cursor,
    }
}

/// Maps digits 1-9 to cells in row-major order, like a phone keypad.
pub fn digit_move(c: char) -> Option<Move> {
    let digit = c.to_digit(10)?;
    let index = usize::try_from(digit).ok()?.checked_sub(1)?;
    Move::from_index(index)
}
