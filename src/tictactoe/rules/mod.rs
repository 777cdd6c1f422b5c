//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from board
//! storage so the search can call them on its scratch board directly.

pub mod draw;
pub mod win;

pub use draw::{is_full, legal_moves};
pub use win::{LINES, winner};
