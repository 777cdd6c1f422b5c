//! Pure tic-tac-toe engine: board, rules, game state and search.
//!
//! Nothing here holds hidden state. Every operation takes the board or game
//! state explicitly and returns a new value.

mod action;
pub mod invariants;
pub mod rules;
mod search;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use search::{SearchResult, WIN_SCORE, best_move, search};
pub use state::{GameState, InconsistentBoard, is_terminal};
pub use types::{Board, BoardParseError, CELL_COUNT, Cell, Outcome, SIDE, Symbol};
