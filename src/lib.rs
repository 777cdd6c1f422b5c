//! Unbeatable tic-tac-toe.
//!
//! A pure game engine plus a minimax opponent that never loses.
//!
//! # Architecture
//!
//! - **Rules**: board, moves, win/draw detection and the single
//!   [`GameState::apply_move`] transition
//! - **Search**: exhaustive minimax with alpha-beta pruning ([`best_move`])
//! - **Players**: strategies behind the [`Player`] trait and a headless
//!   match runner
//! - **TUI**: a mouse-driven terminal board that drives the engine
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{GameState, Move, Symbol, best_move};
//!
//! let state = GameState::new().apply_move(Move::new(1, 1), Symbol::X)?;
//! let reply = best_move(state.board(), Symbol::O, Symbol::X).expect("board has room");
//! let state = state.apply_move(reply, Symbol::O)?;
//! assert_eq!(state.turn(), Symbol::X);
//! # Ok::<(), unbeatable_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod match_runner;
mod players;
mod tictactoe;
pub mod tui;

// Crate-level exports - Game engine
pub use tictactoe::{
    Board, BoardParseError, CELL_COUNT, Cell, GameState, InconsistentBoard, Move, MoveError,
    Outcome, SIDE, SearchResult, Symbol, WIN_SCORE, best_move, is_terminal, search,
};

// Crate-level exports - Rules and invariants
pub use tictactoe::invariants::{
    GameInvariants, Invariant, InvariantViolation, TurnBalance, TurnMatchesBoard,
};
pub use tictactoe::rules::{LINES, is_full, legal_moves, winner};

// Crate-level exports - Players
pub use match_runner::{MatchError, MatchRecord, MatchSummary, play_match, run_series};
pub use players::{EnginePlayer, FirstAvailablePlayer, Player, RandomPlayer, Strategy};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};
