//! Authoritative game state and the single move-application operation.

use super::action::{Move, MoveError};
use super::invariants::GameInvariants;
use super::types::{Board, Cell, Outcome, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state.
///
/// A plain value: every operation takes it explicitly and returns a new one.
/// Once `outcome` is set the state is terminal and rejects further moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Symbol,
    outcome: Option<Outcome>,
}

impl GameState {
    /// Creates the initial state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Symbol::X,
            outcome: None,
        }
    }

    /// Discards this state entirely and returns a fresh initial one.
    #[instrument(skip(self), fields(outcome = ?self.outcome))]
    pub fn reset(self) -> Self {
        debug!("Resetting game");
        Self::new()
    }

    /// Builds a state from an arbitrary board position.
    ///
    /// The turn and outcome are derived from the board. Boards whose mark
    /// counts could not arise from X-first alternating play are rejected.
    pub fn from_board(board: Board) -> Result<Self, InconsistentBoard> {
        let x = board.count(Symbol::X);
        let o = board.count(Symbol::O);
        let (to_move, last_mover) = match x.checked_sub(o) {
            Some(0) => (Symbol::X, Symbol::O),
            Some(1) => (Symbol::O, Symbol::X),
            _ => return Err(InconsistentBoard { x, o }),
        };

        let outcome = evaluate(&board);
        Ok(Self {
            board,
            turn: if outcome.is_some() { last_mover } else { to_move },
            outcome,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the symbol whose turn it is.
    ///
    /// On a terminal state this is the symbol that made the final move.
    pub fn turn(&self) -> Symbol {
        self.turn
    }

    /// Returns the outcome once the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// True once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Empty cells in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board.legal_moves()
    }

    /// Applies a move for `symbol`, returning the next state.
    ///
    /// Checks run in order: game over, wrong turn, out of range, occupied.
    /// `self` is never modified, so a failed move leaves the caller's state
    /// exactly as it was.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&self, mv: Move, symbol: Symbol) -> Result<Self, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if symbol != self.turn {
            return Err(MoveError::WrongTurn(symbol));
        }
        let index = mv.index().ok_or(MoveError::OutOfRange(mv.row, mv.col))?;
        if !self.board.is_empty_at(index) {
            return Err(MoveError::CellOccupied(mv));
        }

        let mut next = *self;
        next.board.put(index, Cell::Occupied(symbol));
        next.outcome = evaluate(&next.board);
        if next.outcome.is_none() {
            next.turn = symbol.opponent();
        }

        debug_assert!(
            GameInvariants::check_all(&next).is_ok(),
            "Game invariants violated after {} played {}",
            symbol,
            mv
        );
        debug!(outcome = ?next.outcome, "Move applied");
        Ok(next)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// True iff the board is won or full.
pub fn is_terminal(state: &GameState) -> bool {
    evaluate(state.board()).is_some()
}

/// Terminal status of a board: a win takes precedence over a full board.
fn evaluate(board: &Board) -> Option<Outcome> {
    if let Some(symbol) = board.winner() {
        Some(Outcome::Winner(symbol))
    } else if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}

/// A board whose mark counts cannot come from legal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Inconsistent board: {} X marks and {} O marks", x, o)]
pub struct InconsistentBoard {
    /// Number of X marks.
    pub x: usize,
    /// Number of O marks.
    pub o: usize,
}

impl std::error::Error for InconsistentBoard {}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[(usize, usize)]) -> GameState {
        moves.iter().fold(GameState::new(), |state, &(r, c)| {
            state.apply_move(Move::new(r, c), state.turn()).unwrap()
        })
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.turn(), Symbol::X);
        assert!(!state.is_terminal());
        assert_eq!(state.outcome(), None);
        assert_eq!(state.legal_moves().len(), 9);
    }

    #[test]
    fn test_turn_flips_after_move() {
        let state = play(&[(1, 1)]);
        assert_eq!(state.turn(), Symbol::O);
        assert_eq!(state.board().get(Move::new(1, 1)), Some(Cell::Occupied(Symbol::X)));
    }

    #[test]
    fn test_win_sets_outcome_and_keeps_turn() {
        let state = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(state.outcome(), Some(Outcome::Winner(Symbol::X)));
        assert_eq!(state.turn(), Symbol::X);
        assert!(is_terminal(&state));
    }

    #[test]
    fn test_full_board_is_draw() {
        // X O X / X O O / O X X
        let state = play(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ]);
        assert_eq!(state.outcome(), Some(Outcome::Draw));
    }

    #[test]
    fn test_error_kinds() {
        let state = play(&[(1, 1)]);
        assert_eq!(
            state.apply_move(Move::new(1, 1), Symbol::O),
            Err(MoveError::CellOccupied(Move::new(1, 1)))
        );
        assert_eq!(
            state.apply_move(Move::new(5, 0), Symbol::O),
            Err(MoveError::OutOfRange(5, 0))
        );
        assert_eq!(
            state.apply_move(Move::new(0, 0), Symbol::X),
            Err(MoveError::WrongTurn(Symbol::X))
        );

        let over = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(
            over.apply_move(Move::new(2, 2), Symbol::O),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_from_board_derives_turn_and_outcome() {
        let state = GameState::from_board("XX./O../...".parse().unwrap()).unwrap();
        assert_eq!(state.turn(), Symbol::O);
        assert!(!state.is_terminal());

        let won = GameState::from_board("XXX/OO./...".parse().unwrap()).unwrap();
        assert_eq!(won.outcome(), Some(Outcome::Winner(Symbol::X)));
        assert_eq!(won.turn(), Symbol::X);

        assert_eq!(
            GameState::from_board("OO./X../...".parse().unwrap()),
            Err(InconsistentBoard { x: 1, o: 2 })
        );
    }

    #[test]
    fn test_reset_returns_initial_state() {
        let state = play(&[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(state.reset(), GameState::new());
    }
}
