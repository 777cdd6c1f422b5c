//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold for every state reached
//! through `apply_move`. They are checked in debug builds and can be tested
//! independently.

use super::{GameState, Symbol};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariant: X has placed the same number of marks as O, or one more.
pub struct TurnBalance;

impl Invariant<GameState> for TurnBalance {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Symbol::X);
        let o = state.board().count(Symbol::O);
        let valid = x == o || x == o + 1;
        if !valid {
            warn!(x, o, "Turn balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X count minus O count is 0 or 1"
    }
}

/// Invariant: the recorded turn agrees with the mark counts.
///
/// In progress, X moves when counts are equal. Once terminal, the turn stays
/// with whoever made the final move.
pub struct TurnMatchesBoard;

impl Invariant<GameState> for TurnMatchesBoard {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Symbol::X);
        let o = state.board().count(Symbol::O);
        let x_moved_last = x > o;
        let expected = match (state.is_terminal(), x_moved_last) {
            (false, false) | (true, true) => Symbol::X,
            (false, true) | (true, false) => Symbol::O,
        };
        state.turn() == expected
    }

    fn description() -> &'static str {
        "Turn matches the marks on the board"
    }
}

type Check = (fn(&GameState) -> bool, fn() -> &'static str);

/// Every invariant a state reached through `apply_move` satisfies.
pub struct GameInvariants;

impl GameInvariants {
    const CHECKS: [Check; 2] = [
        (TurnBalance::holds, TurnBalance::description),
        (TurnMatchesBoard::holds, TurnMatchesBoard::description),
    ];

    /// Checks every invariant, collecting all violations in order.
    pub fn check_all(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = Self::CHECKS
            .iter()
            .filter(|(holds, _)| !holds(state))
            .map(|(_, description)| InvariantViolation::new(description()))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Board, Move};

    #[test]
    fn test_invariants_hold_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_moves() {
        let mut state = GameState::new();
        for (r, c) in [(0, 0), (1, 1), (0, 2), (0, 1)] {
            state = state.apply_move(Move::new(r, c), state.turn()).unwrap();
            assert!(GameInvariants::check_all(&state).is_ok());
        }
    }

    #[test]
    fn test_turn_balance_detects_extra_o() {
        // from_board refuses this, so build the state through serde.
        let board: Board = "OO./X../...".parse().unwrap();
        let json = serde_json::json!({ "board": board, "turn": "O", "outcome": null });
        let state: GameState = serde_json::from_value(json).unwrap();

        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, TurnBalance::description());
        assert_eq!(violations[1].description, TurnMatchesBoard::description());
    }

    #[test]
    fn test_wrong_turn_alone_is_one_violation() {
        let board: Board = "X../.../...".parse().unwrap();
        let json = serde_json::json!({ "board": board, "turn": "X", "outcome": null });
        let state: GameState = serde_json::from_value(json).unwrap();

        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(TurnMatchesBoard::description())]
        );
    }
}
