//! Tests for the minimax opponent.

use proptest::prelude::*;
use unbeatable_tictactoe::{
    Board, EnginePlayer, GameState, Move, Outcome, RandomPlayer, Symbol, WIN_SCORE, best_move,
    play_match, search,
};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn test_empty_board_opening_is_a_draw() {
    let result = search(&Board::new(), Symbol::X, Symbol::O).expect("move available");
    assert_eq!(result.score, 0);
    // Ties go to the first move in row-major order.
    assert_eq!(result.best_move, Move::new(0, 0));
}

#[test]
fn test_reply_to_corner_is_center() {
    let mv = best_move(&board("X../.../..."), Symbol::O, Symbol::X);
    assert_eq!(mv, Some(Move::new(1, 1)));
}

#[test]
fn test_blocks_open_row() {
    let result = search(&board("XX./O../..."), Symbol::O, Symbol::X).expect("move available");
    assert_eq!(result.best_move, Move::new(0, 2));
}

#[test]
fn test_takes_immediate_win() {
    let result = search(&board("X../OO./..."), Symbol::O, Symbol::X).expect("move available");
    assert_eq!(result.best_move, Move::new(1, 2));
    assert_eq!(result.score, WIN_SCORE);
}

#[test]
fn test_win_beats_block() {
    // O can block X's top row or complete its own middle row.
    let mv = best_move(&board("XX./OO./X.."), Symbol::O, Symbol::X);
    assert_eq!(mv, Some(Move::new(1, 2)));
}

#[test]
fn test_last_cell() {
    let b = board("XOX/XOO/OX.");
    assert_eq!(best_move(&b, Symbol::X, Symbol::O), Some(Move::new(2, 2)));
}

#[test]
fn test_full_board_has_no_move() {
    assert_eq!(best_move(&board("XOX/XOO/OXX"), Symbol::X, Symbol::O), None);
}

#[test]
fn test_search_does_not_modify_board() {
    let b = board("X../.O./...");
    let copy = b;
    let _ = search(&b, Symbol::X, Symbol::O);
    assert_eq!(b, copy);
}

/// Walks every line of play where `engine` answers with [`best_move`] and
/// the opponent tries every legal move. Returns the number of finished games.
fn explore(state: GameState, engine: Symbol) -> usize {
    if let Some(outcome) = state.outcome() {
        assert_ne!(
            outcome,
            Outcome::Winner(engine.opponent()),
            "engine lost:\n{}",
            state.board()
        );
        return 1;
    }

    if state.turn() == engine {
        let mv = best_move(state.board(), engine, engine.opponent()).expect("live board");
        let next = state.apply_move(mv, engine).expect("engine move is legal");
        explore(next, engine)
    } else {
        state
            .legal_moves()
            .into_iter()
            .map(|mv| {
                let next = state
                    .apply_move(mv, state.turn())
                    .expect("legal move applies");
                explore(next, engine)
            })
            .sum()
    }
}

#[test]
fn test_never_loses_as_x() {
    let games = explore(GameState::new(), Symbol::X);
    assert!(games > 0);
}

#[test]
fn test_never_loses_as_o() {
    let games = explore(GameState::new(), Symbol::O);
    assert!(games > 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_random_opponent_never_wins(seed in any::<u64>(), engine_is_x in any::<bool>()) {
        let mut engine = EnginePlayer;
        let mut random = RandomPlayer::with_seed(seed);
        let record = if engine_is_x {
            play_match(&mut engine, &mut random)
        } else {
            play_match(&mut random, &mut engine)
        }
        .expect("match completes");

        let engine_symbol = if engine_is_x { Symbol::X } else { Symbol::O };
        prop_assert_ne!(
            record.outcome(),
            Some(Outcome::Winner(engine_symbol.opponent()))
        );
    }
}
