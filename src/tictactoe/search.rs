//! Exhaustive minimax search with alpha-beta pruning.
//!
//! The search plays `ai` as the maximizing player against a perfectly
//! rational `human`. Scores are depth-biased: an AI win scores
//! `10 - depth`, a human win `depth - 10`, a draw `0`, where `depth` counts
//! plies since the evaluation root. Faster wins and slower losses therefore
//! rank higher among otherwise equal outcomes.
//!
//! The tree is at most 9 plies deep, so there is no memoization, iterative
//! deepening or time control.

use super::rules::{is_full, winner};
use super::types::{Board, CELL_COUNT, Cell, Symbol};
use super::Move;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a win reached with no plies remaining.
pub const WIN_SCORE: i32 = 10;

/// Move chosen by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The recommended move.
    pub best_move: Move,
    /// Minimax score of the position after `best_move`.
    pub score: i32,
    /// Nodes visited across all root evaluations.
    pub nodes_searched: u64,
}

/// Returns the optimal move for `ai` on `board`.
///
/// `None` means the board has no empty cells. Calling this on a board that
/// is already won is a caller bug: it panics in debug builds and returns
/// `None` in release builds.
pub fn best_move(board: &Board, ai: Symbol, human: Symbol) -> Option<Move> {
    search(board, ai, human).map(|result| result.best_move)
}

/// Like [`best_move`], but also reports the score and node count.
///
/// Each legal move is tried in row-major order and evaluated as a
/// minimizing node at depth 0 with a fresh alpha-beta window. Only a
/// strictly greater score replaces the current best, so the first of
/// several equal moves wins.
#[instrument(skip(board), fields(empty = board.legal_moves().len()))]
pub fn search(board: &Board, ai: Symbol, human: Symbol) -> Option<SearchResult> {
    debug_assert_ne!(ai, human, "AI and human must play different symbols");
    debug_assert!(
        winner(board).is_none(),
        "search called on a finished game:\n{}",
        board
    );
    if winner(board).is_some() {
        return None;
    }

    let mut scratch = *board;
    let mut searcher = Searcher {
        ai,
        human,
        nodes: 0,
    };
    let mut best_score = i32::MIN;
    let mut best = None;

    for mv in board.legal_moves() {
        let Some(index) = mv.index() else { continue };
        scratch.put(index, Cell::Occupied(ai));
        let score = searcher.minimax(&mut scratch, 0, false, i32::MIN, i32::MAX);
        scratch.put(index, Cell::Empty);

        debug!(%mv, score, "Root move evaluated");
        if score > best_score {
            best_score = score;
            best = Some(mv);
        }
    }

    let result = best.map(|best_move| SearchResult {
        best_move,
        score: best_score,
        nodes_searched: searcher.nodes,
    });
    debug!(?result, "Search complete");
    result
}

/// Per-call search context. Never outlives a single [`search`].
struct Searcher {
    ai: Symbol,
    human: Symbol,
    nodes: u64,
}

impl Searcher {
    /// Scores `board` with `ai` to move when `maximizing`, `human` otherwise.
    ///
    /// The board is mutated and restored before returning.
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        match winner(board) {
            Some(symbol) if symbol == self.ai => return WIN_SCORE - depth,
            Some(_) => return depth - WIN_SCORE,
            None if is_full(board) => return 0,
            None => {}
        }

        let (mark, mut best) = if maximizing {
            (self.ai, i32::MIN)
        } else {
            (self.human, i32::MAX)
        };

        for index in 0..CELL_COUNT {
            if !board.is_empty_at(index) {
                continue;
            }

            board.put(index, Cell::Occupied(mark));
            let score = self.minimax(board, depth + 1, !maximizing, alpha, beta);
            board.put(index, Cell::Empty);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    /// Plain minimax with the same scoring, for checking that pruning is exact.
    fn full_minimax(board: &mut Board, depth: i32, maximizing: bool, ai: Symbol) -> i32 {
        match winner(board) {
            Some(symbol) if symbol == ai => return WIN_SCORE - depth,
            Some(_) => return depth - WIN_SCORE,
            None if is_full(board) => return 0,
            None => {}
        }
        let mark = if maximizing { ai } else { ai.opponent() };
        let mut scores = Vec::new();
        for i in 0..CELL_COUNT {
            if board.is_empty_at(i) {
                board.put(i, Cell::Occupied(mark));
                scores.push(full_minimax(board, depth + 1, !maximizing, ai));
                board.put(i, Cell::Empty);
            }
        }
        if maximizing {
            scores.into_iter().max().unwrap()
        } else {
            scores.into_iter().min().unwrap()
        }
    }

    #[test]
    fn test_pruning_matches_plain_minimax() {
        for (position, maximizing) in [
            ("X........", false),
            ("X...O....", true),
            ("XX.O.....", true),
            ("X.O.X....", false),
            ("XOX.O....", true),
        ] {
            let mut b = board(position);
            let mut scratch = b;
            let mut searcher = Searcher {
                ai: Symbol::X,
                human: Symbol::O,
                nodes: 0,
            };
            let pruned = searcher.minimax(&mut scratch, 0, maximizing, i32::MIN, i32::MAX);
            let plain = full_minimax(&mut b, 0, maximizing, Symbol::X);
            assert_eq!(pruned, plain, "position {}", position);
        }
    }

    #[test]
    fn test_minimax_restores_board() {
        let original = board("X...O....");
        let mut scratch = original;
        let mut searcher = Searcher {
            ai: Symbol::O,
            human: Symbol::X,
            nodes: 0,
        };
        searcher.minimax(&mut scratch, 0, true, i32::MIN, i32::MAX);
        assert_eq!(scratch, original);
        assert!(searcher.nodes > 1);
    }

    #[test]
    fn test_terminal_scores() {
        let mut searcher = Searcher {
            ai: Symbol::O,
            human: Symbol::X,
            nodes: 0,
        };
        let mut o_won = board("OOO/XX./X..");
        assert_eq!(searcher.minimax(&mut o_won, 2, true, i32::MIN, i32::MAX), 8);
        let mut x_won = board("XXX/OO./...");
        assert_eq!(searcher.minimax(&mut x_won, 3, false, i32::MIN, i32::MAX), -7);
        let mut drawn = board("XOX/OXX/OXO");
        assert_eq!(searcher.minimax(&mut drawn, 5, true, i32::MIN, i32::MAX), 0);
    }

    #[test]
    fn test_prefers_faster_win() {
        // O can win now at (1,2) or set up a later win elsewhere.
        let result = search(&board("XX./OO./X.."), Symbol::O, Symbol::X).unwrap();
        assert_eq!(result.best_move, Move::new(1, 2));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_full_board_has_no_move() {
        assert_eq!(search(&board("XOX/OXX/OXO"), Symbol::O, Symbol::X), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "search called on a finished game")]
    fn test_won_board_fails_fast_in_debug() {
        search(&board("XXX/OO./..."), Symbol::O, Symbol::X);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "AI and human must play different symbols")]
    fn test_same_symbols_reported_with_span_enabled() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        // Five X marks: more than half the board for each "side".
        tracing::subscriber::with_default(subscriber, || {
            search(&board("XXO/OOX/XXO"), Symbol::X, Symbol::X);
        });
    }
}
