//! Player trait and move-choosing strategies.

use crate::tictactoe::{GameState, Move, search};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Something that picks moves for one side of a game.
pub trait Player {
    /// Chooses a move for the side to move in `state`.
    ///
    /// Returns `None` only when `state` offers no legal move.
    fn choose_move(&mut self, state: &GameState) -> Option<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// The unbeatable minimax player.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnginePlayer;

impl Player for EnginePlayer {
    fn choose_move(&mut self, state: &GameState) -> Option<Move> {
        if state.is_terminal() {
            return None;
        }
        let me = state.turn();
        let result = search(state.board(), me, me.opponent())?;
        debug!(
            symbol = %me,
            mv = %result.best_move,
            score = result.score,
            nodes = result.nodes_searched,
            "Engine chose move"
        );
        Some(result.best_move)
    }

    fn name(&self) -> &str {
        "Engine"
    }
}

/// Picks uniformly among legal moves from a seeded generator.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a random player with a fixed seed, for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn choose_move(&mut self, state: &GameState) -> Option<Move> {
        if state.is_terminal() {
            return None;
        }
        state.legal_moves().choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Random"
    }
}

/// Simple player that picks the first empty cell in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailablePlayer;

impl Player for FirstAvailablePlayer {
    fn choose_move(&mut self, state: &GameState) -> Option<Move> {
        if state.is_terminal() {
            return None;
        }
        state.legal_moves().first().copied()
    }

    fn name(&self) -> &str {
        "First available"
    }
}

/// Opponent strategies selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Strategy {
    /// The minimax engine.
    Engine,
    /// Uniformly random legal moves.
    Random,
    /// First empty cell in row-major order.
    First,
}

impl Strategy {
    /// Builds a boxed player for this strategy.
    ///
    /// `seed` only affects [`Strategy::Random`].
    pub fn player(self, seed: u64) -> Box<dyn Player> {
        match self {
            Strategy::Engine => Box::new(EnginePlayer),
            Strategy::Random => Box::new(RandomPlayer::with_seed(seed)),
            Strategy::First => Box::new(FirstAvailablePlayer),
        }
    }
}
