//! Headless game orchestration between two players.

use crate::players::Player;
use crate::tictactoe::{GameState, Move, MoveError, Outcome, Symbol};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Errors that stop a headless game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MatchError {
    /// A player had no move although the game was still running.
    #[display("{} returned no move in a live game", _0)]
    NoMove(String),

    /// A player chose a move the rules rejected.
    #[display("{} played an illegal move: {}", player, source)]
    IllegalMove {
        /// Name of the offending player.
        player: String,
        /// Why the move was rejected.
        source: MoveError,
    },
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::NoMove(_) => None,
            MatchError::IllegalMove { source, .. } => Some(source),
        }
    }
}

/// A finished game: its moves in order and the final state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Moves in the order they were played, X first.
    pub moves: Vec<Move>,
    /// Terminal state the game ended in.
    pub final_state: GameState,
}

impl MatchRecord {
    /// Outcome of the game.
    pub fn outcome(&self) -> Option<Outcome> {
        self.final_state.outcome()
    }
}

/// Plays one game to completion, `x` moving first.
#[instrument(skip_all, fields(x = x.name(), o = o.name()))]
pub fn play_match(x: &mut dyn Player, o: &mut dyn Player) -> Result<MatchRecord, MatchError> {
    let mut state = GameState::new();
    let mut moves = Vec::with_capacity(9);

    while !state.is_terminal() {
        let player: &mut dyn Player = match state.turn() {
            Symbol::X => &mut *x,
            Symbol::O => &mut *o,
        };

        let mv = player
            .choose_move(&state)
            .ok_or_else(|| MatchError::NoMove(player.name().to_string()))?;
        state = state
            .apply_move(mv, state.turn())
            .map_err(|source| MatchError::IllegalMove {
                player: player.name().to_string(),
                source,
            })?;
        debug!(%mv, "Move played");
        moves.push(mv);
    }

    info!(outcome = ?state.outcome(), plies = moves.len(), "Match finished");
    Ok(MatchRecord {
        moves,
        final_state: state,
    })
}

/// Tally of outcomes over several games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl MatchSummary {
    /// Adds one finished game to the tally.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Symbol::X) => self.x_wins += 1,
            Outcome::Winner(Symbol::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Games won by `symbol`.
    pub fn wins(&self, symbol: Symbol) -> u32 {
        match symbol {
            Symbol::X => self.x_wins,
            Symbol::O => self.o_wins,
        }
    }
}

/// Plays `games` games, giving each its own players from `make_x`/`make_o`.
///
/// The factories receive the game number so seeded players vary per game.
#[instrument(skip(make_x, make_o))]
pub fn run_series<FX, FO>(
    games: u32,
    mut make_x: FX,
    mut make_o: FO,
) -> Result<MatchSummary, MatchError>
where
    FX: FnMut(u32) -> Box<dyn Player>,
    FO: FnMut(u32) -> Box<dyn Player>,
{
    let mut summary = MatchSummary::default();
    for game in 0..games {
        let mut x = make_x(game);
        let mut o = make_o(game);
        let record = play_match(x.as_mut(), o.as_mut())?;
        match record.outcome() {
            Some(outcome) => summary.record(outcome),
            None => warn!(game, "Match ended without an outcome"),
        }
    }
    info!(?summary, "Series finished");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::{EnginePlayer, FirstAvailablePlayer};

    #[test]
    fn test_first_available_vs_itself() {
        // Cells fill in order, so X holds 0, 2, 4, 6 and completes 2-4-6.
        let record = play_match(&mut FirstAvailablePlayer, &mut FirstAvailablePlayer).unwrap();
        assert_eq!(record.outcome(), Some(Outcome::Winner(Symbol::X)));
        assert_eq!(record.moves.len(), 7);
    }

    #[test]
    fn test_engine_vs_engine_draws() {
        let record = play_match(&mut EnginePlayer, &mut EnginePlayer).unwrap();
        assert_eq!(record.outcome(), Some(Outcome::Draw));
        assert_eq!(record.moves.len(), 9);
    }

    #[test]
    fn test_summary_tally() {
        let mut summary = MatchSummary::default();
        summary.record(Outcome::Draw);
        summary.record(Outcome::Winner(Symbol::O));
        assert_eq!(summary.games(), 2);
        assert_eq!(summary.wins(Symbol::O), 1);
        assert_eq!(summary.wins(Symbol::X), 0);
    }
}
