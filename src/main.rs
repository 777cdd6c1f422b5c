//! Unbeatable - command-line entry point
//!
//! Interactive play in the terminal, plus headless analysis and self-play.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use unbeatable_tictactoe::{
    Board, EnginePlayer, GameConfig, GameState, MatchSummary, Player, Strategy, Symbol, run_series,
    search, tui,
};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        None => run_play(&cli.config, None, None),
        Some(Command::Play { think_ms, human }) => run_play(&cli.config, think_ms, human),
        Some(Command::BestMove { board, ai, json }) => {
            init_stderr_logging();
            run_best_move(board, ai, json)
        }
        Some(Command::SelfPlay {
            games,
            opponent,
            engine_as,
            seed,
            json,
        }) => {
            init_stderr_logging();
            run_self_play(games, opponent, engine_as, seed, json)
        }
    }
}

/// Headless commands log to stderr so stdout stays machine-readable.
fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the interactive terminal game
fn run_play(config_path: &Path, think_ms: Option<u64>, human: Option<Symbol>) -> Result<()> {
    let mut config = GameConfig::load_or_default(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    if let Some(ms) = think_ms {
        config = config.with_think_delay_ms(ms);
    }
    if let Some(symbol) = human {
        config = config.with_human_symbol(symbol);
    }
    tui::run(config)
}

/// Print the engine's choice for a single position
#[instrument(skip(board))]
fn run_best_move(board: Board, ai: Option<Symbol>, json: bool) -> Result<()> {
    let ai = match ai {
        Some(symbol) => symbol,
        None => GameState::from_board(board)
            .context("Cannot infer the side to move; pass --ai")?
            .turn(),
    };

    if let Some(winner) = board.winner() {
        println!("Game already over: {} wins", winner);
        return Ok(());
    }

    match search(&board, ai, ai.opponent()) {
        Some(result) if json => println!("{}", serde_json::to_string_pretty(&result)?),
        Some(result) => {
            println!("{}", board);
            println!();
            println!(
                "{} plays {} ({}), score {}, {} nodes searched",
                ai,
                result.best_move,
                result.best_move.label(),
                result.score,
                result.nodes_searched
            );
        }
        None => println!("No legal moves: the game is a draw"),
    }
    Ok(())
}

/// Play a headless series and fail if the engine ever lost
#[instrument]
fn run_self_play(
    games: u32,
    opponent: Strategy,
    engine_as: Symbol,
    seed: u64,
    json: bool,
) -> Result<()> {
    let engine = |_: u32| -> Box<dyn Player> { Box::new(EnginePlayer) };
    let other = |game: u32| opponent.player(seed.wrapping_add(u64::from(game)));

    let summary = match engine_as {
        Symbol::X => run_series(games, engine, other)?,
        Symbol::O => run_series(games, other, engine)?,
    };
    info!(?summary, "Self-play finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary, engine_as, opponent);
    }

    let losses = summary.wins(engine_as.opponent());
    if losses > 0 {
        anyhow::bail!("engine lost {} of {} games", losses, summary.games());
    }
    Ok(())
}

fn print_summary(summary: &MatchSummary, engine_as: Symbol, opponent: Strategy) {
    println!(
        "{} games, engine as {} vs {}",
        summary.games(),
        engine_as,
        opponent
    );
    println!("  engine wins:   {}", summary.wins(engine_as));
    println!("  opponent wins: {}", summary.wins(engine_as.opponent()));
    println!("  draws:         {}", summary.draws);
}
