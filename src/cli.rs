//! Command-line interface for unbeatable.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unbeatable_tictactoe::{Board, Strategy, Symbol};

/// Unbeatable - tic-tac-toe against a perfect minimax opponent
#[derive(Parser, Debug)]
#[command(name = "unbeatable")]
#[command(about = "Play tic-tac-toe against an opponent that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "unbeatable.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal with the mouse or keyboard
    Play {
        /// AI thinking delay in milliseconds (overrides config)
        #[arg(long)]
        think_ms: Option<u64>,

        /// Symbol you play, X or O (overrides config)
        #[arg(long)]
        human: Option<Symbol>,
    },

    /// Print the engine's move for a position
    BestMove {
        /// Nine cells in row-major order, e.g. "XX./O../..."
        #[arg(short, long)]
        board: Board,

        /// Symbol the engine plays (defaults to the side to move)
        #[arg(long)]
        ai: Option<Symbol>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run headless games between the engine and another strategy
    SelfPlay {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Opponent strategy: engine, random or first
        #[arg(short, long, default_value = "random")]
        opponent: Strategy,

        /// Symbol the engine plays
        #[arg(long, default_value = "X")]
        engine_as: Symbol,

        /// Base seed for random opponents
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}
