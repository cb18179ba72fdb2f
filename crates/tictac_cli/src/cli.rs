//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictac_core::GameMode;

/// Tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictac.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// two-human, vs-random-opponent or vs-optimal-opponent
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Pause before the computer moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print each position as JSON instead of a grid
        #[arg(long)]
        json: bool,
    },

    /// Score every legal move on a board
    Analyze {
        /// Nine cells, row by row: X, O, or . for empty (e.g. "X...O....")
        board: String,
    },
}
