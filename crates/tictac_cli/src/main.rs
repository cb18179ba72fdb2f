//! tictac - tic-tac-toe in the terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyze;
mod cli;
mod config;
mod play;
mod render;
mod scoreboard;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::PlayConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            mode,
            delay_ms,
            seed,
            json,
        } => {
            let config =
                PlayConfig::load(cli.config.as_deref())?.with_overrides(mode, delay_ms, seed, json);
            play::run(config).await
        }
        Command::Analyze { board } => analyze::run(&board),
    }
}
