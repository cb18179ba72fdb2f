//! Interactive terminal game.
//!
//! Reads commands from stdin. When the computer is to move, its move is
//! scheduled after the configured delay on a tokio task. The pending move
//! is aborted when the game is reset or the program quits, and it is
//! dropped unapplied if the board changed while it was waiting.

use crate::config::PlayConfig;
use crate::render::Renderer;
use crate::scoreboard::Scoreboard;
use anyhow::{Context, Result};
use std::time::Duration;
use tictac_core::{Board, GameMode, GameSession, Position};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Commands:
  <0-8 or name>  place your mark (e.g. 4, center, top-left)
  hint           ask the computer for a suggestion
  new            start a new game
  mode <name>    switch to two-human, easy or hard (clears the score)
  scores         show the score
  reset-scores   clear the score
  help           show this help
  quit           leave";

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark at this index.
    Move(usize),
    /// Ask for a suggested move.
    Hint,
    /// Start a new game.
    New,
    /// Start a new game in another mode.
    Mode(GameMode),
    /// Show the score.
    Scores,
    /// Clear the score.
    ResetScores,
    /// Show help.
    Help,
    /// Leave.
    Quit,
}

impl Input {
    /// Parses one line; `None` for unrecognized input.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim().to_lowercase();
        if let Some(name) = line.strip_prefix("mode ").or_else(|| line.strip_prefix("menu ")) {
            return name.trim().parse().ok().map(Input::Mode);
        }
        match line.as_str() {
            "" => None,
            "hint" => Some(Input::Hint),
            "new" | "restart" => Some(Input::New),
            "scores" | "score" => Some(Input::Scores),
            "reset-scores" => Some(Input::ResetScores),
            "help" | "?" => Some(Input::Help),
            "quit" | "exit" | "q" => Some(Input::Quit),
            other => Position::from_label_or_number(other).map(|p| Input::Move(p.to_index())),
        }
    }
}

/// A computer move waiting for its delay to pass.
///
/// Dropping it aborts the timer, so the move is never applied.
#[derive(Debug)]
struct PendingMove {
    timer: JoinHandle<()>,
    board: Board,
}

impl PendingMove {
    fn schedule(delay: Duration, board: Board) -> Self {
        debug!(?delay, "Scheduling opponent move");
        Self {
            timer: tokio::spawn(tokio::time::sleep(delay)),
            board,
        }
    }

    /// Waits for the delay; returns the board the move was scheduled for.
    async fn elapsed(&mut self) -> Board {
        if let Err(e) = (&mut self.timer).await {
            warn!(error = %e, "Opponent timer failed");
        }
        self.board
    }
}

impl Drop for PendingMove {
    fn drop(&mut self) {
        self.timer.abort();
    }
}

async fn next_due(pending: &mut Option<PendingMove>) -> Board {
    match pending {
        Some(pending) => pending.elapsed().await,
        None => std::future::pending().await,
    }
}

/// Runs the interactive game loop until `quit` or end of input.
#[instrument(skip_all, fields(mode = %config.mode()))]
pub async fn run(config: PlayConfig) -> Result<()> {
    let mut session = match config.seed() {
        Some(seed) => GameSession::with_seed(*config.mode(), *seed),
        None => GameSession::new(*config.mode()),
    };
    let renderer = Renderer::new(*config.json());
    let delay = Duration::from_millis(*config.opponent_delay_ms());
    let mut scores = Scoreboard::default();
    let mut pending: Option<PendingMove> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!("Starting terminal game");
    println!("{}\n{HELP}\n", session.mode().name());
    show(&renderer, &session)?;

    loop {
        if session.is_opponent_turn() && pending.is_none() {
            pending = Some(PendingMove::schedule(delay, *session.board()));
        }

        tokio::select! {
            scheduled_for = next_due(&mut pending) => {
                pending = None;
                if scheduled_for != *session.board() {
                    debug!("Board changed while opponent was waiting; dropping move");
                    continue;
                }
                match session.play_opponent_turn() {
                    Ok(index) => {
                        println!("Computer plays {}", index);
                        after_move(&renderer, &session, &mut scores)?;
                    }
                    Err(e) => println!("{e}"),
                }
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    debug!("End of input");
                    break;
                };
                match Input::parse(&line) {
                    Some(Input::Quit) => break,
                    Some(Input::Move(index)) => match session.apply_move(index) {
                        Ok(_) => after_move(&renderer, &session, &mut scores)?,
                        Err(e) => println!("{e}"),
                    },
                    Some(Input::Hint) => match session.request_opponent_move() {
                        Ok(index) => println!("Try {}", index),
                        Err(e) => println!("{e}"),
                    },
                    Some(Input::New) => {
                        pending = None;
                        session.reset();
                        show(&renderer, &session)?;
                    }
                    Some(Input::Mode(mode)) => {
                        pending = None;
                        session.restart_with(mode);
                        scores.reset();
                        println!("{}\n{scores}", mode.name());
                        show(&renderer, &session)?;
                    }
                    Some(Input::Scores) => println!("{scores}"),
                    Some(Input::ResetScores) => {
                        scores.reset();
                        println!("{scores}");
                    }
                    Some(Input::Help) => println!("{HELP}"),
                    None => println!("Unrecognized input {:?}; type help", line.trim()),
                }
            }
        }
    }

    drop(pending);
    println!("Final score: {scores}");
    Ok(())
}

fn show(renderer: &Renderer, session: &GameSession) -> Result<()> {
    println!("{}", renderer.render(session).context("Failed to render position")?);
    Ok(())
}

fn after_move(renderer: &Renderer, session: &GameSession, scores: &mut Scoreboard) -> Result<()> {
    show(renderer, session)?;
    if session.outcome().is_terminal() {
        scores.record(session.outcome());
        println!("{scores}\nType new to play again.");
    }
    Ok(())
}
