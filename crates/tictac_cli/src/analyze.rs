//! `tictac analyze`: score every legal move on a board.

use anyhow::{Context, Result, bail};
use tictac_core::invariants::{BalancedMarks, Invariant};
use tictac_core::strategy::search::{best_move, score_moves};
use tictac_core::{Board, Player, Position, evaluate};
use tracing::instrument;

/// Search results for one board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Player to move.
    pub player: Player,
    /// Minimax value of each legal move, in index order.
    pub scores: Vec<(usize, i32)>,
    /// The move the engine would play.
    pub best: usize,
}

/// Analyzes a board for the player whose turn it is.
#[instrument(skip(board))]
pub fn analyze(board: &Board) -> Result<Analysis> {
    if !BalancedMarks::holds(board) {
        bail!("Board cannot arise in play: {}", BalancedMarks::description());
    }
    let outcome = evaluate(board);
    if outcome.is_terminal() {
        bail!("Game is already over: {}", outcome.message(board.next_player()));
    }
    let player = board.next_player();
    let scores = score_moves(board, player)?;
    let (best, _) = best_move(board, player)?;
    Ok(Analysis {
        player,
        scores,
        best,
    })
}

/// Parses `notation`, analyzes it and prints the report.
pub fn run(notation: &str) -> Result<()> {
    let board: Board = notation
        .parse()
        .with_context(|| format!("Invalid board {:?}", notation))?;
    let analysis = analyze(&board)?;
    println!("{board}\n");
    print!("{analysis}");
    Ok(())
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Player {} to move", self.player)?;
        for (index, value) in &self.scores {
            let label = Position::from_index(*index).map_or("?", |p| p.label());
            let verdict = match value {
                v if *v > 0 => "wins",
                v if *v < 0 => "loses",
                _ => "draws",
            };
            let marker = if *index == self.best { " <- best" } else { "" };
            writeln!(f, "  {index} {label:<13} {value:>3}  {verdict}{marker}")?;
        }
        Ok(())
    }
}
