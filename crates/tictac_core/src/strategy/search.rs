//! Minimax search with alpha-beta pruning.
//!
//! The searching player maximizes and the opponent minimizes. Wins score
//! `10 - depth` and losses `depth - 10`, so among equal results the search
//! prefers the fastest win and the slowest loss. Draws score zero.
//!
//! The game tree is small enough (at most 9! move orders) that the search
//! always runs to the end of the game; there is no depth limit and no
//! heuristic evaluation.

use super::Strategy;
use crate::error::GameError;
use crate::outcome::{Outcome, evaluate};
use crate::rules::available_moves;
use crate::types::{Board, CELL_COUNT, Player};
use rand::Rng;
use tracing::{debug, error, instrument};

/// Score of a win found immediately after the root move.
const WIN_SCORE: i32 = 10;

/// Index of the center cell.
const CENTER: usize = 4;

/// Indices of the four corners.
const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Chance of opening in the center when the shortcut is enabled.
const CENTER_PROBABILITY: f64 = 0.7;

/// Game-theoretically optimal opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStrategy {
    opening_shortcut: bool,
}

impl SearchStrategy {
    /// Creates a search strategy that plays a random strong opening on an
    /// empty board (center 70% of the time, otherwise a random corner).
    pub fn new() -> Self {
        Self {
            opening_shortcut: true,
        }
    }

    /// Creates a search strategy that searches every position, including
    /// the empty board. Fully deterministic.
    pub fn exhaustive() -> Self {
        Self {
            opening_shortcut: false,
        }
    }

    /// Whether the empty-board opening shortcut is enabled.
    pub fn opening_shortcut(&self) -> bool {
        self.opening_shortcut
    }
}

impl Default for SearchStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for SearchStrategy {
    #[instrument(skip_all, fields(%player, opening_shortcut = self.opening_shortcut))]
    fn choose_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        player: Player,
        rng: &mut R,
    ) -> Result<usize, GameError> {
        let moves = available_moves(board);
        if moves.is_empty() {
            return Err(GameError::NoLegalMoves);
        }

        if self.opening_shortcut && moves.len() == CELL_COUNT {
            let index = if rng.gen_bool(CENTER_PROBABILITY) {
                CENTER
            } else {
                CORNERS[rng.gen_range(0..CORNERS.len())]
            };
            debug!(index, "Opening move chosen");
            return Ok(index);
        }

        let (index, value) = best_move(board, player)?;
        debug!(index, value, "Search move chosen");
        Ok(index)
    }
}

/// Scores every legal move for `player`, in ascending index order.
///
/// Each score is the exact minimax value of the position after the move,
/// searched with a full alpha-beta window.
pub fn score_moves(board: &Board, player: Player) -> Result<Vec<(usize, i32)>, GameError> {
    available_moves(board)
        .into_iter()
        .map(|index| {
            let child = board.with_move(index, player)?;
            let value = minimax_value(&child, player, 0, false, i32::MIN, i32::MAX);
            Ok((index, value))
        })
        .collect()
}

/// Finds the highest-scoring move for `player` and its value.
///
/// Ties go to the lowest index.
///
/// # Errors
///
/// Returns [`GameError::NoLegalMoves`] if the board is full.
pub fn best_move(board: &Board, player: Player) -> Result<(usize, i32), GameError> {
    let mut best: Option<(usize, i32)> = None;
    for (index, value) in score_moves(board, player)? {
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((index, value));
        }
    }
    best.ok_or(GameError::NoLegalMoves)
}

/// Minimax value of `board` from `searcher`'s point of view.
///
/// `maximizing` says whether `searcher` is to move. `depth` counts the
/// moves made since the root move. The window `alpha..beta` is passed by
/// value, so sibling branches never share bounds.
pub fn minimax_value(
    board: &Board,
    searcher: Player,
    depth: i32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    match evaluate(board) {
        Outcome::Won { player, .. } if player == searcher => WIN_SCORE - depth,
        Outcome::Won { .. } => depth - WIN_SCORE,
        Outcome::Draw => 0,
        Outcome::Ongoing if maximizing => {
            let mut best = i32::MIN;
            for index in available_moves(board) {
                let Some(child) = expand(board, index, searcher) else {
                    continue;
                };
                best = best.max(minimax_value(&child, searcher, depth + 1, false, alpha, beta));
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
        Outcome::Ongoing => {
            let mut best = i32::MAX;
            for index in available_moves(board) {
                let Some(child) = expand(board, index, searcher.opponent()) else {
                    continue;
                };
                best = best.min(minimax_value(&child, searcher, depth + 1, true, alpha, beta));
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

/// Child position for a move taken from `available_moves`.
///
/// Such a move always fits on the board; a rejection means the move list and
/// the board disagree.
fn expand(board: &Board, index: usize, player: Player) -> Option<Board> {
    let child = board.with_move(index, player);
    debug_assert!(child.is_ok(), "listed move {index} rejected: {child:?}");
    child
        .inspect_err(|e| error!(index, %player, error = %e, "Listed move rejected"))
        .ok()
}
