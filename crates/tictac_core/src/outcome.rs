//! Terminal-state classification.

use crate::rules::{WinLine, find_winner, is_full};
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Status of a board: still being played, won, or drawn.
///
/// An outcome is always derived fresh from a board by [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    /// At least one cell is empty and nobody has a line.
    Ongoing,
    /// A player completed a line.
    Won {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: WinLine,
    },
    /// Every cell is marked and nobody has a line.
    Draw,
}

impl Outcome {
    /// True unless the game is still ongoing.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<WinLine> {
        match self {
            Outcome::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Human-readable status, given the player whose turn it is.
    pub fn message(&self, to_move: Player) -> String {
        match self {
            Outcome::Ongoing => format!("Player {to_move}'s turn"),
            Outcome::Won { player, .. } => format!("Player {player} wins!"),
            Outcome::Draw => "It's a draw!".to_string(),
        }
    }
}

/// Classifies a board.
///
/// A completed line wins, checked in [`WIN_LINES`](crate::rules::WIN_LINES)
/// order; otherwise a full board is a draw; otherwise play goes on.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = find_winner(board) {
        Outcome::Won { player, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_ongoing() {
        let outcome = evaluate(&Board::empty());
        assert_eq!(outcome, Outcome::Ongoing);
        assert!(!outcome.is_terminal());
        assert_eq!(outcome.winner(), None);
    }

    #[test]
    fn test_win_reports_line() {
        let board: Board = "XXXOO....".parse().unwrap();
        let outcome = evaluate(&board);
        assert!(outcome.is_terminal());
        assert_eq!(outcome.winner(), Some(Player::First));
        assert_eq!(outcome.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let board: Board = "XOXOXOXOX".parse().unwrap();
        assert_eq!(evaluate(&board).winner(), Some(Player::First));
    }

    #[test]
    fn test_messages() {
        assert_eq!(Outcome::Ongoing.message(Player::Second), "Player O's turn");
        assert_eq!(Outcome::Draw.message(Player::First), "It's a draw!");
        let board: Board = "OOO.XX.X.".parse().unwrap();
        assert_eq!(evaluate(&board).message(Player::First), "Player O wins!");
    }
}
