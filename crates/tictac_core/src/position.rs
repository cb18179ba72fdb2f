//! Named board positions.
//!
//! The engine addresses cells by index. Positions give the same nine
//! cells readable names so a front end can accept "center" as well as "4".

use crate::rules::available_moves;
use crate::types::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// Label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parses a board index (0-8) or a label.
    ///
    /// Labels match case-insensitively and ignore the hyphen, so
    /// `"top left"`, `"Top-left"` and `"topleft"` all name [`Position::TopLeft`].
    /// A word that is part of exactly one label (`"center"`) also matches.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        let wanted = normalize(s);
        if wanted.is_empty() {
            return None;
        }
        if let Some(exact) = Self::iter().find(|pos| normalize(pos.label()) == wanted) {
            return Some(exact);
        }

        let mut partial = Self::iter().filter(|pos| normalize(pos.label()).contains(&wanted));
        match (partial.next(), partial.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Positions whose cells are still empty, in ascending index order.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        available_moves(board)
            .into_iter()
            .filter_map(Self::from_index)
            .collect()
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_index_round_trip() {
        for (index, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_parse_numbers_and_labels() {
        assert_eq!(Position::from_label_or_number("4"), Some(Position::Center));
        assert_eq!(Position::from_label_or_number(" 0 "), Some(Position::TopLeft));
        assert_eq!(Position::from_label_or_number("9"), None);
        assert_eq!(
            Position::from_label_or_number("top left"),
            Some(Position::TopLeft)
        );
        assert_eq!(
            Position::from_label_or_number("Bottom-Right"),
            Some(Position::BottomRight)
        );
        assert_eq!(Position::from_label_or_number("center"), Some(Position::Center));
    }

    #[test]
    fn test_ambiguous_label_rejected() {
        // "top" is part of three labels.
        assert_eq!(Position::from_label_or_number("top"), None);
        assert_eq!(Position::from_label_or_number(""), None);
        assert_eq!(Position::from_label_or_number("nowhere"), None);
    }

    #[test]
    fn test_valid_moves_filters_occupied() {
        let board = Board::empty()
            .with_move(0, Player::First)
            .and_then(|b| b.with_move(4, Player::Second))
            .unwrap();

        let valid = Position::valid_moves(&board);
        assert_eq!(valid.len(), 7);
        assert!(!valid.contains(&Position::TopLeft));
        assert!(!valid.contains(&Position::Center));
        assert!(valid.contains(&Position::BottomRight));
    }
}
