//! Move selection for the computer opponent.
//!
//! A strategy looks at a board and picks an index for the given player.
//! Randomness is always injected so callers can seed it.

mod random;
pub mod search;

pub use random::RandomStrategy;
pub use search::SearchStrategy;

use crate::error::GameError;
use crate::types::{Board, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A policy for choosing the computer player's move.
pub trait Strategy {
    /// Picks a legal index for `player` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoLegalMoves`] if the board is full.
    fn choose_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        player: Player,
        rng: &mut R,
    ) -> Result<usize, GameError>;
}

/// How strong the computer opponent plays.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random legal moves.
    #[strum(to_string = "random", serialize = "easy")]
    #[serde(alias = "easy")]
    Random,
    /// Exhaustive minimax search.
    #[strum(to_string = "optimal", serialize = "hard")]
    #[serde(alias = "hard")]
    Optimal,
}

impl Strategy for Difficulty {
    fn choose_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        player: Player,
        rng: &mut R,
    ) -> Result<usize, GameError> {
        match self {
            Difficulty::Random => RandomStrategy.choose_move(board, player, rng),
            Difficulty::Optimal => SearchStrategy::default().choose_move(board, player, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_difficulty_parses_aliases() {
        assert_eq!("random".parse::<Difficulty>(), Ok(Difficulty::Random));
        assert_eq!("Easy".parse::<Difficulty>(), Ok(Difficulty::Random));
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Optimal));
        assert_eq!(Difficulty::Optimal.to_string(), "optimal");
        assert!("medium".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_optimal_takes_the_win() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let board: Board = "OO.XX.X..".parse().unwrap();
        assert_eq!(
            Difficulty::Optimal.choose_move(&board, Player::Second, &mut rng),
            Ok(2)
        );
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let board: Board = "XOXOXOOXO".parse().unwrap();
        for difficulty in [Difficulty::Random, Difficulty::Optimal] {
            assert_eq!(
                difficulty.choose_move(&board, Player::First, &mut rng),
                Err(GameError::NoLegalMoves)
            );
        }
    }
}
