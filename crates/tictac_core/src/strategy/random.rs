//! Uniformly random opponent.

use super::Strategy;
use crate::error::GameError;
use crate::rules::available_moves;
use crate::types::{Board, Player};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks any legal move, each with equal probability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    #[instrument(skip_all, fields(%player))]
    fn choose_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        player: Player,
        rng: &mut R,
    ) -> Result<usize, GameError> {
        let index = *available_moves(board)
            .choose(rng)
            .ok_or(GameError::NoLegalMoves)?;
        debug!(index, "Random move chosen");
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_only_legal_moves() {
        let board: Board = "X.O.X.O..".parse().unwrap();
        let legal = available_moves(&board);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..200 {
            let index = RandomStrategy
                .choose_move(&board, Player::Second, &mut rng)
                .unwrap();
            assert!(legal.contains(&index));
        }
    }

    #[test]
    fn test_every_legal_move_reachable() {
        let board: Board = "X...O....".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let seen: HashSet<usize> = (0..500)
            .map(|_| {
                RandomStrategy
                    .choose_move(&board, Player::First, &mut rng)
                    .unwrap()
            })
            .collect();
        let legal: HashSet<usize> = available_moves(&board).into_iter().collect();
        assert_eq!(seen, legal);
    }

    #[test]
    fn test_full_board_fails() {
        let board: Board = "XOXOXOOXO".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(
            RandomStrategy.choose_move(&board, Player::First, &mut rng),
            Err(GameError::NoLegalMoves)
        );
    }
}
