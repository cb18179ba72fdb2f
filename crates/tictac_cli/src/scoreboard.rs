//! Running score across games.

use derive_getters::Getters;
use tictac_core::{Outcome, Player};

/// Tally of finished games, keyed off the structured outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Scoreboard {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Scoreboard {
    /// Counts a finished game. Ongoing outcomes are ignored.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Won {
                player: Player::First,
                ..
            } => self.x_wins += 1,
            Outcome::Won {
                player: Player::Second,
                ..
            } => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
    }

    /// Clears every tally.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X: {}  O: {}  Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_core::{Board, evaluate};

    #[test]
    fn test_records_by_outcome() {
        let mut scores = Scoreboard::default();
        scores.record(&evaluate(&"XXXOO....".parse::<Board>().unwrap()));
        scores.record(&evaluate(&"OOOXX.X..".parse::<Board>().unwrap()));
        scores.record(&evaluate(&"XOXOXOOXO".parse::<Board>().unwrap()));
        scores.record(&Outcome::Ongoing);

        assert_eq!(*scores.x_wins(), 1);
        assert_eq!(*scores.o_wins(), 1);
        assert_eq!(*scores.draws(), 1);
        assert_eq!(scores.to_string(), "X: 1  O: 1  Draws: 1");
    }

    #[test]
    fn test_reset() {
        let mut scores = Scoreboard::default();
        scores.record(&Outcome::Draw);
        scores.reset();
        assert_eq!(scores, Scoreboard::default());
    }
}
