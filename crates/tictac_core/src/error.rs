//! Error types for tic-tac-toe operations.
//!
//! Every condition here is local and recoverable. The session reports
//! them to its caller and leaves its state untouched.

/// Why an action was refused by the turn controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IllegalAction {
    /// The game already reached a win or a draw.
    #[display("the game is already over")]
    GameOver,

    /// A human tried to move while the computer opponent is to move.
    #[display("the computer opponent is to move")]
    OpponentToMove,

    /// A computer move was applied while a human is to move.
    #[display("a human player is to move")]
    HumanToMove,

    /// The session has no computer opponent configured.
    #[display("this session has no computer opponent")]
    NoOpponent,
}

/// Error that can occur when querying or changing game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GameError {
    /// The index is outside 0-8 or the cell is already occupied.
    #[display("Invalid move: cell {} is out of range or occupied", index)]
    InvalidMove {
        /// The rejected index.
        index: usize,
    },

    /// The index is outside 0-8.
    #[display("Index {} is outside 0-8", index)]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
    },

    /// The actor may not act right now.
    #[display("Illegal action: {}", _0)]
    IllegalAction(IllegalAction),

    /// A strategy was asked to move on a full board.
    #[display("No legal moves remain")]
    NoLegalMoves,
}

impl std::error::Error for GameError {}

impl From<IllegalAction> for GameError {
    fn from(reason: IllegalAction) -> Self {
        GameError::IllegalAction(reason)
    }
}

/// Error parsing a board from its 9-character notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// The notation did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character other than `X`, `O`, `.` or `-` was found.
    #[display("Unexpected character {:?} at cell {}", ch, index)]
    BadCell {
        /// The offending character.
        ch: char,
        /// Cell index of the character.
        index: usize,
    },
}

impl std::error::Error for ParseBoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_index() {
        let err = GameError::InvalidMove { index: 4 };
        assert_eq!(
            err.to_string(),
            "Invalid move: cell 4 is out of range or occupied"
        );
        assert_eq!(
            GameError::IndexOutOfRange { index: 12 }.to_string(),
            "Index 12 is outside 0-8"
        );
    }

    #[test]
    fn test_illegal_action_converts() {
        let err: GameError = IllegalAction::GameOver.into();
        assert_eq!(err, GameError::IllegalAction(IllegalAction::GameOver));
        assert_eq!(err.to_string(), "Illegal action: the game is already over");
    }
}
