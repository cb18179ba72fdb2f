//! Core domain types for tic-tac-toe.

use crate::error::{GameError, ParseBoardError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    #[serde(rename = "X")]
    First,
    /// Player O (goes second).
    #[display("O")]
    #[serde(rename = "O")]
    Second,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Mark(Player),
}

impl Cell {
    /// Returns the player whose mark is here, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Mark(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// A board is a value: [`Board::with_move`] returns a new board and never
/// touches the one it was called on, so a snapshot held by a caller stays
/// valid for as long as the caller keeps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a board of nine empty cells.
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Creates a board from explicit cell contents.
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Returns a copy of this board with `player` marked at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] if `index` is outside 0-8 or the
    /// cell is already marked.
    pub fn with_move(&self, index: usize, player: Player) -> Result<Self, GameError> {
        match self.cells.get(index) {
            Some(Cell::Empty) => {
                let mut cells = self.cells;
                cells[index] = Cell::Mark(player);
                Ok(Self { cells })
            }
            _ => Err(GameError::InvalidMove { index }),
        }
    }

    /// Returns the cell at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IndexOutOfRange`] if `index` is outside 0-8.
    pub fn cell_at(&self, index: usize) -> Result<Cell, GameError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(GameError::IndexOutOfRange { index })
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Counts the marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.mark() == Some(player))
            .count()
    }

    /// Returns the player whose turn it is, assuming X moved first.
    pub fn next_player(&self) -> Player {
        if self.count(Player::First) > self.count(Player::Second) {
            Player::Second
        } else {
            Player::First
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => write!(f, "{}", pos + 1)?,
                    Cell::Mark(player) => write!(f, "{player}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Parses the compact notation `XO.X.....`: one character per cell,
/// `X` and `O` for marks (either case), `.` or `-` for empty cells.
/// Whitespace and `|` separators are ignored.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if symbols.len() != CELL_COUNT {
            return Err(ParseBoardError::WrongLength(symbols.len()));
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (index, ch) in symbols.into_iter().enumerate() {
            cells[index] = match ch {
                'X' | 'x' => Cell::Mark(Player::First),
                'O' | 'o' => Cell::Mark(Player::Second),
                '.' | '-' => Cell::Empty,
                _ => return Err(ParseBoardError::BadCell { ch, index }),
            };
        }
        Ok(Self { cells })
    }
}
