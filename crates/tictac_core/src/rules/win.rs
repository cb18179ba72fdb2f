//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Three cell indices that win the game when held by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([usize; 3]);

impl WinLine {
    /// The three indices, in ascending order.
    pub fn indices(&self) -> [usize; 3] {
        self.0
    }

    /// Checks whether `index` is part of this line.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// All winning lines. Table order is the tie-break if a board ever
/// completes more than one line.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    // Columns
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    // Diagonals
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

/// Finds the first completed line on the board.
///
/// Returns the owner of the line and the line itself, or `None` if no
/// line is held by a single player.
pub fn find_winner(board: &Board) -> Option<(Player, WinLine)> {
    let cells = board.cells();
    WIN_LINES.iter().find_map(|line| {
        let [a, b, c] = line.indices();
        let player = cells[a].mark()?;
        (cells[b] == cells[a] && cells[c] == cells[a]).then_some((player, *line))
    })
}
