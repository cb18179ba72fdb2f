//! Legal move enumeration.

use crate::types::{Board, Cell};

/// Indices of the empty cells, in ascending order.
///
/// Returns an empty vector when the board is full.
pub fn available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Cell::Empty)
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_every_index() {
        assert_eq!(available_moves(&Board::empty()), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_occupied_cells_skipped() {
        let board: Board = "X...O...X".parse().unwrap();
        assert_eq!(available_moves(&board), vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_full_board_has_none() {
        let board: Board = "XOXOXOOXO".parse().unwrap();
        assert!(available_moves(&board).is_empty());
    }
}
