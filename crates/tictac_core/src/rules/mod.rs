//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according
//! to tic-tac-toe rules. Nothing here holds state; every answer is derived
//! from the board it is given.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::is_full;
pub use moves::available_moves;
pub use win::{WIN_LINES, WinLine, find_winner};
