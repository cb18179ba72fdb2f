//! Tic-tac-toe game logic with computer opponents.
//!
//! # Architecture
//!
//! - **Board**: copy-on-write 3x3 grid ([`Board`], [`Cell`], [`Player`])
//! - **Rules**: win lines, draw detection and legal moves ([`rules`])
//! - **Outcome**: terminal-state classification ([`evaluate`], [`Outcome`])
//! - **Strategies**: random and minimax opponents ([`strategy`])
//! - **Session**: the turn controller a front end drives ([`GameSession`])
//! - **Manager**: one lock per session for concurrent callers ([`SessionManager`])
//!
//! # Example
//!
//! ```
//! use tictac_core::{GameMode, GameSession, Outcome};
//!
//! # fn main() -> Result<(), tictac_core::GameError> {
//! let mut session = GameSession::with_seed(GameMode::VsOptimal, 42);
//! session.apply_move(4)?;
//! let reply = session.play_opponent_turn()?;
//! assert_ne!(reply, 4);
//! assert_eq!(session.outcome(), &Outcome::Ongoing);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod invariants;
mod manager;
mod outcome;
mod position;
pub mod rules;
mod session;
pub mod strategy;
mod types;

pub use error::{GameError, IllegalAction, ParseBoardError};
pub use manager::{SessionError, SessionId, SessionManager};
pub use outcome::{Outcome, evaluate};
pub use position::Position;
pub use rules::{WIN_LINES, WinLine, available_moves};
pub use session::{FIRST_TO_MOVE, GameMode, GameSession, OPPONENT, SessionSnapshot};
pub use strategy::{Difficulty, RandomStrategy, SearchStrategy, Strategy};
pub use types::{Board, CELL_COUNT, Cell, Player};
