//! Turn controller for a single game.
//!
//! A [`GameSession`] owns the current board, whose turn it is, the current
//! outcome, and which computer opponent (if any) plays O. It is the single
//! entry point a front end uses to drive a game.

use crate::error::{GameError, IllegalAction};
use crate::invariants::{Transition, check_transition};
use crate::outcome::{Outcome, evaluate};
use crate::strategy::{Difficulty, Strategy};
use crate::types::{Board, Player};
use derive_getters::Getters;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// The player who always moves first.
pub const FIRST_TO_MOVE: Player = Player::First;

/// The player the computer controls in modes with an opponent.
pub const OPPONENT: Player = Player::Second;

/// Who is playing against whom.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[strum(to_string = "two-human", serialize = "pvp")]
    #[serde(rename = "two-human", alias = "pvp")]
    TwoHuman,
    /// Human (X) against a random opponent (O).
    #[strum(to_string = "vs-random-opponent", serialize = "random", serialize = "easy")]
    #[serde(rename = "vs-random-opponent", alias = "random", alias = "easy")]
    VsRandom,
    /// Human (X) against a minimax opponent (O).
    #[default]
    #[strum(to_string = "vs-optimal-opponent", serialize = "optimal", serialize = "hard")]
    #[serde(rename = "vs-optimal-opponent", alias = "optimal", alias = "hard")]
    VsOptimal,
}

impl GameMode {
    /// Difficulty of the computer opponent, if this mode has one.
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            GameMode::TwoHuman => None,
            GameMode::VsRandom => Some(Difficulty::Random),
            GameMode::VsOptimal => Some(Difficulty::Optimal),
        }
    }

    /// Display name for menus and score headers.
    pub fn name(self) -> &'static str {
        match self {
            GameMode::TwoHuman => "Two players",
            GameMode::VsRandom => "Versus computer (random)",
            GameMode::VsOptimal => "Versus computer (minimax)",
        }
    }
}

/// Who is attempting an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Actor {
    Human,
    Opponent,
}

/// State of one game and the rules for advancing it.
#[derive(Debug, Clone)]
pub struct GameSession {
    mode: GameMode,
    board: Board,
    to_move: Player,
    outcome: Outcome,
    rng: ChaCha8Rng,
}

impl GameSession {
    /// Starts a session with an entropy-seeded random source.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self::from_rng(mode, ChaCha8Rng::from_entropy())
    }

    /// Starts a session whose computer moves are reproducible.
    #[instrument]
    pub fn with_seed(mode: GameMode, seed: u64) -> Self {
        Self::from_rng(mode, ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(mode: GameMode, rng: ChaCha8Rng) -> Self {
        info!(%mode, "Starting game session");
        Self {
            mode,
            board: Board::empty(),
            to_move: FIRST_TO_MOVE,
            outcome: Outcome::Ongoing,
            rng,
        }
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the game is over this is the player who made the last move.
    pub fn player_to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Difficulty of the computer opponent, if any.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.mode.difficulty()
    }

    /// True while a computer move is due.
    pub fn is_opponent_turn(&self) -> bool {
        !self.outcome.is_terminal() && self.controller_of(self.to_move) == Actor::Opponent
    }

    /// Status line for display.
    pub fn status_message(&self) -> String {
        self.outcome.message(self.to_move)
    }

    /// Read-only view of the session for rendering or serialization.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode,
            board: self.board,
            player_to_move: self.to_move,
            outcome: self.outcome,
            message: self.status_message(),
        }
    }

    /// Places the human player's mark at `index`.
    ///
    /// On error the session is unchanged.
    ///
    /// # Errors
    ///
    /// - [`IllegalAction::GameOver`] if the game already ended.
    /// - [`IllegalAction::OpponentToMove`] if the computer is to move.
    /// - [`GameError::InvalidMove`] if `index` is out of range or occupied.
    #[instrument(skip(self), fields(mode = %self.mode, player = %self.to_move))]
    pub fn apply_move(&mut self, index: usize) -> Result<Outcome, GameError> {
        self.ensure_turn(Actor::Human)?;
        self.place(index)
    }

    /// Places the computer opponent's mark at `index`.
    ///
    /// # Errors
    ///
    /// - [`IllegalAction::GameOver`] if the game already ended.
    /// - [`IllegalAction::NoOpponent`] if the mode has no computer player.
    /// - [`IllegalAction::HumanToMove`] if a human is to move.
    /// - [`GameError::InvalidMove`] if `index` is out of range or occupied.
    #[instrument(skip(self), fields(mode = %self.mode, player = %self.to_move))]
    pub fn apply_opponent_move(&mut self, index: usize) -> Result<Outcome, GameError> {
        self.ensure_turn(Actor::Opponent)?;
        self.place(index)
    }

    /// Asks the configured strategy for a move for the player to move.
    ///
    /// This does not change the board. Called on a human's turn it acts as
    /// a hint.
    ///
    /// # Errors
    ///
    /// - [`IllegalAction::GameOver`] if the game already ended.
    /// - [`IllegalAction::NoOpponent`] if the mode has no computer player.
    /// - [`GameError::NoLegalMoves`] if the board is full.
    #[instrument(skip(self), fields(mode = %self.mode, player = %self.to_move))]
    pub fn request_opponent_move(&mut self) -> Result<usize, GameError> {
        if self.outcome.is_terminal() {
            warn!(outcome = ?self.outcome, "Move requested after game over");
            return Err(IllegalAction::GameOver.into());
        }
        let difficulty = self.difficulty().ok_or(IllegalAction::NoOpponent)?;
        let index = difficulty.choose_move(&self.board, self.to_move, &mut self.rng)?;
        debug!(index, %difficulty, "Opponent move requested");
        Ok(index)
    }

    /// Requests a computer move and applies it. Returns the chosen index.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`Self::apply_opponent_move`], checked
    /// before any search runs.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn play_opponent_turn(&mut self) -> Result<usize, GameError> {
        self.ensure_turn(Actor::Opponent)?;
        let index = self.request_opponent_move()?;
        self.place(index)?;
        Ok(index)
    }

    /// Starts a fresh game with the same mode.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn reset(&mut self) {
        info!("Resetting game session");
        self.board = Board::empty();
        self.to_move = FIRST_TO_MOVE;
        self.outcome = Outcome::Ongoing;
    }

    /// Starts a fresh game in a different mode.
    ///
    /// The random source carries over, so a seeded session stays
    /// reproducible across mode changes.
    #[instrument(skip(self), fields(from = %self.mode))]
    pub fn restart_with(&mut self, mode: GameMode) {
        info!(%mode, "Switching game mode");
        self.mode = mode;
        self.reset();
    }

    fn controller_of(&self, player: Player) -> Actor {
        if self.difficulty().is_some() && player == OPPONENT {
            Actor::Opponent
        } else {
            Actor::Human
        }
    }

    fn ensure_turn(&self, actor: Actor) -> Result<(), GameError> {
        let refusal = if self.outcome.is_terminal() {
            Some(IllegalAction::GameOver)
        } else if actor == Actor::Opponent && self.difficulty().is_none() {
            Some(IllegalAction::NoOpponent)
        } else if self.controller_of(self.to_move) != actor {
            Some(match actor {
                Actor::Human => IllegalAction::OpponentToMove,
                Actor::Opponent => IllegalAction::HumanToMove,
            })
        } else {
            None
        };

        match refusal {
            Some(reason) => {
                warn!(?actor, %reason, outcome = ?self.outcome, "Action refused");
                Err(reason.into())
            }
            None => Ok(()),
        }
    }

    fn place(&mut self, index: usize) -> Result<Outcome, GameError> {
        let player = self.to_move;
        let board = self.board.with_move(index, player).inspect_err(|e| {
            warn!(index, %player, error = %e, "Invalid move");
        })?;

        debug_assert!(
            check_transition(&Transition {
                before: self.board,
                after: board,
            })
            .is_ok(),
            "move broke a board invariant"
        );

        self.board = board;
        self.outcome = evaluate(&board);
        if !self.outcome.is_terminal() {
            self.to_move = player.opponent();
        }

        info!(index, %player, outcome = ?self.outcome, "Move applied");
        Ok(self.outcome)
    }
}

/// Read-only view of a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Game mode.
    mode: GameMode,
    /// Current board.
    board: Board,
    /// Player whose turn it is.
    player_to_move: Player,
    /// Current outcome.
    outcome: Outcome,
    /// Status line.
    message: String,
}
