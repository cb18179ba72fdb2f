//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every move a
//! session applies. They are checked in debug builds and can be tested
//! independently.

use crate::types::{Board, CELL_COUNT, Cell, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A board before and after one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Board before the move.
    pub before: Board,
    /// Board after the move.
    pub after: Board,
}

/// Invariant: X moved first and players alternate, so X has as many marks
/// as O or exactly one more.
pub struct BalancedMarks;

impl Invariant<Board> for BalancedMarks {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::First);
        let o = board.count(Player::Second);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O or one more"
    }
}

/// Invariant: a move fills exactly one empty cell and changes nothing else.
pub struct MonotonicBoard;

impl Invariant<Transition> for MonotonicBoard {
    fn holds(transition: &Transition) -> bool {
        let before = transition.before.cells();
        let after = transition.after.cells();
        let mut filled = 0;
        for index in 0..CELL_COUNT {
            match (before[index], after[index]) {
                (b, a) if b == a => {}
                (Cell::Empty, Cell::Mark(_)) => filled += 1,
                _ => return false,
            }
        }
        filled == 1
    }

    fn description() -> &'static str {
        "A move fills exactly one empty cell and never overwrites a mark"
    }
}

/// Checks every invariant for one applied move.
///
/// Returns all violations, not just the first.
pub fn check_transition(transition: &Transition) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = Vec::new();

    if !BalancedMarks::holds(&transition.after) {
        violations.push(InvariantViolation::new(BalancedMarks::description()));
    }

    if !MonotonicBoard::holds(transition) {
        violations.push(InvariantViolation::new(MonotonicBoard::description()));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
