//! Contract-based validation for history transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P(state, action)} action {Q(before, after)}`.

use super::action::MoveError;
use super::history::GameHistory;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Play Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The current board must not have an outcome yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves on a won or drawn board.
    #[instrument(skip(history))]
    pub fn check(history: &GameHistory) -> Result<(), MoveError> {
        let outcome = history.outcome();
        if outcome.is_terminal() {
            Err(MoveError::GameOver(outcome))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto a claimed square.
    #[instrument(skip(history))]
    pub fn check(pos: Position, history: &GameHistory) -> Result<(), MoveError> {
        if history.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: the game is open and the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(history))]
    pub fn check(pos: Position, history: &GameHistory) -> Result<(), MoveError> {
        GameNotOver::check(history)?;
        SquareIsEmpty::check(pos, history)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for playing a square.
///
/// Preconditions:
/// - Current board has no outcome
/// - Square must be empty
///
/// Postconditions:
/// - Snapshot 0 is still the empty board
/// - Each snapshot adds exactly one mark
/// - Marks alternate X, O, X, ...
/// - Pointer is on the new last snapshot
pub struct PlayContract;

impl Contract<GameHistory, Position> for PlayContract {
    fn pre(history: &GameHistory, pos: &Position) -> Result<(), MoveError> {
        LegalMove::check(*pos, history)
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), MoveError> {
        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "History invariants violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        if after.current != after.snapshots.len() - 1 || after.current != before.current + 1 {
            warn!(
                before = before.current,
                after = after.current,
                "Pointer not advanced to new tail"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: pointer must sit on the new last snapshot".to_string(),
            ));
        }

        if after.snapshots[..after.current] != before.snapshots[..=before.current] {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: snapshots up to the pointer must be kept".to_string(),
            ));
        }

        Ok(())
    }
}
