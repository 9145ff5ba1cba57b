//! Cursor invariant: the current pointer names an existing snapshot.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: `current_move < len`.
pub struct CursorInRangeInvariant;

impl Invariant<GameHistory> for CursorInRangeInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.current_move() < history.len()
    }

    fn description() -> &'static str {
        "Current move points at an existing snapshot"
    }
}
