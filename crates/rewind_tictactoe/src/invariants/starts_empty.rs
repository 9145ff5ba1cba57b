//! Starts-empty invariant: the first snapshot is the empty board.

use super::super::{Board, GameHistory};
use super::Invariant;

/// Invariant: snapshot 0 exists and every square on it is Empty.
pub struct StartsEmptyInvariant;

impl Invariant<GameHistory> for StartsEmptyInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts from the empty board"
    }
}
