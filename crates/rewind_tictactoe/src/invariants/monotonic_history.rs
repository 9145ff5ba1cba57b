//! Monotonic history invariant: each snapshot adds exactly one mark.

use super::super::{GameHistory, Square};
use super::Invariant;

/// Invariant: squares are never overwritten.
///
/// Every snapshot after the first differs from its predecessor in exactly one
/// square, which goes from Empty to Occupied.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameHistory> for MonotonicHistoryInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots().windows(2).all(|pair| {
            let changed = pair[1].diff(&pair[0]);
            changed.len() == 1
                && pair[0].get(changed[0]) == Square::Empty
                && pair[1].get(changed[0]) != Square::Empty
        })
    }

    fn description() -> &'static str {
        "Each move adds one mark and squares are never overwritten"
    }
}
