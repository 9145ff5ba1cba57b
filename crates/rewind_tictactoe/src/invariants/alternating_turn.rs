//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameHistory, Player};
use super::Invariant;

/// Invariant: the mark added into snapshot k belongs to X for odd k and to O
/// for even k.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let k = i + 1;
                pair[1]
                    .diff(&pair[0])
                    .iter()
                    .all(|pos| pair[1].get(*pos).player() == Some(Player::placed_at(k)))
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
