//! Outcome of a board and the status line derived from it.

use super::rules::Line;
use super::Player;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Winner(Player, Line),
    /// Board is full with no completed line.
    Draw,
    /// At least one empty square and no completed line.
    InProgress,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player, _) => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Winner(_, line) => Some(*line),
            _ => None,
        }
    }

    /// Returns true once no further moves are accepted from this board.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// Game was won.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Game ended in a draw.
    #[display("Draw")]
    Draw,
    /// Game continues with this player to move.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Derives the status from an outcome and the player to move.
    pub fn new(outcome: Outcome, to_move: Player) -> Self {
        match outcome {
            Outcome::Winner(player, _) => Status::Winner(player),
            Outcome::Draw => Status::Draw,
            Outcome::InProgress => Status::NextPlayer(to_move),
        }
    }
}
