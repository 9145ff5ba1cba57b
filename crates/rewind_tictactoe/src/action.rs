//! First-class action types for tic-tac-toe.
//!
//! A move is a domain event: the player and the square they claimed. The same
//! type describes moves already in the history.

use super::{Outcome, Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

/// Formats as `(X: 1, 3)`: the player and one-based row, column.
impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}: {})", self.player, self.position.coordinates())
    }
}

/// Why a move was not applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Cell index is not in 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The current board already has an outcome.
    #[display("Game is already over: {:?}", _0)]
    GameOver(Outcome),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Why a history jump was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// Requested snapshot does not exist.
    #[display("Move #{} does not exist (history has {} snapshots)", requested, len)]
    OutOfRange {
        /// Requested snapshot index.
        requested: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

impl std::error::Error for JumpError {}
