//! Branching move history.
//!
//! The history is a list of board snapshots starting from the empty board,
//! plus a pointer to the snapshot currently shown. Playing from a past
//! snapshot discards every snapshot after it before appending the new one.

use super::action::{JumpError, Move, MoveError};
use super::contracts::{Contract, PlayContract};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::outcome::{Outcome, Status};
use super::{rules, Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Snapshots of every board reached so far and the one being shown.
///
/// Deserialization goes through [`HistoryInvariants`], so a loaded history
/// always starts empty and has its pointer in range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct GameHistory {
    pub(crate) snapshots: Vec<Board>,
    pub(crate) current: usize,
}

/// Unchecked wire form of [`GameHistory`].
#[derive(Deserialize)]
struct RawHistory {
    snapshots: Vec<Board>,
    current: usize,
}

/// A deserialized history that breaks the history invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid history: {}", _0)]
pub struct InvalidHistory(pub String);

impl std::error::Error for InvalidHistory {}

impl TryFrom<RawHistory> for GameHistory {
    type Error = InvalidHistory;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let history = Self {
            snapshots: raw.snapshots,
            current: raw.current,
        };
        HistoryInvariants::check_all(&history).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Rejected deserialized history");
            InvalidHistory(descriptions)
        })?;
        Ok(history)
    }
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// All snapshots, index 0 being the empty board.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Number of snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the empty board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the snapshot being shown.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// The snapshot being shown.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// Player whose turn it is at the current snapshot.
    pub fn to_move(&self) -> Player {
        Player::to_move_at(self.current)
    }

    /// Outcome of the current snapshot.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.current_board())
    }

    /// Status line for the current snapshot.
    pub fn status(&self) -> Status {
        Status::new(self.outcome(), self.to_move())
    }

    /// Plays the cell at `index` (0-8), reporting why a move was rejected.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for an index past 8, and the
    /// [`PlayContract`] precondition errors otherwise. The history is left
    /// untouched on error.
    #[instrument(skip(self), fields(current = self.current, len = self.snapshots.len()))]
    pub fn try_play(&mut self, index: usize) -> Result<Move, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.try_play_at(pos)
    }

    /// Plays at `pos` for the player to move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the current board has an outcome and
    /// [`MoveError::SquareOccupied`] if `pos` is taken.
    #[instrument(skip(self), fields(current = self.current, len = self.snapshots.len()))]
    pub fn try_play_at(&mut self, pos: Position) -> Result<Move, MoveError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        PlayContract::pre(self, &pos)?;

        let player = self.to_move();
        let next = self.current_board().with_mark(pos, player);

        let discarded = self.snapshots.len() - self.current - 1;
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current = self.snapshots.len() - 1;

        #[cfg(debug_assertions)]
        if let Err(error) = PlayContract::post(&before, self) {
            *self = before;
            return Err(error);
        }

        debug!(%player, position = %pos, discarded, current = self.current, "Move played");
        Ok(Move::new(player, pos))
    }

    /// Plays the cell at `index`; an illegal move does nothing.
    #[instrument(skip(self))]
    pub fn play_move(&mut self, index: usize) {
        if let Err(error) = self.try_play(index) {
            debug!(%error, index, "Move ignored");
        }
    }

    /// Shows snapshot `move_index` without altering the history.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if no such snapshot exists; the
    /// pointer is left where it was.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), JumpError> {
        if move_index >= self.snapshots.len() {
            debug!(move_index, "Jump rejected");
            return Err(JumpError::OutOfRange {
                requested: move_index,
                len: self.snapshots.len(),
            });
        }
        self.current = move_index;
        debug!(current = self.current, "Jumped");
        Ok(())
    }

    /// Describes the move that produced snapshot `move_index`.
    ///
    /// Returns `None` for the start snapshot and for indices past the end.
    pub fn describe_move(&self, move_index: usize) -> Option<Move> {
        let previous = self.snapshots.get(move_index.checked_sub(1)?)?;
        let snapshot = self.snapshots.get(move_index)?;
        let position = snapshot.diff(previous).into_iter().next()?;
        Some(Move::new(Player::placed_at(move_index), position))
    }

    /// Every move in the history, including those after the current pointer.
    pub fn moves(&self) -> Vec<Move> {
        (1..self.snapshots.len())
            .filter_map(|k| self.describe_move(k))
            .collect()
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn played(cells: &[usize]) -> GameHistory {
        let mut history = GameHistory::new();
        for &cell in cells {
            history.try_play(cell).expect("legal move");
        }
        history
    }

    #[test]
    fn test_first_move_is_x() {
        let history = played(&[0]);
        assert_eq!(history.len(), 2);
        assert_eq!(history.current_move(), 1);
        assert_eq!(
            history.current_board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
        assert_eq!(history.to_move(), Player::O);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut history = played(&[4]);
        assert_eq!(
            history.try_play(4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut history = GameHistory::new();
        assert_eq!(history.try_play(9), Err(MoveError::OutOfBounds(9)));
        history.play_move(42);
        assert_eq!(history, GameHistory::new());
    }

    #[test]
    fn test_game_over_rejected() {
        let mut history = played(&[0, 3, 1, 4, 2]);
        assert!(matches!(
            history.try_play(5),
            Err(MoveError::GameOver(Outcome::Winner(Player::X, _)))
        ));
    }

    #[test]
    fn test_jump_keeps_snapshots() {
        let mut history = played(&[0, 4, 8]);
        history.jump_to(1).expect("in range");
        assert_eq!(history.len(), 4);
        assert_eq!(history.current_move(), 1);
        assert_eq!(history.to_move(), Player::O);
        history.jump_to(3).expect("in range");
        assert_eq!(history.current_move(), 3);
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut history = played(&[0]);
        assert_eq!(
            history.jump_to(2),
            Err(JumpError::OutOfRange { requested: 2, len: 2 })
        );
        assert_eq!(history.current_move(), 1);
    }

    #[test]
    fn test_play_from_past_truncates() {
        let mut history = played(&[0, 4, 8]);
        history.jump_to(1).expect("in range");
        history.try_play(2).expect("legal move");
        assert_eq!(history.len(), 3);
        assert_eq!(history.current_move(), 2);
        assert_eq!(
            history.current_board().get(Position::TopRight),
            Square::Occupied(Player::O)
        );
        assert!(history.current_board().is_empty(Position::BottomRight));
    }

    #[test]
    #[cfg(debug_assertions)]
    fn test_failed_postcondition_restores_history() {
        let mut history = GameHistory::new();
        history.snapshots[0].set(Position::TopLeft, Square::Occupied(Player::X));
        let corrupted = history.clone();

        let result = history.try_play_at(Position::Center);
        assert!(matches!(result, Err(MoveError::InvariantViolation(_))));
        assert_eq!(history, corrupted);
    }

    #[test]
    fn test_deserialize_accepts_played_history() {
        let history = played(&[0, 4, 8]);
        let json = serde_json::to_string(&history).expect("serializable");
        let loaded: GameHistory = serde_json::from_str(&json).expect("valid history");
        assert_eq!(loaded, history);
    }

    #[test]
    fn test_deserialize_rejects_broken_history() {
        for json in [
            r#"{"snapshots":[],"current":0}"#,
            r#"{"snapshots":[{"squares":["Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty"]}],"current":1}"#,
            r#"{"snapshots":[{"squares":[{"Occupied":"X"},"Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty"]}],"current":0}"#,
        ] {
            let err = serde_json::from_str::<GameHistory>(json).unwrap_err();
            assert!(err.to_string().contains("Invalid history"), "{}", err);
        }
    }

    #[test]
    fn test_describe_move() {
        let history = played(&[2, 6]);
        assert_eq!(history.describe_move(0), None);
        assert_eq!(
            history.describe_move(1),
            Some(Move::new(Player::X, Position::TopRight))
        );
        assert_eq!(
            history.describe_move(2),
            Some(Move::new(Player::O, Position::BottomLeft))
        );
        assert_eq!(history.describe_move(3), None);
        assert_eq!(history.moves().len(), 2);
    }
}
