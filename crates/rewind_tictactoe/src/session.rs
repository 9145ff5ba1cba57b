//! Game session: the history plus how its move list is presented.
//!
//! A presentation layer owns one [`GameSession`], forwards user input to
//! [`GameSession::play_move`], [`GameSession::jump_to`] and
//! [`GameSession::toggle_move_order`], and re-reads [`GameSession::view`]
//! after each call.

use super::action::{JumpError, Move, MoveError};
use super::history::GameHistory;
use super::outcome::{Outcome, Status};
use super::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Order in which the move list is enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl MoveOrder {
    /// Returns the display label for this order.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Toggles between `Ascending` and `Descending`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Snapshot index this entry jumps to.
    move_index: usize,
    /// Move that produced the snapshot; `None` for the game start.
    #[serde(rename = "move")]
    mv: Option<Move>,
    /// Whether this is the snapshot being shown.
    is_current: bool,
    /// Text shown for the entry.
    label: String,
}

impl MoveEntry {
    fn new(move_index: usize, mv: Option<Move>, is_current: bool) -> Self {
        let label = match (move_index, is_current) {
            (0, _) => "Go to game start".to_string(),
            (k, true) => format!("You are at move #{}", k),
            (k, false) => format!("Go to move #{}", k),
        };
        Self {
            move_index,
            mv,
            is_current,
            label,
        }
    }
}

/// Everything a presentation layer needs to draw the session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionView {
    /// Board at the current snapshot.
    board: Board,
    /// Status line for the current snapshot.
    status: Status,
    /// Indices of the winning line, if the current board is won.
    winning_line: Option<[usize; 3]>,
    /// Index of the current snapshot.
    current_move: usize,
    /// Order of `moves`.
    move_order: MoveOrder,
    /// Move list in `move_order`.
    moves: Vec<MoveEntry>,
}

/// A single game with its history and move-list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    history: GameHistory,
    move_order: MoveOrder,
}

impl GameSession {
    /// Creates a new session at the empty board.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self::default()
    }

    /// Creates a new session listing moves in `move_order`.
    #[instrument]
    pub fn with_move_order(move_order: MoveOrder) -> Self {
        Self {
            history: GameHistory::new(),
            move_order,
        }
    }

    /// The underlying history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Board at the current snapshot.
    pub fn current_board(&self) -> &Board {
        self.history.current_board()
    }

    /// Index of the current snapshot.
    pub fn current_move(&self) -> usize {
        self.history.current_move()
    }

    /// Player to move at the current snapshot.
    pub fn to_move(&self) -> Player {
        self.history.to_move()
    }

    /// Outcome of the current snapshot.
    pub fn outcome(&self) -> Outcome {
        self.history.outcome()
    }

    /// Status line for the current snapshot.
    pub fn status(&self) -> Status {
        self.history.status()
    }

    /// Current move-list order.
    pub fn move_order(&self) -> MoveOrder {
        self.move_order
    }

    /// Plays the cell at `index`; an illegal move does nothing.
    #[instrument(skip(self))]
    pub fn play_move(&mut self, index: usize) {
        self.history.play_move(index);
    }

    /// Plays the cell at `index`, reporting why a move was rejected.
    ///
    /// # Errors
    ///
    /// See [`GameHistory::try_play`].
    #[instrument(skip(self))]
    pub fn try_play(&mut self, index: usize) -> Result<Move, MoveError> {
        self.history.try_play(index)
    }

    /// Shows snapshot `move_index`.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if no such snapshot exists.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), JumpError> {
        self.history.jump_to(move_index)
    }

    /// Describes the move that produced snapshot `move_index`.
    pub fn describe_move(&self, move_index: usize) -> Option<Move> {
        self.history.describe_move(move_index)
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_move_order(&mut self) {
        self.move_order = self.move_order.toggle();
        debug!(order = self.move_order.label(), "Move order toggled");
    }

    /// Move list, one entry per snapshot, in the current order.
    pub fn move_entries(&self) -> Vec<MoveEntry> {
        let current = self.history.current_move();
        let mut entries: Vec<MoveEntry> = (0..self.history.len())
            .map(|k| MoveEntry::new(k, self.history.describe_move(k), k == current))
            .collect();
        if self.move_order == MoveOrder::Descending {
            entries.reverse();
        }
        entries
    }

    /// Snapshot of everything needed to draw the session.
    #[instrument(skip(self))]
    pub fn view(&self) -> SessionView {
        let outcome = self.outcome();
        SessionView {
            board: *self.current_board(),
            status: Status::new(outcome, self.to_move()),
            winning_line: outcome.line().map(|line| line.indices()),
            current_move: self.current_move(),
            move_order: self.move_order,
            moves: self.move_entries(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_toggle_move_order_round_trips() {
        let mut session = GameSession::new();
        assert_eq!(session.move_order(), MoveOrder::Ascending);
        session.toggle_move_order();
        assert_eq!(session.move_order(), MoveOrder::Descending);
        session.toggle_move_order();
        assert_eq!(session.move_order(), MoveOrder::Ascending);
    }

    #[test]
    fn test_entry_labels() {
        let mut session = GameSession::new();
        session.play_move(0);
        session.play_move(1);
        let labels: Vec<_> = session
            .move_entries()
            .iter()
            .map(|e| e.label().clone())
            .collect();
        assert_eq!(
            labels,
            ["Go to game start", "Go to move #1", "You are at move #2"]
        );
    }

    #[test]
    fn test_start_entry_never_reads_as_current() {
        let session = GameSession::new();
        let entries = session.move_entries();
        assert_eq!(entries.len(), 1);
        assert!(*entries[0].is_current());
        assert_eq!(entries[0].label(), "Go to game start");
        assert_eq!(*entries[0].mv(), None);
    }

    #[test]
    fn test_entry_carries_move() {
        let mut session = GameSession::new();
        session.play_move(5);
        let entries = session.move_entries();
        assert_eq!(
            *entries[1].mv(),
            Some(Move::new(Player::X, Position::MiddleRight))
        );
    }
}
