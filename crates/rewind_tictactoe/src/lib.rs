//! Rewind Tic-Tac-Toe - pure game logic with a branching move history.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] turns a [`Board`] into an [`Outcome`]
//! - **History**: [`GameHistory`] keeps every snapshot and the one being shown
//! - **Session**: [`GameSession`] adds the move-list order and builds a
//!   [`SessionView`] for presentation
//! - **Contracts**: invariants checked after each move in debug builds
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameSession, Status, Player};
//!
//! let mut session = GameSession::new();
//! session.play_move(0);
//! session.play_move(4);
//! session.jump_to(1).unwrap();
//! session.play_move(8);
//!
//! assert_eq!(session.history().len(), 3);
//! assert_eq!(session.status(), Status::NextPlayer(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod history;
mod invariants;
mod outcome;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::{JumpError, Move, MoveError};
pub use contracts::{Contract, GameNotOver, LegalMove, PlayContract, SquareIsEmpty};
pub use history::{GameHistory, InvalidHistory};
pub use invariants::{
    AlternatingTurnInvariant, CursorInRangeInvariant, HistoryInvariants, Invariant,
    InvariantSet, InvariantViolation, MonotonicHistoryInvariant, StartsEmptyInvariant,
};
pub use outcome::{Outcome, Status};
pub use position::{Coordinates, Position};
pub use rules::{evaluate, Line, LINES};
pub use session::{GameSession, MoveEntry, MoveOrder, SessionView};
pub use types::{Board, Player, Square};
