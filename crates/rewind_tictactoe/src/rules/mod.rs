//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Nothing here knows about
//! history or whose turn it is.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, Line, LINES};

use super::{Board, Outcome};
use tracing::instrument;

/// Evaluates a board snapshot.
///
/// A win takes priority over a full board, so a ninth move that completes a
/// line is a win rather than a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = check_winner(board) {
        Outcome::Winner(player, line)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
