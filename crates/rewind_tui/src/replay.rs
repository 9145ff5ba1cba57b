//! Non-interactive replay of a list of cells.

use crate::ui::entry_text;
use rewind_tictactoe::{GameSession, SessionView};
use tracing::{debug, instrument};

/// Plays `cells` in order from the empty board.
///
/// Illegal cells are skipped exactly as in the interactive game.
#[instrument]
pub fn replay(cells: &[usize]) -> GameSession {
    let mut session = GameSession::new();
    for &cell in cells {
        if let Err(error) = session.try_play(cell) {
            debug!(%error, cell, "Replay skipped cell");
        }
    }
    session
}

/// Renders a view as plain text: board, status, then the move list.
pub fn render_text(view: &SessionView) -> String {
    let mut out = view.board().display();
    out.push_str("\n\n");
    out.push_str(&view.status().to_string());
    out.push_str("\n\nMoves:\n");
    for entry in view.moves() {
        let marker = if *entry.is_current() { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry_text(entry, true)));
    }
    out
}

/// Renders a view as pretty-printed JSON.
pub fn render_json(view: &SessionView) -> serde_json::Result<String> {
    serde_json::to_string_pretty(view)
}
