//! Application state and key handling.

use crate::config::TuiConfig;
use crate::input::{digit_cell, move_cursor, move_selection};
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameSession, Position};
use tracing::{debug, info, instrument, warn};

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor; Enter plays.
    #[default]
    Board,
    /// Arrows move the list selection; Enter jumps.
    Moves,
}

impl Focus {
    /// Toggles between `Board` and `Moves`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    selected: usize,
    show_coordinates: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application from configuration.
    #[instrument(skip(config))]
    pub fn new(config: &TuiConfig) -> Self {
        let mut app = Self {
            session: GameSession::with_move_order(*config.move_order()),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            show_coordinates: *config.show_coordinates(),
            should_quit: false,
        };
        app.sync_selection();
        app
    }

    /// The game session being shown.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether move-list entries show coordinates.
    pub fn show_coordinates(&self) -> bool {
        self.show_coordinates
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(cell) = digit_cell(key) {
            self.play(cell);
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.sync_selection();
            }
            KeyCode::Char('o') => {
                self.session.toggle_move_order();
                self.sync_selection();
            }
            KeyCode::Home => self.jump(0),
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor.to_index()),
                Focus::Moves => self.jump_to_selected(),
            },
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::Moves => {
                    let len = self.session.history().len();
                    self.selected = move_selection(self.selected, len, key);
                }
            },
            _ => debug!(?key, "Unbound key"),
        }
    }

    fn play(&mut self, cell: usize) {
        match self.session.try_play(cell) {
            Ok(mv) => {
                info!(%mv, "Move played");
                if let Some(pos) = Position::from_index(cell) {
                    self.cursor = pos;
                }
            }
            Err(error) => debug!(%error, cell, "Move ignored"),
        }
        self.sync_selection();
    }

    fn jump(&mut self, move_index: usize) {
        if let Err(error) = self.session.jump_to(move_index) {
            warn!(%error, "Jump failed");
        }
        self.sync_selection();
    }

    fn jump_to_selected(&mut self) {
        let entries = self.session.move_entries();
        if let Some(entry) = entries.get(self.selected) {
            self.jump(*entry.move_index());
        }
    }

    /// Points the list selection at the current snapshot's row.
    fn sync_selection(&mut self) {
        self.selected = self
            .session
            .move_entries()
            .iter()
            .position(|entry| *entry.is_current())
            .unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{MoveOrder, Player, Square};

    fn app() -> App {
        App::new(&TuiConfig::default())
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.session().current_board().get(Position::TopCenter),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_digits_play_directly() {
        let mut app = app();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.session().history().len(), 2);
        assert_eq!(app.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_jump_from_move_list() {
        let mut app = app();
        for key in ['1', '5', '9'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(app.selected(), 3);

        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus(), Focus::Moves);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.session().current_move(), 1);
        assert_eq!(app.session().history().len(), 4);
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_toggle_order_keeps_current_selected() {
        let mut app = app();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('2'));
        app.handle_key(KeyCode::Char('o'));

        assert_eq!(app.session().move_order(), MoveOrder::Descending);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_home_jumps_to_start() {
        let mut app = app();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Home);
        assert_eq!(app.session().current_move(), 0);
        assert_eq!(app.session().history().len(), 2);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
