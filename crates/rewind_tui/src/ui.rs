//! Stateless UI rendering.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{MoveEntry, Player, Position, SessionView, Square, Status};

/// Text of one move-list row, e.g. `Go to move #2 (O: 1, 2)`.
pub fn entry_text(entry: &MoveEntry, show_coordinates: bool) -> String {
    match entry.mv() {
        Some(mv) if show_coordinates => format!("{} {}", entry.label(), mv),
        _ => entry.label().clone(),
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.session().view();
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(13),   // Board and moves
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Rewind Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(31), Constraint::Min(24)])
        .split(rows[1]);

    draw_game(frame, panes[0], app, &view);
    draw_moves(frame, panes[1], app, &view);

    let help = Paragraph::new(
        "arrows: move  enter: play/jump  1-9: play  tab: focus  o: order  home: start  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, rows[2]);
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App, view: &SessionView) {
    let block = pane_block("Board", app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status
            Constraint::Length(1),
            Constraint::Length(5), // Grid
            Constraint::Min(0),
        ])
        .split(inner);

    let status_style = match view.status() {
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(view.status().to_string())
        .style(status_style)
        .alignment(Alignment::Center);
    frame.render_widget(status, rows[0]);

    let show_cursor = app.focus() == Focus::Board;
    let mut lines = Vec::with_capacity(5);
    for row in 0..3 {
        if row > 0 {
            lines.push(Line::from(Span::styled(
                "───┼───┼───",
                Style::default().fg(Color::DarkGray),
            )));
        }
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            if let Some(pos) = Position::from_row_col(row, col) {
                let cursor = show_cursor && pos == app.cursor();
                spans.push(cell_span(view, pos, cursor));
            }
        }
        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(grid, rows[2]);
}

fn cell_span(view: &SessionView, pos: Position, cursor: bool) -> Span<'static> {
    let (symbol, mut style) = match view.board().get(pos) {
        Square::Empty => (" · ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Square::Occupied(Player::O) => (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let winning = view
        .winning_line()
        .is_some_and(|line| line.contains(&pos.to_index()));
    if winning {
        style = style.bg(Color::LightGreen).fg(Color::Black);
    }
    if cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    Span::styled(symbol, style)
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App, view: &SessionView) {
    let title = format!("Moves ({})", view.move_order().label());
    let block = pane_block(&title, app.focus() == Focus::Moves);

    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|entry| {
            let style = if *entry.is_current() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(entry_text(entry, app.show_coordinates()), style))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if app.focus() == Focus::Moves {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::GameSession;

    #[test]
    fn test_entry_text() {
        let mut session = GameSession::new();
        session.play_move(1);
        session.play_move(3);
        let entries = session.move_entries();

        assert_eq!(entry_text(&entries[0], true), "Go to game start");
        assert_eq!(entry_text(&entries[1], true), "Go to move #1 (X: 1, 2)");
        assert_eq!(entry_text(&entries[2], true), "You are at move #2 (O: 2, 1)");
        assert_eq!(entry_text(&entries[2], false), "You are at move #2");
    }
}
