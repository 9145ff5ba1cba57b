//! Keyboard mapping for the board cursor and move list.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Moves the board cursor one square in the arrow's direction.
///
/// The cursor stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Right => Position::from_row_col(row, col + 1),
        KeyCode::Left => col.checked_sub(1).and_then(|c| Position::from_row_col(row, c)),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Up => row.checked_sub(1).and_then(|r| Position::from_row_col(r, col)),
        _ => None,
    };

    target.unwrap_or(cursor)
}

/// Maps digit keys `1`-`9` to board indices 0-8.
pub fn digit_cell(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(d @ 1..=9) => Some(d as usize - 1),
            _ => None,
        },
        _ => None,
    }
}

/// Moves a list selection up or down, clamped to `len` rows.
pub fn move_selection(selected: usize, len: usize, key: KeyCode) -> usize {
    match key {
        KeyCode::Up => selected.saturating_sub(1),
        KeyCode::Down if selected + 1 < len => selected + 1,
        _ => selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Down), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_other_keys_leave_cursor() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
    }

    #[test]
    fn test_digit_cell() {
        assert_eq!(digit_cell(KeyCode::Char('1')), Some(0));
        assert_eq!(digit_cell(KeyCode::Char('9')), Some(8));
        assert_eq!(digit_cell(KeyCode::Char('0')), None);
        assert_eq!(digit_cell(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_selection_clamped() {
        assert_eq!(move_selection(0, 3, KeyCode::Up), 0);
        assert_eq!(move_selection(2, 3, KeyCode::Down), 2);
        assert_eq!(move_selection(1, 3, KeyCode::Down), 2);
    }
}
