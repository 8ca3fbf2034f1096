//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe::Position;

/// Moves the cursor one cell in the direction of an arrow key.
///
/// Movement stops at the board edge; other keys leave the cursor alone.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).expect("row and col stay in 0..3")
}
