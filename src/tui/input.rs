//! Keyboard mapping and cursor movement.

use crate::games::tictactoe::{COLUMNS, ROWS};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Cell currently highlighted on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub column: usize,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the highlight.
    MoveCursor(KeyCode),
    /// Place a mark under the highlight.
    Place,
    /// Place a mark at a numbered cell.
    PlaceAt(Cursor),
    /// Start a new game.
    Reset,
    /// Leave the program.
    Quit,
}

/// Maps a key event to an action. Releases and repeats are ignored.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Place),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(key.code))
        }
        KeyCode::Char(c) => cell_for_digit(c).map(Action::PlaceAt),
        _ => None,
    }
}

/// Numbers cells 1-9 left to right, top to bottom.
pub fn cell_for_digit(c: char) -> Option<Cursor> {
    let digit = c.to_digit(10)? as usize;
    if !(1..=ROWS * COLUMNS).contains(&digit) {
        return None;
    }
    Some(Cursor {
        row: (digit - 1) / COLUMNS,
        column: (digit - 1) % COLUMNS,
    })
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Cursor, key: KeyCode) -> Cursor {
    match key {
        KeyCode::Up => Cursor {
            row: cursor.row.saturating_sub(1),
            ..cursor
        },
        KeyCode::Down => Cursor {
            row: (cursor.row + 1).min(ROWS - 1),
            ..cursor
        },
        KeyCode::Left => Cursor {
            column: cursor.column.saturating_sub(1),
            ..cursor
        },
        KeyCode::Right => Cursor {
            column: (cursor.column + 1).min(COLUMNS - 1),
            ..cursor
        },
        _ => cursor,
    }
}
