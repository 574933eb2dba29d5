//! Tictactoe library - two-player tic-tac-toe
//!
//! The game core tracks the board, alternates turns and detects wins and
//! ties. Front ends drive it through [`GameControls`] and render the
//! [`GameEvent`]s it emits.
//!
//! # Architecture
//!
//! - **Games**: board, rules and the turn controller
//! - **TUI**: terminal front end (ratatui + crossterm)
//! - **Headless**: scripted runs for automation and tests
//! - **Config**: TOML settings for player names and logging
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameController, GameStatus};
//!
//! let mut game = GameController::new(Some("Alice"), Some("Bob"));
//! for (row, column) in [(0, 0), (0, 1), (1, 1), (1, 0), (2, 2)] {
//!     let _ = game.play_round(row, column);
//! }
//! assert_eq!(game.get_game_status(), GameStatus::Win);
//! assert_eq!(game.get_active_player().name(), "Alice");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod headless;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};

// Crate-level exports - Headless runner
pub use headless::{OutputFormat, run_moves};

// Crate-level exports - Terminal UI
pub use tui::{Action, App, Cursor, action_for, cell_for_digit, draw, move_cursor, run_tui};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, COLUMNS, Cell, DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, GameControls, GameController,
    GameEvent, GameSnapshot, GameStatus, Grid, Mark, Move, MoveError, PlaceError, Player, ROWS,
    WinningLine, has_won, is_tie, mark_mask, winning_line,
};
