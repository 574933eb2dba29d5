mod action;
mod board;
mod contracts;
mod controller;
mod events;
mod rules;
mod snapshot;
mod types;

pub use action::{Move, MoveError};
pub use board::{Board, PlaceError};
pub use controller::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, GameController, GameControls};
pub use events::GameEvent;
pub use rules::{WinningLine, has_won, is_tie, mark_mask, winning_line};
pub use snapshot::GameSnapshot;
pub use types::{COLUMNS, Cell, GameStatus, Grid, Mark, Player, ROWS};
