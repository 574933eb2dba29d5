//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows on the board.
pub const ROWS: usize = 3;

/// Number of columns on the board.
pub const COLUMNS: usize = 3;

/// A player's symbol on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Player one's mark (value 1, drawn as X).
    One,
    /// Player two's mark (value 2, drawn as O).
    Two,
}

impl Mark {
    /// Returns the numeric code for this mark (1 or 2).
    pub fn value(self) -> u8 {
        match self {
            Mark::One => 1,
            Mark::Two => 2,
        }
    }

    /// Parses a numeric code. `0` is the empty value, not a mark.
    #[instrument]
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Mark::One),
            2 => Some(Mark::Two),
            _ => None,
        }
    }

    /// Returns the symbol used when drawing the mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::One => 'X',
            Mark::Two => 'O',
        }
    }

    /// Returns the other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::One => Mark::Two,
            Mark::Two => Mark::One,
        }
    }
}

/// One square of the grid.
///
/// A cell starts empty and is filled at most once. Cells are never cleared
/// individually; the board is rebuilt on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    mark: Option<Mark>,
}

impl Cell {
    /// Returns the numeric code: 0 for empty, otherwise the mark's value.
    pub fn get_value(&self) -> u8 {
        self.mark.map_or(0, Mark::value)
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(&self) -> Option<Mark> {
        self.mark
    }

    /// Checks if the cell holds no mark.
    pub fn is_empty(&self) -> bool {
        self.mark.is_none()
    }

    pub(super) fn add_mark(&mut self, mark: Mark) {
        self.mark = Some(mark);
    }
}

/// The 3x3 grid of cells in row-major order.
pub type Grid = [[Cell; COLUMNS]; ROWS];

/// A participant: display name plus the mark they place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    /// Creates a new player.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Current status of the game.
///
/// `Win` and `Tie` are terminal until the game is reset.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameStatus {
    /// Moves are accepted.
    #[default]
    Active,
    /// The active player completed a line.
    Win,
    /// The board filled without a line.
    Tie,
}

impl GameStatus {
    /// Returns true once no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}
