//! First-class action types for tic-tac-toe.
//!
//! A move records who placed a mark and where. Accepted moves are kept in
//! order so the game can be inspected or replayed.

use super::board::PlaceError;
use super::{GameStatus, Mark};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A mark placed at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Row of the cell (0-2).
    pub row: usize,
    /// Column of the cell (0-2).
    pub column: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.mark.symbol(), self.row, self.column)
    }
}

/// Why a round was not played.
///
/// A rejected round leaves the game untouched: no mark, no turn switch and
/// no event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already ended.
    #[display("Game is already over ({})", _0)]
    GameOver(GameStatus),

    /// The board refused the mark.
    #[display("{}", _0)]
    Rejected(PlaceError),
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::GameOver(_) => None,
            MoveError::Rejected(e) => Some(e),
        }
    }
}

impl From<PlaceError> for MoveError {
    fn from(err: PlaceError) -> Self {
        MoveError::Rejected(err)
    }
}
