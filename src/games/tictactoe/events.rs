//! Notifications emitted by the game controller.
//!
//! The controller queues events as it runs; the presentation layer drains
//! and renders them. Each event displays as the line a front end shows.

use super::{Grid, Player};
use serde::{Deserialize, Serialize};

/// Something the presentation layer may want to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameEvent {
    /// A new turn begins (also emitted at start and after reset).
    #[display("{}'s turn", active_player)]
    NewRound {
        /// Board at the start of the turn.
        board: Grid,
        /// Player to move.
        active_player: Player,
    },

    /// A mark was accepted.
    #[display("Placing {}'s mark into row {}, column {}", player, row, column)]
    MarkPlaced {
        /// Player who moved.
        player: Player,
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        column: usize,
    },

    /// The last move completed a line.
    #[display("Congratulations! {} is the winner!", player)]
    Winner {
        /// The winning player.
        player: Player,
    },

    /// The board filled with no line.
    #[display("Game End! It's a tie!")]
    Tie,
}

impl GameEvent {
    /// Returns true for the events that end a game.
    pub fn is_game_over(&self) -> bool {
        matches!(self, GameEvent::Winner { .. } | GameEvent::Tie)
    }
}
