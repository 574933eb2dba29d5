//! Serializable view of a game for output and inspection.

use super::{COLUMNS, GameController, GameStatus, Move, Player, ROWS};
use serde::{Deserialize, Serialize};

/// Everything a reader needs to redraw a game.
///
/// The board uses the numeric cell codes: 0 empty, 1 player one, 2 player two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Both players, player one first.
    pub players: [Player; 2],
    /// Player to move, or the winner after a win.
    pub active_player: Player,
    /// Current status.
    pub status: GameStatus,
    /// Cell values in row-major order.
    pub board: [[u8; COLUMNS]; ROWS],
    /// Accepted moves in order.
    pub history: Vec<Move>,
}

impl From<&GameController> for GameSnapshot {
    fn from(game: &GameController) -> Self {
        Self {
            players: game.players().clone(),
            active_player: game.get_active_player().clone(),
            status: game.get_game_status(),
            board: game.get_board().map(|row| row.map(|cell| cell.get_value())),
            history: game.history().to_vec(),
        }
    }
}
