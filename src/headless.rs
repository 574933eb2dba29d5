//! Plays a scripted list of moves without a terminal UI.

use crate::games::tictactoe::{GameController, GameSnapshot, GameStatus};
use std::io::{self, Write};
use tracing::{info, instrument, warn};

/// How the final game is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Numeric board dump followed by event and status lines.
    #[default]
    Text,
    /// A pretty-printed [`GameSnapshot`].
    Json,
}

/// Plays `moves` in order and writes the outcome to `out`.
///
/// Rejected moves are reported and skipped; they do not stop the run. In
/// text mode every event the game emits is written as it happens.
#[instrument(skip(game, out))]
pub fn run_moves<W: Write>(
    game: &mut GameController,
    moves: &[(usize, usize)],
    format: OutputFormat,
    out: &mut W,
) -> io::Result<GameStatus> {
    let text = format == OutputFormat::Text;

    for &(row, column) in moves {
        if let Err(e) = game.play_round(row, column) {
            warn!(row, column, error = %e, "Skipping move");
            if text {
                writeln!(out, "Skipped ({}, {}): {}", row, column, e)?;
            }
        }
        for event in game.drain_events() {
            if text {
                writeln!(out, "{}", event)?;
            }
        }
    }

    let status = game.get_game_status();
    info!(%status, moves = game.history().len(), "Scripted game finished");

    match format {
        OutputFormat::Text => {
            game.board().print_board(out)?;
            writeln!(out, "Status: {}", status)?;
        }
        OutputFormat::Json => {
            let snapshot = GameSnapshot::from(&*game);
            serde_json::to_writer_pretty(&mut *out, &snapshot)?;
            writeln!(out)?;
        }
    }

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_output() {
        let mut game = GameController::new(Some("Alice"), Some("Bob"));
        game.drain_events();

        let mut out = Vec::new();
        let status = run_moves(&mut game, &[(0, 0), (0, 0), (1, 1)], OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(status, GameStatus::Active);
        assert!(text.contains("Skipped (0, 0): Cell (0, 0) is already occupied"));
        assert!(text.contains("Placing Bob's mark into row 1, column 1"));
        assert!(text.ends_with("1 0 0\n0 2 0\n0 0 0\nStatus: active\n"));
    }

    #[test]
    fn test_json_output() {
        let mut game = GameController::new(Some("Alice"), Some("Bob"));
        let moves = [(0, 0), (0, 1), (1, 1), (1, 0), (2, 2)];

        let mut out = Vec::new();
        let status = run_moves(&mut game, &moves, OutputFormat::Json, &mut out).unwrap();
        assert_eq!(status, GameStatus::Win);

        let snapshot: GameSnapshot = serde_json::from_slice(&out).unwrap();
        assert_eq!(snapshot.status, GameStatus::Win);
        assert_eq!(snapshot.active_player.name(), "Alice");
        assert_eq!(snapshot.history.len(), 5);
    }
}
