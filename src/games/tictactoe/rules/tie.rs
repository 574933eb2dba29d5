//! Tie detection logic for tic-tac-toe.

use super::super::Grid;
use tracing::instrument;

/// Checks if every cell on the board holds a mark.
///
/// Only meaningful after the win check: a full board with a completed line
/// is a win, not a tie.
#[instrument(skip(grid))]
pub fn is_tie(grid: &Grid) -> bool {
    grid.iter().flatten().all(|cell| !cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::super::{Board, Mark};
    use super::super::win::has_won;
    use super::*;

    fn fill(board: &mut Board, rows: [[u8; 3]; 3]) {
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if let Some(mark) = Mark::from_value(value) {
                    board.place_mark(r, c, mark).unwrap();
                }
            }
        }
    }

    #[test]
    fn test_empty_board_not_tie() {
        let board = Board::new();
        assert!(!is_tie(board.get_board()));
    }

    #[test]
    fn test_partial_board_not_tie() {
        let mut board = Board::new();
        fill(&mut board, [[1, 2, 1], [2, 1, 0], [0, 0, 0]]);
        assert!(!is_tie(board.get_board()));
    }

    #[test]
    fn test_full_board_without_line() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        fill(&mut board, [[1, 2, 1], [2, 1, 1], [2, 1, 2]]);

        assert!(is_tie(board.get_board()));
        assert!(!has_won(board.get_board(), Mark::One));
        assert!(!has_won(board.get_board(), Mark::Two));
    }
}
