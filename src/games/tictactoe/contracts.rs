//! Consistency checks run after every accepted move.

use super::Board;
use super::Mark;
use super::action::Move;
use tracing::{instrument, warn};

/// Invariant: mark counts differ by at most one, with player one never behind.
pub struct MarkBalance;

impl MarkBalance {
    #[instrument(skip(board))]
    pub fn holds(board: &Board) -> bool {
        let ones = board.count(Mark::One);
        let twos = board.count(Mark::Two);

        let valid = ones == twos || ones == twos + 1;
        if !valid {
            warn!(ones, twos, "Mark balance violated");
        }
        valid
    }
}

/// Invariant: history length matches filled cells, and every move is on the board.
pub struct HistoryComplete;

impl HistoryComplete {
    #[instrument(skip(board, history))]
    pub fn holds(board: &Board, history: &[Move]) -> bool {
        let filled = board.filled_count();
        let history_len = history.len();

        let valid = filled == history_len
            && history
                .iter()
                .all(|mov| board.get(mov.row, mov.column).and_then(|cell| cell.mark()) == Some(mov.mark));
        if !valid {
            warn!(filled, history_len, "History completeness violated");
        }
        valid
    }
}

/// Asserts that all game invariants hold (panic on violation in debug builds).
pub fn assert_invariants(board: &Board, history: &[Move]) {
    debug_assert!(MarkBalance::holds(board), "Mark balance violated");
    debug_assert!(HistoryComplete::holds(board, history), "History completeness violated");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_board_holds() {
        let mut board = Board::new();
        board.place_mark(0, 0, Mark::One).unwrap();
        assert!(MarkBalance::holds(&board));
        board.place_mark(1, 1, Mark::Two).unwrap();
        assert!(MarkBalance::holds(&board));
    }

    #[test]
    fn test_unbalanced_board_detected() {
        let mut board = Board::new();
        board.place_mark(0, 0, Mark::Two).unwrap();
        assert!(!MarkBalance::holds(&board));
    }

    #[test]
    fn test_history_mismatch_detected() {
        let mut board = Board::new();
        board.place_mark(0, 0, Mark::One).unwrap();

        assert!(HistoryComplete::holds(&board, &[Move::new(Mark::One, 0, 0)]));
        assert!(!HistoryComplete::holds(&board, &[]));
        assert!(!HistoryComplete::holds(&board, &[Move::new(Mark::One, 2, 2)]));
    }
}
