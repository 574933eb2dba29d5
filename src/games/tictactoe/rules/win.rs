//! Win detection logic for tic-tac-toe.

use super::super::{COLUMNS, Grid, Mark, ROWS};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A line of three cells that decides the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinningLine {
    /// A full row (0-2).
    Row(usize),
    /// A full column (0-2).
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl WinningLine {
    /// Returns the (row, column) coordinates on this line.
    pub fn cells(self) -> [(usize, usize); 3] {
        match self {
            WinningLine::Row(r) => [(r, 0), (r, 1), (r, 2)],
            WinningLine::Column(c) => [(0, c), (1, c), (2, c)],
            WinningLine::Diagonal => [(0, 0), (1, 1), (2, 2)],
            WinningLine::AntiDiagonal => [(0, 2), (1, 1), (2, 0)],
        }
    }

    /// Checks if (`row`, `column`) lies on this line.
    pub fn contains(self, row: usize, column: usize) -> bool {
        self.cells().contains(&(row, column))
    }
}

/// Builds a mask marking every cell that holds `mark`.
///
/// Empty cells are always `false`, so an empty line never wins.
pub fn mark_mask(grid: &Grid, mark: Mark) -> [[bool; COLUMNS]; ROWS] {
    grid.map(|row| row.map(|cell| cell.mark() == Some(mark)))
}

/// Finds the first line fully held by `mark`.
///
/// Rows are checked first, then columns, then the two diagonals.
#[instrument(skip(grid))]
pub fn winning_line(grid: &Grid, mark: Mark) -> Option<WinningLine> {
    let mask = mark_mask(grid, mark);

    if let Some(r) = (0..ROWS).find(|&r| mask[r].iter().all(|&hit| hit)) {
        return Some(WinningLine::Row(r));
    }

    if let Some(c) = (0..COLUMNS).find(|&c| (0..ROWS).all(|r| mask[r][c])) {
        return Some(WinningLine::Column(c));
    }

    if (0..ROWS).all(|i| mask[i][i]) {
        return Some(WinningLine::Diagonal);
    }

    if (0..ROWS).all(|i| mask[i][COLUMNS - 1 - i]) {
        return Some(WinningLine::AntiDiagonal);
    }

    None
}

/// Checks if `mark` holds a full row, column or diagonal.
pub fn has_won(grid: &Grid, mark: Mark) -> bool {
    winning_line(grid, mark).is_some()
}

#[cfg(test)]
mod tests {
    use super::super::super::Board;
    use super::*;

    fn board_with(mark: Mark, cells: &[(usize, usize)]) -> Board {
        let mut board = Board::new();
        for &(r, c) in cells {
            board.place_mark(r, c, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_won(board.get_board(), Mark::One));
        assert!(!has_won(board.get_board(), Mark::Two));
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(Mark::One, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(winning_line(board.get_board(), Mark::One), Some(WinningLine::Row(0)));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(Mark::Two, &[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(winning_line(board.get_board(), Mark::Two), Some(WinningLine::Column(0)));
    }

    #[test]
    fn test_winner_diagonals() {
        let board = board_with(Mark::Two, &[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(winning_line(board.get_board(), Mark::Two), Some(WinningLine::Diagonal));

        let board = board_with(Mark::One, &[(0, 2), (1, 1), (2, 0)]);
        assert_eq!(
            winning_line(board.get_board(), Mark::One),
            Some(WinningLine::AntiDiagonal)
        );
    }

    #[test]
    fn test_line_of_other_mark_ignored() {
        let board = board_with(Mark::Two, &[(1, 0), (1, 1), (1, 2)]);
        assert!(!has_won(board.get_board(), Mark::One));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Mark::One, &[(0, 0), (0, 1), (1, 1)]);
        assert!(!has_won(board.get_board(), Mark::One));
    }

    #[test]
    fn test_mixed_line_not_a_win() {
        let mut board = Board::new();
        board.place_mark(2, 0, Mark::One).unwrap();
        board.place_mark(2, 1, Mark::Two).unwrap();
        board.place_mark(2, 2, Mark::One).unwrap();
        assert!(!has_won(board.get_board(), Mark::One));
    }

    #[test]
    fn test_line_cells() {
        assert!(WinningLine::AntiDiagonal.contains(2, 0));
        assert!(!WinningLine::Diagonal.contains(0, 2));
        assert_eq!(WinningLine::Column(1).cells(), [(0, 1), (1, 1), (2, 1)]);
    }
}
