//! The game board: grid storage and move validation.

use super::types::{COLUMNS, Cell, Grid, Mark, ROWS};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use tracing::{debug, instrument};

/// Reasons a mark cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// Row or column is outside `[0, 3)`.
    #[display("Cell ({row}, {column}) is outside the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell ({row}, {column}) is already occupied")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },
}

impl std::error::Error for PlaceError {}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the current grid and starts over with empty cells.
    #[instrument(skip(self))]
    pub fn create_board(&mut self) {
        debug!("Rebuilding board");
        self.grid = Default::default();
    }

    /// Returns the grid for reading.
    pub fn get_board(&self) -> &Grid {
        &self.grid
    }

    /// Gets the cell at the given coordinates, if they are on the board.
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        self.grid.get(row)?.get(column).copied()
    }

    /// Places `mark` at (`row`, `column`).
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::OutOfRange`] for coordinates off the board and
    /// [`PlaceError::Occupied`] if the cell is taken. The board is unchanged
    /// in both cases.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, row: usize, column: usize, mark: Mark) -> Result<(), PlaceError> {
        self.check_valid(row, column)?;
        self.grid[row][column].add_mark(mark);
        Ok(())
    }

    /// Checks that a mark could be placed at (`row`, `column`).
    pub fn check_valid(&self, row: usize, column: usize) -> Result<(), PlaceError> {
        match self.get(row, column) {
            None => Err(PlaceError::OutOfRange { row, column }),
            Some(cell) if !cell.is_empty() => Err(PlaceError::Occupied { row, column }),
            Some(_) => Ok(()),
        }
    }

    /// Counts the cells holding a mark.
    pub fn filled_count(&self) -> usize {
        self.cells().filter(|cell| !cell.is_empty()).count()
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells().filter(|cell| cell.mark() == Some(mark)).count()
    }

    /// Iterates all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter().flatten()
    }

    /// Returns the (row, column) coordinates of every empty cell.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        (0..ROWS)
            .flat_map(|row| (0..COLUMNS).map(move |column| (row, column)))
            .filter(|&(row, column)| self.grid[row][column].is_empty())
            .collect()
    }

    /// Writes the numeric cell values, one row per line.
    pub fn print_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in &self.grid {
            let values: Vec<String> = row.iter().map(|cell| cell.get_value().to_string()).collect();
            writeln!(out, "{}", values.join(" "))?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let symbol = cell.mark().map_or('-', Mark::symbol);
                write!(f, "{}", symbol)?;
                if c < COLUMNS - 1 {
                    write!(f, "|")?;
                }
            }
            if r < ROWS - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
