//! Command-line interface for the tictactoe binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Player names shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayerNames {
    /// Name for player one (X)
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name for player two (O)
    #[arg(long)]
    pub player_two: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        #[command(flatten)]
        players: PlayerNames,
    },

    /// Apply a list of moves without a UI and print the result
    Run {
        #[command(flatten)]
        players: PlayerNames,

        /// Print the final game as JSON
        #[arg(long)]
        json: bool,

        /// Moves as `row,column` pairs, zero-based
        #[arg(value_name = "ROW,COLUMN")]
        moves: Vec<Coordinates>,
    },
}

/// A `row,column` pair from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinates {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub column: usize,
}

impl FromStr for Coordinates {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, column) = s
            .split_once(',')
            .ok_or_else(|| format!("Expected ROW,COLUMN but got '{}'", s))?;
        let row = row
            .trim()
            .parse()
            .map_err(|e| format!("Invalid row '{}': {}", row, e))?;
        let column = column
            .trim()
            .parse()
            .map_err(|e| format!("Invalid column '{}': {}", column, e))?;
        Ok(Self { row, column })
    }
}
