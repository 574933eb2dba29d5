//! Tictactoe - command-line entry point
//!
//! Plays interactively in the terminal or runs a scripted game.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayerNames};
use std::path::Path;
use tictactoe::{GameConfig, GameController, OutputFormat};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { players } => run_play(cli.config.as_deref(), players),
        Command::Run {
            players,
            json,
            moves,
        } => run_script(cli.config.as_deref(), players, json, &moves),
    }
}

/// Play in the terminal UI
fn run_play(config_path: Option<&Path>, players: PlayerNames) -> Result<()> {
    let config = load_config(config_path, players)?;

    // Log to file to avoid interfering with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    let game = new_game(&config);
    tictactoe::run_tui(game)
}

/// Apply scripted moves and print the result
fn run_script(
    config_path: Option<&Path>,
    players: PlayerNames,
    json: bool,
    moves: &[cli::Coordinates],
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(config_path, players)?;
    let mut game = new_game(&config);

    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let moves: Vec<(usize, usize)> = moves.iter().map(|m| (m.row, m.column)).collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    tictactoe::run_moves(&mut game, &moves, format, &mut out)
        .context("Failed to write game output")?;

    Ok(())
}

#[instrument(skip(players))]
fn load_config(path: Option<&Path>, players: PlayerNames) -> Result<GameConfig> {
    let config = GameConfig::load(path)?.with_overrides(players.player_one, players.player_two);
    info!(?config, "Configuration resolved");
    Ok(config)
}

fn new_game(config: &GameConfig) -> GameController {
    GameController::new(
        config.player_one().as_deref(),
        config.player_two().as_deref(),
    )
}
