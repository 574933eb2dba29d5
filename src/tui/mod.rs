//! Terminal UI for tic-tac-toe.
//!
//! The screen only talks to the game through
//! [`GameControls`](crate::GameControls); this module owns the terminal and
//! the input loop.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, Cursor, action_for, cell_for_digit, move_cursor};
pub use ui::draw;

use crate::games::tictactoe::GameControls;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui<C: GameControls>(game: C) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(game));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");

    res
}

fn run_app<C: GameControls>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App<C>,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && let Some(action) = action_for(key)
        {
            app.handle_action(action);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
