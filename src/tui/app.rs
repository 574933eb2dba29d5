//! Application state and logic.

use super::input::{Action, Cursor, move_cursor};
use crate::games::tictactoe::{GameControls, GameController, GameEvent, GameStatus};
use tracing::{debug, instrument};

/// Main application state.
///
/// Holds the game behind [`GameControls`] plus what the screen needs that
/// the game does not track: the cursor and the last message to show.
pub struct App<C = GameController> {
    game: C,
    cursor: Cursor,
    status_message: String,
    should_quit: bool,
}

impl<C: GameControls> App<C> {
    /// Creates a new application around a started game.
    pub fn new(game: C) -> Self {
        let mut app = Self {
            game,
            cursor: Cursor::default(),
            status_message: String::new(),
            should_quit: false,
        };
        app.absorb_events();
        app
    }

    /// Gets the current game.
    pub fn game(&self) -> &C {
        &self.game
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Line naming whose turn it is.
    pub fn turn_line(&self) -> String {
        format!("{}'s turn", self.game.get_active_player().name())
    }

    /// Result text once the game has ended.
    pub fn result_message(&self) -> Option<String> {
        match self.game.get_game_status() {
            GameStatus::Active => None,
            GameStatus::Win => Some(format!(
                "Congratulations! {} is the winner!",
                self.game.get_active_player().name()
            )),
            GameStatus::Tie => Some("Game End! It's a tie!".to_string()),
        }
    }

    /// Applies a user action.
    ///
    /// Board input is ignored while the game is over; only reset and quit
    /// still work.
    #[instrument(skip(self))]
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                debug!("User quit");
                self.should_quit = true;
            }
            Action::Reset => self.restart(),
            Action::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::Place => self.place(self.cursor),
            Action::PlaceAt(cell) => {
                self.cursor = cell;
                self.place(cell);
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset_game();
        self.cursor = Cursor::default();
        self.absorb_events();
    }

    fn place(&mut self, cell: Cursor) {
        if self.game.get_game_status().is_terminal() {
            return;
        }

        match self.game.play_round(cell.row, cell.column) {
            Ok(status) => debug!(%status, "Round played"),
            Err(e) => {
                debug!(error = %e, "Round rejected");
                self.status_message = e.to_string();
            }
        }
        self.absorb_events();
    }

    fn absorb_events(&mut self) {
        for event in self.game.drain_events() {
            debug!(?event, "Handling game event");
            match event {
                // The turn line already shows whose move it is.
                GameEvent::NewRound { .. } => {}
                event => self.status_message = event.to_string(),
            }
        }
    }
}
