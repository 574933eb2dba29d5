//! Turn management for a two-player game.

use super::action::{Move, MoveError};
use super::contracts::assert_invariants;
use super::events::GameEvent;
use super::rules::{self, WinningLine};
use super::{Board, GameStatus, Grid, Mark, Player};
use tracing::{debug, info, instrument, warn};

/// Name given to player one when none is supplied.
pub const DEFAULT_PLAYER_ONE: &str = "Player One";

/// Name given to player two when none is supplied.
pub const DEFAULT_PLAYER_TWO: &str = "Player Two";

/// The operations a front end needs to drive a game.
///
/// Front ends depend on this trait rather than on [`GameController`] so
/// they can be exercised without a terminal.
pub trait GameControls {
    /// Plays the active player's mark at (`row`, `column`).
    fn play_round(&mut self, row: usize, column: usize) -> Result<GameStatus, MoveError>;

    /// Returns the player whose turn it is (the winner once the game is won).
    fn get_active_player(&self) -> &Player;

    /// Returns the current status.
    fn get_game_status(&self) -> GameStatus;

    /// Returns the grid for reading.
    fn get_board(&self) -> &Grid;

    /// Starts a new game with the same players.
    fn reset_game(&mut self);

    /// Takes every event emitted since the last call.
    fn drain_events(&mut self) -> Vec<GameEvent>;

    /// Returns the completed line after a win.
    fn winning_line(&self) -> Option<WinningLine>;
}

/// Owns the board and the two players and runs the turn loop.
///
/// All state changes go through [`GameController::play_round`] and
/// [`GameController::reset_game`].
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    players: [Player; 2],
    active: usize,
    status: GameStatus,
    history: Vec<Move>,
    events: Vec<GameEvent>,
}

impl GameController {
    /// Creates a game between two players.
    ///
    /// Missing or blank names fall back to [`DEFAULT_PLAYER_ONE`] and
    /// [`DEFAULT_PLAYER_TWO`]. Player one holds mark 1 and moves first.
    #[instrument]
    pub fn new(player_one_name: Option<&str>, player_two_name: Option<&str>) -> Self {
        let players = [
            Player::new(resolve_name(player_one_name, DEFAULT_PLAYER_ONE), Mark::One),
            Player::new(resolve_name(player_two_name, DEFAULT_PLAYER_TWO), Mark::Two),
        ];
        info!(
            player_one = %players[0],
            player_two = %players[1],
            "Starting new game"
        );

        let mut controller = Self {
            board: Board::new(),
            players,
            active: 0,
            status: GameStatus::Active,
            history: Vec::new(),
            events: Vec::new(),
        };
        controller.announce_round();
        controller
    }

    /// Returns the player whose turn it is.
    pub fn get_active_player(&self) -> &Player {
        &self.players[self.active]
    }

    /// Returns both players, player one first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the current status.
    pub fn get_game_status(&self) -> GameStatus {
        self.status
    }

    /// Returns the grid for reading.
    pub fn get_board(&self) -> &Grid {
        self.board.get_board()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the completed line, if the game was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        if self.status != GameStatus::Win {
            return None;
        }
        rules::winning_line(self.board.get_board(), self.get_active_player().mark())
    }

    /// Plays one round for the active player.
    ///
    /// The mark is placed, then the win check runs for the active player's
    /// mark only, then the tie check. If neither ends the game the turn
    /// passes to the other player. After a win the winner stays active.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game has ended and
    /// [`MoveError::Rejected`] when the board refuses the cell. In both
    /// cases nothing changes and no event is emitted.
    #[instrument(skip(self))]
    pub fn play_round(&mut self, row: usize, column: usize) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            warn!(status = %self.status, "Move after game over ignored");
            return Err(MoveError::GameOver(self.status));
        }

        let player = self.get_active_player().clone();
        if let Err(e) = self.board.place_mark(row, column, player.mark()) {
            warn!(error = %e, player = %player, "Move rejected");
            return Err(e.into());
        }

        self.history.push(Move::new(player.mark(), row, column));
        info!(player = %player, row, column, "Mark placed");
        self.events.push(GameEvent::MarkPlaced {
            player: player.clone(),
            row,
            column,
        });

        assert_invariants(&self.board, &self.history);

        if rules::has_won(self.board.get_board(), player.mark()) {
            self.status = GameStatus::Win;
            info!(winner = %player, moves = self.history.len(), "Game won");
            self.events.push(GameEvent::Winner { player });
            return Ok(self.status);
        }

        if rules::is_tie(self.board.get_board()) {
            self.status = GameStatus::Tie;
            info!(moves = self.history.len(), "Game tied");
            self.events.push(GameEvent::Tie);
            return Ok(self.status);
        }

        self.switch_player_turn();
        self.announce_round();
        Ok(self.status)
    }

    /// Clears the board and hands the first turn back to player one.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        info!(previous_status = %self.status, "Resetting game");
        self.board.create_board();
        self.history.clear();
        self.active = 0;
        self.status = GameStatus::Active;
        self.announce_round();
    }

    /// Takes every event emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn switch_player_turn(&mut self) {
        self.active = 1 - self.active;
        debug!(active = %self.get_active_player(), "Switched turn");
    }

    fn announce_round(&mut self) {
        let active_player = self.get_active_player().clone();
        debug!(board = %self.board, "Board");
        info!("{}'s turn", active_player);
        self.events.push(GameEvent::NewRound {
            board: *self.board.get_board(),
            active_player,
        });
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl GameControls for GameController {
    fn play_round(&mut self, row: usize, column: usize) -> Result<GameStatus, MoveError> {
        GameController::play_round(self, row, column)
    }

    fn get_active_player(&self) -> &Player {
        GameController::get_active_player(self)
    }

    fn get_game_status(&self) -> GameStatus {
        GameController::get_game_status(self)
    }

    fn get_board(&self) -> &Grid {
        GameController::get_board(self)
    }

    fn reset_game(&mut self) {
        GameController::reset_game(self)
    }

    fn drain_events(&mut self) -> Vec<GameEvent> {
        GameController::drain_events(self)
    }

    fn winning_line(&self) -> Option<WinningLine> {
        GameController::winning_line(self)
    }
}

fn resolve_name(name: Option<&str>, default: &str) -> String {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => default.to_string(),
    }
}
