//! End-to-end tests for the game controller.

use tictactoe::{
    DEFAULT_PLAYER_ONE, GameControls, GameController, GameEvent, GameStatus, Mark, MoveError,
    PlaceError, WinningLine,
};

fn play_all(game: &mut GameController, moves: &[(usize, usize)]) {
    for &(row, column) in moves {
        game.play_round(row, column).expect("Valid move");
    }
}

#[test]
fn test_alice_wins_on_diagonal() {
    let mut game = GameController::new(Some("Alice"), Some("Bob"));

    game.play_round(0, 0).unwrap();
    assert_eq!(game.get_active_player().name(), "Bob");
    game.play_round(0, 1).unwrap();
    game.play_round(1, 1).unwrap();
    game.play_round(1, 0).unwrap();
    let status = game.play_round(2, 2).unwrap();

    assert_eq!(status, GameStatus::Win);
    assert_eq!(game.get_game_status().to_string(), "win");
    assert_eq!(game.get_active_player().name(), "Alice");
    assert_eq!(game.get_active_player().mark(), Mark::One);
    assert_eq!(game.winning_line(), Some(WinningLine::Diagonal));
}

#[test]
fn test_every_line_shape_wins_on_third_mark() {
    // Player two fills harmless cells between player one's moves.
    let cases: [(&[(usize, usize)], &[(usize, usize)], WinningLine); 4] = [
        (&[(0, 0), (0, 1), (0, 2)], &[(1, 0), (2, 0)], WinningLine::Row(0)),
        (&[(0, 0), (1, 0), (2, 0)], &[(0, 1), (1, 1)], WinningLine::Column(0)),
        (&[(0, 0), (1, 1), (2, 2)], &[(0, 1), (0, 2)], WinningLine::Diagonal),
        (&[(0, 2), (1, 1), (2, 0)], &[(0, 0), (0, 1)], WinningLine::AntiDiagonal),
    ];

    for (ones, twos, line) in cases {
        let mut game = GameController::new(None, None);

        game.play_round(ones[0].0, ones[0].1).unwrap();
        game.play_round(twos[0].0, twos[0].1).unwrap();
        assert_eq!(game.play_round(ones[1].0, ones[1].1), Ok(GameStatus::Active));
        game.play_round(twos[1].0, twos[1].1).unwrap();
        assert_eq!(game.play_round(ones[2].0, ones[2].1), Ok(GameStatus::Win));

        assert_eq!(game.winning_line(), Some(line));
    }
}

#[test]
fn test_tie_when_board_fills_without_line() {
    let mut game = GameController::new(Some("Alice"), Some("Bob"));
    // X X O / O O X / X O X
    play_all(
        &mut game,
        &[(0, 0), (0, 2), (0, 1), (1, 0), (1, 2), (1, 1), (2, 0), (2, 1)],
    );
    assert_eq!(game.get_game_status(), GameStatus::Active);
    assert_eq!(game.play_round(2, 2), Ok(GameStatus::Tie));

    let events = game.drain_events();
    assert_eq!(events.last(), Some(&GameEvent::Tie));
    assert_eq!(events.last().map(|e| e.to_string()).as_deref(), Some("Game End! It's a tie!"));
}

#[test]
fn test_turn_order_alternates() {
    let mut game = GameController::new(Some("Alice"), Some("Bob"));
    let mut expected = ["Alice", "Bob"].iter().cycle();

    for (row, column) in [(0, 0), (2, 2), (0, 2), (2, 0)] {
        assert_eq!(game.get_active_player().name(), *expected.next().unwrap());
        game.play_round(row, column).unwrap();
    }
    assert_eq!(game.get_active_player().name(), "Alice");
}

#[test]
fn test_invalid_moves_change_nothing() {
    let mut game = GameController::new(Some("Alice"), Some("Bob"));
    game.play_round(1, 1).unwrap();
    game.drain_events();
    let board = *game.get_board();

    assert_eq!(
        game.play_round(1, 1),
        Err(MoveError::Rejected(PlaceError::Occupied { row: 1, column: 1 }))
    );
    assert_eq!(
        game.play_round(0, 3),
        Err(MoveError::Rejected(PlaceError::OutOfRange { row: 0, column: 3 }))
    );

    assert_eq!(*game.get_board(), board);
    assert_eq!(game.get_active_player().name(), "Bob");
    assert_eq!(game.get_game_status(), GameStatus::Active);
    assert!(game.drain_events().is_empty());
}

#[test]
fn test_reset_after_tie_and_win() {
    let mut game = GameController::new(None, Some("Bob"));
    play_all(
        &mut game,
        &[(0, 0), (0, 2), (0, 1), (1, 0), (1, 2), (1, 1), (2, 0), (2, 1), (2, 2)],
    );
    assert_eq!(game.get_game_status(), GameStatus::Tie);

    game.reset_game();
    assert_eq!(game.get_game_status(), GameStatus::Active);
    assert_eq!(game.get_active_player().name(), DEFAULT_PLAYER_ONE);
    assert!(game.get_board().iter().flatten().all(|cell| cell.get_value() == 0));

    // Player two wins the next game; reset hands the turn back to player one.
    play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]);
    assert_eq!(game.get_game_status(), GameStatus::Win);
    assert_eq!(game.get_active_player().name(), "Bob");

    game.reset_game();
    assert_eq!(game.get_active_player().name(), DEFAULT_PLAYER_ONE);
    assert!(game.history().is_empty());
}

#[test]
fn test_controls_trait_drives_game() {
    fn play<C: GameControls>(controls: &mut C) -> GameStatus {
        for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            let _ = controls.play_round(row, column);
        }
        controls.get_game_status()
    }

    let mut game = GameController::new(Some("Alice"), Some("Bob"));
    assert_eq!(play(&mut game), GameStatus::Win);
    assert_eq!(GameControls::get_active_player(&game).name(), "Alice");
}

#[test]
fn test_event_messages() {
    let mut game = GameController::new(Some("Alice"), Some("Bob"));
    game.play_round(0, 1).unwrap();

    let messages: Vec<String> = game.drain_events().iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec![
            "Alice's turn",
            "Placing Alice's mark into row 0, column 1",
            "Bob's turn",
        ]
    );
}
