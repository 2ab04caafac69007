//! Tests for time travel: jumping, truncation, and the move list.

use tictactoe_replay::{Game, GameStatus, Player, Position, SortOrder};

fn game_with_moves(positions: &[Position]) -> Game {
    let mut game = Game::new();
    for pos in positions {
        game.play(*pos);
    }
    game
}

#[test]
fn test_jump_to_earlier_move() {
    let mut game = game_with_moves(&[
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
    ]);

    game.jump_to(1);
    assert_eq!(game.current_move(), 1);
    assert_eq!(game.history().len(), 4); // history untouched
    assert_eq!(game.board().occupied_count(), 1);
    assert_eq!(game.status(), GameStatus::InProgress(Player::O));
}

#[test]
#[should_panic(expected = "out of range")]
fn test_jump_to_out_of_range_panics() {
    let mut game = Game::new();
    game.jump_to(1);
}

#[test]
fn test_play_after_jump_truncates_future() {
    let mut game = game_with_moves(&[
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
        Position::TopRight,
    ]);
    assert_eq!(game.history().len(), 5);

    let preserved: Vec<_> = game.history()[..3].to_vec();
    game.jump_to(2);
    game.play(Position::MiddleLeft);

    // Entries 0..2 preserved, new move appended - never length 6.
    assert_eq!(game.history().len(), 4);
    assert_eq!(&game.history()[..3], preserved.as_slice());
    assert_eq!(game.current_move(), 3);
    assert_eq!(game.history()[3].location(), Some(Position::MiddleLeft));
}

#[test]
fn test_mover_parity_follows_jump_target() {
    let mut game = game_with_moves(&[
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
    ]);

    // At move 1 it's O's turn again, even though O already played in
    // the discarded future.
    game.jump_to(1);
    assert_eq!(game.next_player(), Player::O);
}

#[test]
fn test_move_descriptions() {
    let mut game = Game::new();
    assert_eq!(game.move_description(0), "You are at move #0");

    game.play(Position::MiddleRight); // index 5 -> (2, 3)
    assert_eq!(game.move_description(0), "Go to game start");
    assert_eq!(game.move_description(1), "You are at move #1 (2, 3)");

    game.play(Position::TopLeft);
    assert_eq!(game.move_description(1), "Go to move #1 (2, 3)");
    assert_eq!(game.move_description(2), "You are at move #2 (1, 1)");

    game.jump_to(0);
    assert_eq!(game.move_description(0), "You are at move #0");
    assert_eq!(game.move_description(2), "Go to move #2 (1, 1)");
}

#[test]
fn test_sort_order_toggle_leaves_history_alone() {
    let mut game = game_with_moves(&[Position::Center, Position::TopLeft]);
    assert_eq!(game.sort_order(), SortOrder::Ascending);

    let history = game.history().to_vec();
    game.toggle_sort_order();
    assert_eq!(game.sort_order(), SortOrder::Descending);
    assert_eq!(game.history(), history.as_slice());

    game.toggle_sort_order();
    assert_eq!(game.sort_order(), SortOrder::Ascending);
}

#[test]
fn test_game_survives_serialization_mid_replay() {
    let mut game = game_with_moves(&[
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
    ]);
    game.jump_to(2);

    let json = serde_json::to_string(&game).expect("game serializes");
    let restored: Game = serde_json::from_str(&json).expect("game deserializes");

    assert_eq!(restored, game);
    assert_eq!(restored.current_move(), 2);
    assert_eq!(restored.board(), game.board());
}
