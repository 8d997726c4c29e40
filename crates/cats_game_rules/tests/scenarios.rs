//! End-to-end game scenarios through the public API.

use cats_game_rules::{
    Board, GameState, Mark, Outcome, Phase, Position, Square, Status, restart, select_square,
    status, winner,
};

fn play(indices: &[usize]) -> Board {
    indices
        .iter()
        .map(|i| Position::from_index(*i).expect("index in range"))
        .fold(restart(), |board, pos| select_square(&board, pos))
}

#[test]
fn test_top_row_win() {
    let board = play(&[0, 4, 1, 5, 2]);

    for idx in [0, 1, 2] {
        assert_eq!(board.squares()[idx], Square::Occupied(Mark::X));
    }
    for idx in [4, 5] {
        assert_eq!(board.squares()[idx], Square::Occupied(Mark::O));
    }
    assert_eq!(winner(&board), Some(Mark::X));
    assert_eq!(status(&board).to_string(), "Winner: X");
}

#[test]
fn test_cats_game() {
    let board = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert!(board.is_full());
    assert_eq!(winner(&board), None);
    assert_eq!(status(&board), Status::Scratch);
    assert_eq!(status(&board).to_string(), "Scratch: Cat's game");
}

#[test]
fn test_next_player_status() {
    let board = restart();
    assert_eq!(status(&board).to_string(), "Next player: X");

    let board = select_square(&board, Position::Center);
    assert_eq!(status(&board).to_string(), "Next player: O");
}

#[test]
fn test_moves_after_win_are_ignored() {
    let won = play(&[0, 4, 1, 5, 2]);
    let before = status(&won);

    for pos in Position::valid_moves(&won) {
        let after = select_square(&won, pos);
        assert_eq!(after, won);
        assert_eq!(status(&after), before);
    }
}

#[test]
fn test_restart_from_terminal_boards() {
    for terminal in [play(&[0, 4, 1, 5, 2]), play(&[0, 1, 2, 4, 3, 5, 7, 6, 8])] {
        assert!(status(&terminal).is_terminal());

        let fresh = restart();
        assert!(fresh.squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(winner(&fresh), None);
    }
}

#[test]
fn test_single_move_from_fresh_board() {
    for pos in Position::ALL {
        let board = select_square(&restart(), pos);
        for other in Position::ALL {
            let expected = if other == pos {
                Square::Occupied(Mark::X)
            } else {
                Square::Empty
            };
            assert_eq!(board.get(other), expected);
        }
    }
}

#[test]
fn test_game_state_lifecycle() {
    let mut game = GameState::new();
    assert_eq!(game.phase(), Phase::InProgress);
    assert_eq!(game.current_player(), Mark::X);

    let mut notices = Vec::new();
    for idx in [4, 0, 2, 6, 3, 5, 8, 1] {
        let pos = Position::from_index(idx).expect("index in range");
        notices.extend(game.select_square(pos));
    }
    // X: 4, 2, 3, 8 ; O: 0, 6, 5, 1 -> no line yet
    assert!(notices.is_empty());
    assert_eq!(game.status(), Status::NextPlayer(Mark::X));

    // Last empty square; it completes no line.
    let notice = game.select_square(Position::BottomCenter);
    assert!(notice.is_none());
    assert_eq!(game.phase(), Phase::Terminal(Outcome::Scratch));

    game.restart();
    assert_eq!(game.status(), Status::NextPlayer(Mark::X));
}

#[test]
fn test_board_serializes_as_squares() {
    let board = play(&[4]);
    let json = serde_json::to_string(&board).expect("serialize board");
    let back: Board = serde_json::from_str(&json).expect("deserialize board");
    assert_eq!(back, board);
    assert!(json.contains("Occupied"));
}
