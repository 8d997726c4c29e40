//! Property tests over arbitrary move sequences.

use cats_game_rules::invariants::{BoardInvariants, InvariantSet};
use cats_game_rules::{
    Board, Mark, Position, Square, current_player, restart, select_square, winner,
};
use proptest::prelude::*;

fn position() -> impl Strategy<Value = Position> {
    (0usize..9).prop_map(|i| Position::from_index(i).expect("index in range"))
}

/// Boards reached by clicking arbitrary cells, legal or not.
fn played_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(position(), 0..20)
        .prop_map(|moves| moves.into_iter().fold(restart(), |b, pos| select_square(&b, pos)))
}

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Mark::X)),
        Just(Square::Occupied(Mark::O)),
    ]
}

/// Any nine squares, including boards no game could reach.
fn any_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(square()).prop_map(|squares| {
        Position::ALL
            .into_iter()
            .zip(squares)
            .fold(Board::new(), |b, (pos, sq)| b.with(pos, sq))
    })
}

proptest! {
    #[test]
    fn rejected_moves_on_any_board_return_it_unchanged(board in any_board(), pos in position()) {
        if !board.is_empty(pos) || winner(&board).is_some() {
            prop_assert_eq!(select_square(&board, pos), board);
        }
    }

    #[test]
    fn current_player_follows_parity_on_any_board(board in any_board()) {
        let expected = if board.filled_count() % 2 == 0 { Mark::X } else { Mark::O };
        prop_assert_eq!(current_player(&board), expected);
    }


    #[test]
    fn rejected_moves_return_board_unchanged(board in played_board(), pos in position()) {
        if !board.is_empty(pos) || winner(&board).is_some() {
            prop_assert_eq!(select_square(&board, pos), board);
        }
    }

    #[test]
    fn accepted_moves_fill_exactly_one_square(board in played_board(), pos in position()) {
        let next = select_square(&board, pos);
        if next != board {
            prop_assert_eq!(next.filled_count(), board.filled_count() + 1);
            prop_assert_eq!(next.get(pos).mark(), Some(current_player(&board)));
        }
    }

    #[test]
    fn current_player_follows_parity(board in played_board()) {
        let expected = if board.filled_count() % 2 == 0 { Mark::X } else { Mark::O };
        prop_assert_eq!(current_player(&board), expected);
    }

    #[test]
    fn won_boards_are_frozen(
        board in played_board(),
        moves in prop::collection::vec(position(), 1..9),
    ) {
        if winner(&board).is_some() {
            let after = moves.into_iter().fold(board, |b, pos| select_square(&b, pos));
            prop_assert_eq!(after, board);
        }
    }

    #[test]
    fn played_boards_keep_invariants(board in played_board()) {
        prop_assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn first_move_places_x_only(pos in position()) {
        let board = select_square(&restart(), pos);
        prop_assert_eq!(board.filled_count(), 1);
        prop_assert_eq!(board.get(pos).mark(), Some(Mark::X));
    }
}
