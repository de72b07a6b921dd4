//! Property-based tests for board evaluation and the move history.

use proptest::prelude::*;
use tictactoe::{calculate_winner, Board, Game, Mark, Square, Status, ALL_SQUARES, LINES};

fn arb_cell() -> impl Strategy<Value = Option<Mark>> {
    prop_oneof![Just(None), Just(Some(Mark::X)), Just(Some(Mark::O))]
}

/// Any arrangement of marks, reachable or not.
fn arb_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(arb_cell()).prop_map(Board::from_cells)
}

fn arb_square() -> impl Strategy<Value = Square> {
    (0u8..9).prop_map(|index| Square::new(index).unwrap())
}

/// A game built from random clicks; rejected clicks are part of the input.
fn arb_game() -> impl Strategy<Value = Game> {
    proptest::collection::vec(arb_square(), 0..20).prop_map(|squares| {
        let mut game = Game::new();
        game.play_squares(squares);
        game
    })
}

proptest! {
    #[test]
    fn completed_line_names_the_winner(board in arb_board()) {
        let completed = LINES.iter().find(|line| {
            let first = board.get(line[0]);
            first.is_some() && line.iter().all(|&sq| board.get(sq) == first)
        });
        match completed {
            Some(line) => prop_assert_eq!(calculate_winner(&board), board.get(line[0])),
            None => prop_assert_eq!(calculate_winner(&board), None),
        }
    }

    #[test]
    fn status_matches_board(board in arb_board(), next in prop_oneof![Just(Mark::X), Just(Mark::O)]) {
        let status = board.status(next);
        match calculate_winner(&board) {
            Some(mark) => prop_assert_eq!(status, Status::Winner(mark)),
            None if board.is_full() => prop_assert_eq!(status, Status::Draw),
            None => prop_assert_eq!(status, Status::Next(next)),
        }
    }

    #[test]
    fn turn_follows_filled_count(game in arb_game()) {
        let filled = game.current_board().filled();
        prop_assert_eq!(filled, game.current_move());
        if let Status::Next(mark) = game.status() {
            prop_assert_eq!(mark == Mark::X, filled % 2 == 0);
        }
    }

    #[test]
    fn occupied_click_is_a_no_op(game in arb_game(), square in arb_square()) {
        prop_assume!(game.current_board().is_occupied(square));
        let mut after = game.clone();
        prop_assert!(!after.handle_click(square));
        prop_assert_eq!(after, game);
    }

    #[test]
    fn clicks_after_a_win_are_no_ops(game in arb_game()) {
        prop_assume!(game.current_board().winner().is_some());
        let mut after = game.clone();
        for square in ALL_SQUARES {
            prop_assert!(!after.handle_click(square));
        }
        prop_assert_eq!(after, game);
    }

    #[test]
    fn play_after_jump_truncates(game in arb_game(), jump in any::<prop::sample::Index>()) {
        let mut game = game;
        let target = jump.index(game.len());
        let kept: Vec<Board> = game.history()[..=target].to_vec();
        game.jump_to(target).unwrap();

        let board = game.current_board().with(ALL_SQUARES[0], game.next_mark());
        game.play(board);
        prop_assert_eq!(game.len(), target + 2);
        prop_assert_eq!(game.current_move(), target + 1);
        prop_assert_eq!(&game.history()[..=target], kept.as_slice());
        prop_assert_eq!(game.current_board(), &board);
    }

    #[test]
    fn jump_alone_keeps_history(game in arb_game(), jump in any::<prop::sample::Index>()) {
        let mut after = game.clone();
        let target = jump.index(game.len());
        after.jump_to(target).unwrap();
        prop_assert_eq!(after.history(), game.history());
        prop_assert_eq!(after.current_move(), target);
    }
}

#[test]
fn branch_from_start_after_five_moves() {
    let mut game = Game::new();
    let squares = [0u8, 4, 1, 7, 2].map(|i| Square::new(i).unwrap());
    assert_eq!(game.play_squares(squares), 5);
    assert_eq!(game.current_move(), 5);

    game.jump_to(0).unwrap();
    assert!(game.handle_click(Square::new(0).unwrap()));
    assert_eq!(game.len(), 2);
    assert_eq!(game.current_move(), 1);
}
