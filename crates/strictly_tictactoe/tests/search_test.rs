//! Tests for minimax search with alpha-beta pruning.

mod common;

use common::reachable_boards;
use std::collections::HashMap;
use strictly_tictactoe::{
    Board, Move, Outcome, Player, apply_move, best_move, current_player, exhaustive_value,
    initial_state, is_terminal, legal_moves, outcome, search, utility,
};

/// Exact minimax values for every reachable board, computed bottom-up with a memo.
fn solved_values(boards: &[Board]) -> HashMap<Board, i8> {
    fn solve(board: &Board, memo: &mut HashMap<Board, i8>) -> i8 {
        if let Some(value) = memo.get(board) {
            return *value;
        }
        let value = if is_terminal(board) {
            utility(board)
        } else {
            let children: Vec<i8> = legal_moves(board)
                .into_iter()
                .map(|mv| solve(&apply_move(board, mv).unwrap(), memo))
                .collect();
            match current_player(board) {
                Player::X => *children.iter().max().unwrap(),
                Player::O => *children.iter().min().unwrap(),
            }
        };
        memo.insert(*board, value);
        value
    }

    let mut memo = HashMap::new();
    for board in boards {
        solve(board, &mut memo);
    }
    memo
}

#[test]
fn test_pruned_value_matches_full_minimax_everywhere() {
    let boards = reachable_boards();
    let exact = solved_values(&boards);

    for board in boards.iter().filter(|b| !is_terminal(b)) {
        let report = search(board);
        assert_eq!(
            report.value(),
            exact[board],
            "value mismatch on {}",
            board.encode()
        );
    }
}

#[test]
fn test_best_move_preserves_game_value() {
    let boards = reachable_boards();
    let exact = solved_values(&boards);

    for board in boards.iter().filter(|b| !is_terminal(b)) {
        let mv = best_move(board).expect("non-terminal board has a move");
        let child = apply_move(board, mv).expect("best move is legal");
        assert_eq!(
            exact[&child],
            exact[board],
            "{mv} is not optimal on {}",
            board.encode()
        );
    }
}

#[test]
fn test_exhaustive_reference_agrees_on_sample_positions() {
    for notation in ["X........", "X...O....", "XX.OO....", "XO..X....", "X.O.X.O.."] {
        let board: Board = notation.parse().unwrap();
        assert_eq!(search(&board).value(), exhaustive_value(&board), "{notation}");
    }
}

#[test]
fn test_empty_board_is_a_forced_draw() {
    assert_eq!(search(&initial_state()).value(), 0);

    let mut board = initial_state();
    while let Some(mv) = best_move(&board) {
        board = apply_move(&board, mv).unwrap();
    }
    assert_eq!(outcome(&board), Outcome::Draw);
    assert_eq!(utility(&board), 0);
}

#[test]
fn test_x_completes_row() {
    let board: Board = "XX./OO./...".parse().unwrap();
    assert_eq!(current_player(&board), Player::X);
    let mv = best_move(&board).unwrap();
    assert_eq!(mv, Move::new(0, 2).unwrap());
    assert_eq!(utility(&apply_move(&board, mv).unwrap()), 1);
}

#[test]
fn test_terminal_boards_have_no_best_move() {
    for board in reachable_boards().into_iter().filter(is_terminal) {
        assert_eq!(best_move(&board), None);
    }
}

#[test]
fn test_engine_never_loses_to_any_opponent() {
    // Let the engine play one side and try every reply for the other.
    fn worst_case(board: &Board, engine: Player) -> i8 {
        if is_terminal(board) {
            return utility(board) * engine.sign();
        }
        if current_player(board) == engine {
            let mv = best_move(board).unwrap();
            worst_case(&apply_move(board, mv).unwrap(), engine)
        } else {
            legal_moves(board)
                .into_iter()
                .map(|mv| worst_case(&apply_move(board, mv).unwrap(), engine))
                .min()
                .unwrap()
        }
    }

    assert!(worst_case(&initial_state(), Player::X) >= 0);
    assert!(worst_case(&initial_state(), Player::O) >= 0);
}
