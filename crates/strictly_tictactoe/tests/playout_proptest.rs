//! Property tests over random playouts.

use proptest::prelude::*;
use strictly_tictactoe::{
    Board, MoveError, Outcome, Player, apply_move, best_move, current_player, initial_state,
    is_terminal, legal_moves, outcome, utility, winner,
};

/// Plays `choices` as indices into the legal move list until the game ends
/// or the choices run out, returning every board along the way.
fn playout(choices: &[usize]) -> Vec<Board> {
    let mut board = initial_state();
    let mut boards = vec![board];
    for choice in choices {
        if is_terminal(&board) {
            break;
        }
        let moves = legal_moves(&board);
        let mv = moves[choice % moves.len()];
        board = apply_move(&board, mv).unwrap();
        boards.push(board);
    }
    boards
}

proptest! {
    #[test]
    fn prop_current_player_alternates(choices in prop::collection::vec(0usize..9, 0..9)) {
        for (ply, board) in playout(&choices).iter().enumerate() {
            let expected = if ply % 2 == 0 { Player::X } else { Player::O };
            prop_assert_eq!(current_player(board), expected);
        }
    }

    #[test]
    fn prop_utility_classifies_terminal_boards(choices in prop::collection::vec(0usize..9, 9)) {
        let boards = playout(&choices);
        let last = boards.last().unwrap();
        prop_assert!(is_terminal(last));

        let value = utility(last);
        prop_assert!((-1..=1).contains(&value));
        match winner(last) {
            Some(Player::X) => prop_assert_eq!(value, 1),
            Some(Player::O) => prop_assert_eq!(value, -1),
            None => prop_assert_eq!(outcome(last), Outcome::Draw),
        }
    }

    #[test]
    fn prop_replaying_a_move_on_its_result_fails(choices in prop::collection::vec(0usize..9, 1..9)) {
        let boards = playout(&choices);
        for pair in boards.windows(2) {
            let (before, after) = (pair[0], pair[1]);
            let mv = legal_moves(&before)
                .into_iter()
                .find(|mv| before.cell(*mv) != after.cell(*mv))
                .unwrap();
            prop_assert_eq!(apply_move(&after, mv), Err(MoveError::InvalidMove { at: mv }));
            prop_assert_eq!(apply_move(&before, mv), Ok(after));
        }
    }
}

proptest! {
    // Each case runs a full search from the opening.
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_engine_never_loses_to_random_play(
        choices in prop::collection::vec(0usize..9, 9),
        engine_is_x in any::<bool>(),
    ) {
        let engine = if engine_is_x { Player::X } else { Player::O };
        let mut board = initial_state();
        let mut choices = choices.into_iter();

        while !is_terminal(&board) {
            let mv = if current_player(&board) == engine {
                best_move(&board).unwrap()
            } else {
                let moves = legal_moves(&board);
                moves[choices.next().unwrap_or(0) % moves.len()]
            };
            board = apply_move(&board, mv).unwrap();
        }

        prop_assert_ne!(winner(&board), Some(engine.opponent()));
    }
}
