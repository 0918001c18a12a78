//! Formal verification of rules properties using the Kani model checker.
//!
//! Boards here are arbitrary, not only reachable ones, so the harnesses cover
//! hand-built inputs as well.

use crate::rules;
use crate::types::{Board, Cell, Move, Player};

impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

impl kani::Arbitrary for Cell {
    fn any() -> Self {
        let tag: u8 = kani::any();
        kani::assume(tag < 3);
        match tag {
            0 => Cell::Empty,
            1 => Cell::Occupied(Player::X),
            _ => Cell::Occupied(Player::O),
        }
    }
}

impl kani::Arbitrary for Board {
    fn any() -> Self {
        Board::from_rows(kani::any())
    }
}

impl kani::Arbitrary for Move {
    fn any() -> Self {
        let index: usize = kani::any();
        kani::assume(index < 9);
        Move::ALL[index]
    }
}

/// Utility agrees with the winner on every board.
#[kani::proof]
#[kani::unwind(10)]
fn verify_utility_matches_winner() {
    let board: Board = kani::any();
    let expected = match rules::winner(&board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    };
    assert_eq!(rules::utility(&board), expected);
}

/// A move succeeds exactly on empty cells and marks only that cell.
#[kani::proof]
#[kani::unwind(10)]
fn verify_apply_move_marks_one_empty_cell() {
    let board: Board = kani::any();
    let mv: Move = kani::any();
    match rules::apply_move(&board, mv) {
        Ok(next) => {
            assert!(board.cell(mv).is_empty());
            assert_eq!(next.cell(mv), Cell::Occupied(rules::current_player(&board)));
            assert_eq!(next.occupied(), board.occupied() + 1);
        }
        Err(_) => assert!(!board.cell(mv).is_empty()),
    }
}
