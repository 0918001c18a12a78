//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use strictly_tictactoe::{Board, apply_move, initial_state, is_terminal, legal_moves};

/// Every board reachable from the empty board by legal play (5478 positions).
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    let mut boards = Vec::new();

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        if is_terminal(&board) {
            continue;
        }
        for mv in legal_moves(&board) {
            stack.push(apply_move(&board, mv).expect("legal move"));
        }
    }

    boards
}
