//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Move, Player, at};

/// The eight winning lines, in scan order: rows, columns, then the main
/// diagonal (`row == col`) and the anti-diagonal (`row + col == 2`).
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Sum of cell scores along a line: +3 is all X, -3 is all O.
fn line_sum(board: &Board, line: &[Move; 3]) -> i8 {
    line.iter().map(|&mv| board.cell(mv).score()).sum()
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in [`LINES`] order. Legal play
/// never completes lines for both players, but if a hand-built board does,
/// whichever line is scanned first decides.
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|line| match line_sum(board, line) {
        3 => Some(Player::X),
        -3 => Some(Player::O),
        _ => None,
    })
}
