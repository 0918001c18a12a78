//! Draw detection logic for tic-tac-toe.

use crate::types::Board;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|(_, cell)| !cell.is_empty())
}
