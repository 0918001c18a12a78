//! Game rules for tic-tac-toe.
//!
//! Pure functions of a [`Board`]: turn order, legal moves, the move
//! transition, and end-of-game evaluation. Nothing here keeps state, so the
//! search can call these from any frame without coordination.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winner};

use crate::error::MoveError;
use crate::types::{Board, Move, Outcome, Player};
use tracing::{instrument, warn};

/// Returns the starting board: every cell empty.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player to move: X after an even number of marks, O after an odd.
pub fn current_player(board: &Board) -> Player {
    if board.occupied() % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}

/// Returns every empty cell in row-major order.
///
/// The order is what makes search tie-breaking deterministic.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    board
        .cells()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(mv, _)| mv)
        .collect()
}

/// Returns the board after the player to move marks `mv`.
///
/// The mark is decided from the input board. The input is never modified.
///
/// # Errors
///
/// [`MoveError::InvalidMove`] if the cell is already occupied.
#[instrument(level = "trace", skip(board), fields(board = %board.encode()))]
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, MoveError> {
    if !board.cell(mv).is_empty() {
        warn!(%mv, "Rejected move onto occupied cell");
        return Err(MoveError::InvalidMove { at: mv });
    }
    Ok(place(board, mv))
}

/// Marks `mv` for the player to move without checking occupancy.
///
/// Only for moves taken from [`legal_moves`] of the same board.
pub(crate) fn place(board: &Board, mv: Move) -> Board {
    board.with_mark(mv, current_player(board))
}

/// Returns true once someone has won or no empty cell remains.
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Terminal value from X's perspective: +1 X won, -1 O won, 0 otherwise.
///
/// Only meaningful on terminal boards; an unfinished board reads as 0.
pub fn utility(board: &Board) -> i8 {
    winner(board).map_or(0, Player::sign)
}

/// Derives the game outcome for a board.
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(Player::X) => Outcome::XWins,
        Some(Player::O) => Outcome::OWins,
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
