//! Error types for tic-tac-toe rules and board notation.

use crate::types::Move;
use derive_more::{Display, Error};

/// Error raised when a move cannot be applied.
///
/// Occupied cells are the only thing the rules reject. Search never produces
/// one, so seeing this error means the caller skipped [`crate::rules::legal_moves`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Invalid move: cell {at} is already occupied")]
    InvalidMove {
        /// The rejected move.
        at: Move,
    },
}

/// Coordinates outside the 3x3 board, rejected when decoding a [`Move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Move ({row}, {col}) is off the board")]
pub struct MoveRangeError {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
}

/// Error parsing a board from compact notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The notation did not describe exactly nine cells.
    #[display("Expected 9 cells, found {found}")]
    WrongLength {
        /// Number of cell symbols found.
        found: usize,
    },

    /// A character that is neither a mark nor an empty-cell symbol.
    #[display("Unknown cell symbol {symbol:?}")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
    },

    /// The mark counts cannot arise from X-first alternating play.
    #[display("Impossible mark counts: {x} X and {o} O")]
    Unbalanced {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
}
