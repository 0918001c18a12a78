//! Strictly Tic-Tac-Toe - pure game rules and perfect-play search.
//!
//! # Architecture
//!
//! - **Types**: [`Board`] values, [`Move`] coordinates, derived [`Outcome`]
//! - **Rules**: stateless queries and the [`apply_move`] transition
//! - **Search**: minimax with alpha-beta pruning ([`best_move`], [`search`])
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{apply_move, best_move, initial_state, is_terminal};
//!
//! let mut board = initial_state();
//! while let Some(mv) = best_move(&board) {
//!     board = apply_move(&board, mv).expect("search only picks empty cells");
//! }
//! assert!(is_terminal(&board));
//! assert_eq!(strictly_tictactoe::utility(&board), 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod notation;
mod types;

#[cfg(kani)]
mod verification;

pub mod rules;
pub mod search;

// Crate-level exports - Types
pub use types::{Board, Cell, Move, Outcome, Player};

// Crate-level exports - Errors
pub use error::{MoveError, MoveRangeError, ParseBoardError};

// Crate-level exports - Rules
pub use rules::{
    apply_move, current_player, initial_state, is_full, is_terminal, legal_moves, outcome, utility,
    winner,
};

// Crate-level exports - Search
pub use search::{
    SearchReport, SearchStats, best_move, exhaustive_value, minimax, move_values, search,
};
