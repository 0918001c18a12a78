//! Compact text notation for boards.
//!
//! Nine cell symbols in row-major order: `X`/`x`, `O`/`o`, and `.`, `-`,
//! `_` or a digit `1`-`9` for an empty cell. Whitespace, `/` and `|` may be
//! used as separators and are ignored, so `"XX./OO./..."` and `"X X 3 O O 6
//! 7 8 9"` both describe the same board.

use crate::error::ParseBoardError;
use crate::types::{Board, Cell, Player};
use std::str::FromStr;
use tracing::{instrument, warn};

impl FromStr for Board {
    type Err = ParseBoardError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '/' | '|'))
            .collect();

        if symbols.len() != 9 {
            return Err(ParseBoardError::WrongLength {
                found: symbols.len(),
            });
        }

        let mut rows = [[Cell::Empty; 3]; 3];
        for (index, symbol) in symbols.into_iter().enumerate() {
            rows[index / 3][index % 3] = match symbol {
                'X' | 'x' => Cell::Occupied(Player::X),
                'O' | 'o' => Cell::Occupied(Player::O),
                '.' | '-' | '_' | '1'..='9' => Cell::Empty,
                other => return Err(ParseBoardError::UnknownSymbol { symbol: other }),
            };
        }

        let board = Board::from_rows(rows);
        let (x, o) = (board.count(Player::X), board.count(Player::O));
        if x != o && x != o + 1 {
            warn!(x, o, "Rejecting board with impossible mark counts");
            return Err(ParseBoardError::Unbalanced { x, o });
        }

        Ok(board)
    }
}
