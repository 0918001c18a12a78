//! Core domain types for tic-tac-toe.

use crate::error::MoveRangeError;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Utility of a win for this player, from X's perspective.
    pub fn sign(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Line-sum contribution: +1 for X, -1 for O, 0 when empty.
    pub fn score(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(player) => player.sign(),
        }
    }

    /// Returns true if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Compact notation symbol (`X`, `O` or `.`).
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }
}

/// A move: the (row, column) of the cell to mark, both in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "MoveRepr")]
pub struct Move {
    pub(crate) row: usize,
    pub(crate) col: usize,
}

/// Unchecked wire form of a [`Move`], validated through [`Move::new`].
#[derive(Deserialize)]
struct MoveRepr {
    row: usize,
    col: usize,
}

impl TryFrom<MoveRepr> for Move {
    type Error = MoveRangeError;

    fn try_from(MoveRepr { row, col }: MoveRepr) -> Result<Self, Self::Error> {
        Move::new(row, col).ok_or(MoveRangeError { row, col })
    }
}

/// Const constructor for tables; callers must keep both coordinates below 3.
pub(crate) const fn at(row: usize, col: usize) -> Move {
    Move { row, col }
}

impl Move {
    /// All nine moves in row-major order.
    pub const ALL: [Move; 9] = [
        at(0, 0),
        at(0, 1),
        at(0, 2),
        at(1, 0),
        at(1, 1),
        at(1, 2),
        at(2, 0),
        at(2, 1),
        at(2, 2),
    ];

    /// Creates a move, or `None` if either coordinate is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Creates a move from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Row, 0 at the top.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, 0 at the left.
    pub fn col(self) -> usize {
        self.col
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values. Nothing mutates a board once built; every
/// transition in [`crate::rules`] returns a fresh one, so a board can be
/// shared freely between search frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    rows: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit rows.
    ///
    /// Turn alternation is not checked here: the rules assume boards reached
    /// by legal play. Use [`str::parse`] for untrusted input.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Gets the cell at the given move's coordinates.
    pub fn cell(&self, mv: Move) -> Cell {
        self.rows[mv.row][mv.col]
    }

    /// Returns the rows, top to bottom.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.rows
    }

    /// Iterates every cell with its coordinates in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        Move::ALL.into_iter().map(|mv| (mv, self.cell(mv)))
    }

    /// Number of cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.cells()
            .filter(|(_, cell)| *cell == Cell::Occupied(player))
            .count()
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells().filter(|(_, cell)| !cell.is_empty()).count()
    }

    /// Compact row-major notation, e.g. `XX.OO....`.
    pub fn encode(&self) -> String {
        self.cells().map(|(_, cell)| cell.symbol()).collect()
    }

    /// Returns a copy with `player`'s mark at `mv`, whatever was there.
    pub(crate) fn with_mark(mut self, mv: Move, player: Player) -> Self {
        self.rows[mv.row][mv.col] = Cell::Occupied(player);
        self
    }
}

impl std::fmt::Display for Board {
    /// Grid with empty cells numbered 1-9 for human selection.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Cell::Empty => write!(f, "{}", row * 3 + col + 1)?,
                    Cell::Occupied(player) => write!(f, "{player}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Result of the game on a given board.
///
/// Always derived from a board, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// X completed a line.
    XWins,
    /// O completed a line.
    OWins,
    /// The board is full and nobody won.
    Draw,
    /// Moves remain and nobody has won yet.
    InProgress,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::XWins => Some(Player::X),
            Outcome::OWins => Some(Player::O),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }

    /// Returns true once the game is over.
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::XWins => write!(f, "Player X wins"),
            Outcome::OWins => write!(f, "Player O wins"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::InProgress => write!(f, "In progress"),
        }
    }
}
