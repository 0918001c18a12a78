//! Player trait and implementations.

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use strictly_tictactoe::{Board, Move, SearchReport, search};
use tracing::{debug, instrument};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// Implementations must return an empty cell of `board`.
    fn get_move(&mut self, board: &Board) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Engine player backed by alpha-beta search.
#[derive(Debug, Default)]
pub struct EngineAI {
    last_report: Option<SearchReport>,
}

impl EngineAI {
    /// Creates a new engine player.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report from the most recent search, if any.
    pub fn last_report(&self) -> Option<SearchReport> {
        self.last_report
    }
}

impl Player for EngineAI {
    #[instrument(skip_all, fields(board = %board.encode()))]
    fn get_move(&mut self, board: &Board) -> Result<Move> {
        let report = search(board);
        self.last_report = Some(report);
        let mv = report
            .best_move()
            .context("Engine asked to move on a finished board")?;
        debug!(%mv, value = report.value(), nodes = report.stats().nodes, "Engine chose move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        "Engine"
    }
}

/// Human player reading moves from a line-oriented input.
///
/// Accepts a cell number `1`-`9` (as shown on the rendered board) or
/// `row col` with zero-based coordinates. Bad input is reported and asked
/// again; closed input is an error.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a human player over the given input and output.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip_all, fields(player = %self.name))]
    fn get_move(&mut self, board: &Board) -> Result<Move> {
        loop {
            writeln!(self.output, "\n{board}\n")?;
            write!(self.output, "{}, your move (1-9 or \"row col\"): ", self.name)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed before {} moved", self.name);
            }

            match parse_move(&line) {
                Some(mv) if board.cell(mv).is_empty() => return Ok(mv),
                Some(mv) => writeln!(self.output, "Cell {mv} is already taken.")?,
                None => writeln!(self.output, "Could not read {:?} as a move.", line.trim())?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Parses `"5"` (cell number 1-9) or `"1 2"` / `"1,2"` (row and column).
#[instrument]
pub fn parse_move(text: &str) -> Option<Move> {
    let parts: Vec<usize> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;

    match parts.as_slice() {
        [cell] => cell.checked_sub(1).and_then(Move::from_index),
        [row, col] => Move::new(*row, *col),
        _ => None,
    }
}
