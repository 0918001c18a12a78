//! Rendering of command results as text or JSON.

use crate::config::OutputFormat;
use crate::orchestrator::GameSummary;
use anyhow::Result;
use serde::Serialize;
use std::fmt::Write;
use strictly_tictactoe::{Board, Move, Outcome, Player, SearchReport, SearchStats};

/// Result of the `best-move` command.
#[derive(Debug, Clone, Serialize)]
pub struct BestMoveOutput {
    /// Board in compact notation.
    pub board: String,
    /// Player to move.
    pub to_move: Player,
    /// Current outcome.
    pub outcome: Outcome,
    /// Recommended move, absent when the game is over.
    pub best_move: Option<Move>,
    /// Minimax value of the position from X's perspective.
    pub value: i8,
    /// Search counters, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SearchStats>,
}

impl BestMoveOutput {
    /// Builds the output from a board and its search report.
    pub fn new(board: &Board, report: &SearchReport, show_stats: bool) -> Self {
        Self {
            board: board.encode(),
            to_move: strictly_tictactoe::current_player(board),
            outcome: strictly_tictactoe::outcome(board),
            best_move: report.best_move(),
            value: report.value(),
            stats: show_stats.then(|| report.stats()),
        }
    }
}

/// Result of the `analyze` command.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutput {
    /// Board in compact notation.
    pub board: String,
    /// Player to move.
    pub to_move: Player,
    /// Current outcome.
    pub outcome: Outcome,
    /// Every legal move with its exact value.
    pub moves: Vec<MoveValue>,
}

/// One analysed move.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MoveValue {
    /// The move.
    #[serde(rename = "move")]
    pub position: Move,
    /// Value after the move, from X's perspective.
    pub value: i8,
}

/// Describes a value from X's perspective in words.
pub fn describe_value(value: i8) -> &'static str {
    match value.signum() {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    }
}

/// Renders `best-move` output.
pub fn render_best_move(output: &BestMoveOutput, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(output)?);
    }

    let mut text = String::new();
    match output.best_move {
        Some(mv) => {
            writeln!(text, "{} to move: play {mv} (cell {})", output.to_move, mv.index() + 1)?;
            writeln!(text, "Value with best play: {}", describe_value(output.value))?;
        }
        None => writeln!(text, "Game over: {}", output.outcome)?,
    }
    if let Some(stats) = output.stats {
        writeln!(text, "Searched {} nodes, {} cutoffs", stats.nodes, stats.cutoffs)?;
    }
    Ok(text)
}

/// Renders `analyze` output.
pub fn render_analysis(output: &AnalysisOutput, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(output)?);
    }

    let mut text = String::new();
    if output.outcome.is_over() {
        writeln!(text, "Game over: {}", output.outcome)?;
        return Ok(text);
    }
    writeln!(text, "{} to move", output.to_move)?;
    for entry in &output.moves {
        writeln!(
            text,
            "  {} (cell {}): {}",
            entry.position,
            entry.position.index() + 1,
            describe_value(entry.value)
        )?;
    }
    Ok(text)
}

/// Renders a finished game summary.
pub fn render_summary(summary: &GameSummary, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(summary)?);
    }

    let mut text = String::new();
    writeln!(text, "\n{}\n", summary.board)?;
    writeln!(text, "{} after {} moves", summary.outcome, summary.moves.len())?;
    Ok(text)
}
