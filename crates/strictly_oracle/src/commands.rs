//! Command implementations, independent of where output goes.

use crate::config::{OracleConfig, OutputFormat};
use crate::orchestrator::{GameEvent, GameSummary, Orchestrator};
use crate::output::{
    AnalysisOutput, BestMoveOutput, MoveValue, render_analysis, render_best_move, render_summary,
};
use crate::players::{EngineAI, HumanPlayer, Player};
use anyhow::Result;
use std::io::{BufRead, Write};
use strictly_tictactoe::{Board, Player as Mark, current_player, move_values, outcome, search};
use tracing::{info, instrument};

/// Prints the engine's recommended move.
#[instrument(skip(config, out), fields(board = %board.encode()))]
pub fn best_move(board: &Board, config: &OracleConfig, out: &mut impl Write) -> Result<()> {
    let report = search(board);
    let output = BestMoveOutput::new(board, &report, *config.show_stats());
    write!(out, "{}", render_best_move(&output, *config.format())?)?;
    Ok(())
}

/// Prints every legal move with its exact value.
#[instrument(skip(config, out), fields(board = %board.encode()))]
pub fn analyze(board: &Board, config: &OracleConfig, out: &mut impl Write) -> Result<()> {
    let output = AnalysisOutput {
        board: board.encode(),
        to_move: current_player(board),
        outcome: outcome(board),
        moves: move_values(board)
            .into_iter()
            .map(|(position, value)| MoveValue { position, value })
            .collect(),
    };
    write!(out, "{}", render_analysis(&output, *config.format())?)?;
    Ok(())
}

/// Plays the engine against itself from `board`.
///
/// Text output shows the grid after every move.
#[instrument(skip(config, out), fields(board = %board.encode()))]
pub fn self_play(board: Board, config: &OracleConfig, out: &mut impl Write) -> Result<GameSummary> {
    let mut x = EngineAI::new();
    let mut o = EngineAI::new();
    let format = *config.format();

    let summary = Orchestrator::new(board, &mut x, &mut o).run(|event| {
        if format == OutputFormat::Text {
            write_event(out, event, true)?;
        }
        Ok(())
    })?;

    write!(out, "{}", render_summary(&summary, format)?)?;
    Ok(summary)
}

/// Plays a human against the engine.
///
/// The human reads moves from `input` and sees the board on `prompt`; game
/// events and the final summary go to `out`.
#[instrument(skip_all, fields(human = %config.human()))]
pub fn play<R: BufRead, P: Write, W: Write>(
    config: &OracleConfig,
    input: R,
    prompt: P,
    out: &mut W,
) -> Result<GameSummary> {
    let human_mark = *config.human();
    info!(%human_mark, "Starting interactive game");

    let mut human = HumanPlayer::new("You", input, prompt);
    let mut engine = EngineAI::new();

    writeln!(out, "You play {human_mark}. X moves first.")?;

    let summary = {
        let (player_x, player_o) = match human_mark {
            Mark::X => (&mut human as &mut dyn Player, &mut engine as &mut dyn Player),
            Mark::O => (&mut engine as &mut dyn Player, &mut human as &mut dyn Player),
        };
        Orchestrator::new(Board::new(), player_x, player_o).run(|event| write_event(out, event, false))?
    };

    if *config.show_stats()
        && let Some(report) = engine.last_report()
    {
        writeln!(
            out,
            "Engine's last search: {} nodes, {} cutoffs",
            report.stats().nodes,
            report.stats().cutoffs
        )?;
    }
    write!(out, "{}", render_summary(&summary, OutputFormat::Text)?)?;
    Ok(summary)
}

/// Writes one game event; `show_board` adds the grid after each move.
fn write_event(out: &mut impl Write, event: &GameEvent, show_board: bool) -> Result<()> {
    match event {
        GameEvent::MoveMade {
            player,
            mark,
            position,
            board,
        } => {
            writeln!(out, "{player} ({mark}) plays {position}")?;
            if show_board {
                writeln!(out, "{board}\n")?;
            }
        }
        GameEvent::GameOver { winner: Some(name), .. } => writeln!(out, "{name} won.")?,
        GameEvent::GameOver { winner: None, .. } => writeln!(out, "It's a draw.")?,
    }
    Ok(())
}
