//! Game orchestration between players.

use crate::players::Player;
use anyhow::Result;
use serde::Serialize;
use strictly_tictactoe::{Board, Move, Outcome, Player as Mark, apply_move, current_player, outcome};
use tracing::{debug, info, instrument};

/// Events reported while a game runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A move was made.
    MoveMade {
        /// Display name of the mover.
        player: String,
        /// Mark that was placed.
        mark: Mark,
        /// Where it was placed.
        position: Move,
        /// Board after the move.
        board: Board,
    },
    /// The game ended.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Display name of the winner, if any.
        winner: Option<String>,
    },
}

/// One played move, kept for the end-of-game summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayedMove {
    /// Mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Move,
}

/// Summary of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    /// Board the game started from.
    pub start: Board,
    /// Moves in the order they were played.
    pub moves: Vec<PlayedMove>,
    /// Final board.
    pub board: Board,
    /// Final outcome.
    pub outcome: Outcome,
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator<'a> {
    board: Board,
    player_x: &'a mut dyn Player,
    player_o: &'a mut dyn Player,
}

impl<'a> Orchestrator<'a> {
    /// Creates an orchestrator starting from `board`.
    pub fn new(board: Board, player_x: &'a mut dyn Player, player_o: &'a mut dyn Player) -> Self {
        Self {
            board,
            player_x,
            player_o,
        }
    }

    /// Runs the game loop to the end, reporting each event to `on_event`.
    ///
    /// A move the rules reject means a player broke its contract; the game
    /// stops with that error rather than asking again.
    #[instrument(skip_all, fields(start = %self.board.encode()))]
    pub fn run(&mut self, mut on_event: impl FnMut(&GameEvent) -> Result<()>) -> Result<GameSummary> {
        info!("Starting game orchestration");
        let start = self.board;
        let mut moves = Vec::new();

        loop {
            let result = outcome(&self.board);
            if result.is_over() {
                let winner = result.winner().map(|mark| self.player(mark).name().to_string());
                info!(%result, ?winner, "Game over");
                on_event(&GameEvent::GameOver {
                    outcome: result,
                    winner,
                })?;
                return Ok(GameSummary {
                    start,
                    moves,
                    board: self.board,
                    outcome: result,
                });
            }

            let board = self.board;
            let mark = current_player(&board);
            let player = self.player(mark);
            debug!(player = %player.name(), %mark, "Waiting for move");
            let position = player.get_move(&board)?;
            let name = player.name().to_string();

            self.board = apply_move(&board, position)?;
            moves.push(PlayedMove { mark, position });

            on_event(&GameEvent::MoveMade {
                player: name,
                mark,
                position,
                board: self.board,
            })?;
        }
    }

    fn player(&mut self, mark: Mark) -> &mut (dyn Player + 'a) {
        match mark {
            Mark::X => &mut *self.player_x,
            Mark::O => &mut *self.player_o,
        }
    }
}
