//! Command-line interface for strictly_oracle.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use strictly_tictactoe::{Board, Player};

/// Strictly Oracle - perfect-play tic-tac-toe engine
#[derive(Parser, Debug)]
#[command(name = "strictly_oracle")]
#[command(about = "Ask a minimax engine for optimal tic-tac-toe moves", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, global = true, default_value = "strictly_oracle.toml")]
    pub config: std::path::PathBuf,

    /// Output format, overrides the config file
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print search statistics, overrides the config file
    #[arg(long, global = true)]
    pub stats: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the engine's move for the side to move
    BestMove {
        /// Board in compact notation, e.g. "XX./OO./..."
        board: Board,
    },

    /// Print the exact value of every legal move
    Analyze {
        /// Board in compact notation
        board: Board,
    },

    /// Play against the engine on the terminal
    Play {
        /// Mark the human plays (x moves first)
        #[arg(long)]
        human: Option<Player>,
    },

    /// Let the engine play both sides to the end
    SelfPlay {
        /// Starting board (defaults to empty)
        board: Option<Board>,
    },
}
