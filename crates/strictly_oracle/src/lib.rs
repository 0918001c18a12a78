//! Strictly Oracle - command-line front end for the tic-tac-toe engine
//!
//! # Architecture
//!
//! - **CLI**: clap argument parsing ([`Cli`])
//! - **Config**: TOML settings with CLI overrides ([`OracleConfig`])
//! - **Players**: human and engine players behind one trait
//! - **Orchestrator**: runs a game between two players
//! - **Commands**: `best-move`, `analyze`, `play`, `self-play`

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod orchestrator;
mod output;
mod players;

pub mod commands;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, OracleConfig, OutputFormat};

// Crate-level exports - Players and orchestration
pub use orchestrator::{GameEvent, GameSummary, Orchestrator, PlayedMove};
pub use players::{EngineAI, HumanPlayer, Player, parse_move};

// Crate-level exports - Output
pub use output::{AnalysisOutput, BestMoveOutput, MoveValue, describe_value};
