//! Strictly Oracle - perfect-play tic-tac-toe from the command line.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use strictly_oracle::{Cli, Command, OracleConfig, commands};
use strictly_tictactoe::Board;
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so JSON output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    run(cli.command, &config)
}

/// Loads the config file and applies command-line overrides.
#[instrument(skip(cli), fields(path = %cli.config.display()))]
fn resolve_config(cli: &Cli) -> Result<OracleConfig> {
    let mut config = OracleConfig::load_or_default(&cli.config)?;
    if let Some(format) = cli.format {
        config = config.with_format(format);
    }
    if cli.stats {
        config = config.with_show_stats(true);
    }
    if let Command::Play { human: Some(mark) } = cli.command {
        config = config.with_human(mark);
    }
    debug!(?config, "Resolved configuration");
    Ok(config)
}

fn run(command: Command, config: &OracleConfig) -> Result<()> {
    let mut out = io::stdout().lock();
    match command {
        Command::BestMove { board } => commands::best_move(&board, config, &mut out),
        Command::Analyze { board } => commands::analyze(&board, config, &mut out),
        Command::SelfPlay { board } => {
            commands::self_play(board.unwrap_or_else(Board::new), config, &mut out).map(|_| ())
        }
        Command::Play { .. } => {
            commands::play(config, io::stdin().lock(), io::stdout(), &mut out).map(|_| ())
        }
    }
}
