//! Strictly Solver - terminal host
//!
//! Plays, analyzes, and self-plays tic-tac-toe with a perfect engine.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use strictly_solver_cli::{Cli, Command, PlayConfig, run_best, run_play, run_selfplay};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so boards on stdout stay readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Play { engine, config } => {
            let config = PlayConfig::load(config.as_deref())
                .context("Failed to load play config")?
                .with_engine(engine);
            info!(?config, "Starting interactive play");
            run_play(&config, io::stdin().lock(), &mut stdout)
        }
        Command::Best {
            board,
            to_move,
            optimize_for,
            json,
        } => run_best(&board, to_move, optimize_for, json, &mut stdout),
        Command::Selfplay => run_selfplay(&mut stdout).map(|_| ()),
    }
}
