//! Command-line interface for strictly_solver.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_solver::Player;

/// Strictly Solver - perfect-play tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_solver")]
#[command(about = "Play against, or query, a perfect tic-tac-toe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game against the engine
    Play {
        /// Mark the engine plays (x or o). Overrides the config file.
        #[arg(short, long)]
        engine: Option<Player>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the best move for a board
    Best {
        /// Board as nine cells, e.g. "XX. .O. ..." (X, O, and . for empty)
        #[arg(short, long)]
        board: String,

        /// Player to move (defaults to whoever is due under alternating play)
        #[arg(short, long)]
        to_move: Option<Player>,

        /// Player the score is reported for (defaults to the player to move)
        #[arg(short, long)]
        optimize_for: Option<Player>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides from the empty board
    Selfplay,
}
