//! Terminal host for the strictly_solver engine.
//!
//! The binary is a thin shell over these modules: [`cli`] parses arguments,
//! [`config`] resolves play settings, and [`run`] drives the engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod run;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, PlayConfig};
pub use run::{BestReport, Input, analyze, run_best, run_play, run_selfplay};
