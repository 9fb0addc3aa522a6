//! Command-line interface for yyzboard.
//!
//! This module provides the CLI structure and board rendering for the
//! `yyzboard` binary.

mod commands;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{BoardArgs, BoardCommand, ConfigCommand, DirectionArg, OutputFormat};
pub use render::render_table;

/// yyzboard - Arrivals and departures at Toronto Pearson
///
/// Fetches live flights from the configured provider and prints a board
/// with the featured airline on top. Sample flights are shown, with a
/// notice, whenever live data is unavailable.
#[derive(Debug, Parser)]
#[command(name = "yyzboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show a board for either direction
    Board(BoardCommand),

    /// Show the arrivals board
    Arrivals(BoardArgs),

    /// Show the departures board
    Departures(BoardArgs),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
