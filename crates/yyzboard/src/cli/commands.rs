//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::flight::Direction;

/// Options shared by every board command.
#[derive(Debug, Clone, Args)]
pub struct BoardArgs {
    /// Only show flights for this airline ("All" shows every airline)
    #[arg(short, long)]
    pub airline: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Board command arguments.
#[derive(Debug, Args)]
pub struct BoardCommand {
    /// Which board to show
    #[arg(value_enum)]
    pub direction: DirectionArg,

    #[command(flatten)]
    pub args: BoardArgs,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration (the API key is masked)
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Direction argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    /// Arriving flights
    Arrivals,
    /// Departing flights
    Departures,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Arrivals => Self::Arrivals,
            DirectionArg::Departures => Self::Departures,
        }
    }
}

/// Output format for boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table
    #[default]
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_arg_conversion() {
        assert_eq!(Direction::from(DirectionArg::Arrivals), Direction::Arrivals);
        assert_eq!(
            Direction::from(DirectionArg::Departures),
            Direction::Departures
        );
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_board_command_debug() {
        let cmd = BoardCommand {
            direction: DirectionArg::Departures,
            args: BoardArgs {
                airline: Some("WestJet".to_string()),
                format: OutputFormat::Json,
            },
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Departures"));
        assert!(debug_str.contains("WestJet"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
