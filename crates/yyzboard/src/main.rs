//! `yyzboard` - CLI for the Pearson flight boards
//!
//! This binary loads configuration, fetches one board and prints it.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use tokio_util::sync::CancellationToken;

use yyzboard::cli::{render_table, BoardArgs, Cli, Command, ConfigCommand, OutputFormat};
use yyzboard::{init_logging, BoardService, Config, Direction, FlightClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Board(cmd) => handle_board(&config, cmd.direction.into(), &cmd.args).await,
        Command::Arrivals(args) => handle_board(&config, Direction::Arrivals, &args).await,
        Command::Departures(args) => handle_board(&config, Direction::Departures, &args).await,
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

async fn handle_board(config: &Config, direction: Direction, args: &BoardArgs) -> anyhow::Result<()> {
    let client = FlightClient::new(config.api.clone()).context("building HTTP client")?;
    let service =
        BoardService::new(client).with_featured_airline(config.board.featured_airline.clone());

    // Ctrl-C abandons the in-flight request
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let view = service
        .board(direction, args.airline.as_deref(), &cancel)
        .await
        .with_context(|| format!("fetching {direction} board"))?;

    match args.format {
        OutputFormat::Table => print!("{}", render_table(&view)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                let mut shown = config.clone();
                shown.api.key = config.api.masked_key();
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[API]");
                println!("  Base URL:         {}", config.api.base_url);
                println!("  Host:             {}", config.api.host);
                println!("  Path:             {}", config.api.path);
                println!("  Key:              {}", config.api.masked_key());
                println!("  Timeout (secs):   {}", config.api.timeout_secs);
                println!(
                    "  Live data:        {}",
                    if config.api.is_configured() {
                        "enabled"
                    } else {
                        "disabled (base_url and key required)"
                    }
                );
                println!();
                println!("[Board]");
                println!("  Featured airline: {}", config.board.featured_airline);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path)).context("configuration error")?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
