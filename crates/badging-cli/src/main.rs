//! Command-line host for the badge service
//!
//! Formats badge labels and replays scripted page activity through the full
//! bind, marshal and pump path.

use anyhow::{Context, Result};
use badging_core::BadgeConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::{
    format::{handle_format_command, FormatCommand},
    simulate::{handle_simulate_command, SimulateCommand},
};

#[derive(Parser)]
#[command(name = "badging")]
#[command(about = "Badging - app icon badge service host", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path (TOML); BADGING_* variables are applied on top
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the label shown for a badge value
    Format(FormatCommand),

    /// Replay a script of badge calls through a host
    Simulate(SimulateCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = BadgeConfig::load(cli.config.as_deref()).context("loading badge configuration")?;

    match cli.command {
        Commands::Format(cmd) => handle_format_command(cmd, config)?,
        Commands::Simulate(cmd) => handle_simulate_command(cmd, config)?,
    }

    Ok(())
}
