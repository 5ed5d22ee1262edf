use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;
pub mod prompt;

/// Plex library probe and statistics
#[derive(Parser)]
#[command(name = "plex-tools")]
#[command(about = "Probe Plex libraries and summarise their media")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List every media part in a library
    Probe(commands::probe::ProbeCommand),
    /// Summarise the media in a library
    Statistics(commands::statistics::StatisticsCommand),
}

pub async fn run() -> AppResult<()> {
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Probe(command) => command.run().await,
        Commands::Statistics(command) => command.run().await,
    }
}
