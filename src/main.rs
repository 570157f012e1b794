//! Docdex - documentation page fetcher
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use docdex::cli::{Cli, Commands};
use docdex::config::ConfigManager;
use docdex::error::DocdexResult;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> DocdexResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("docdex=warn"),
        1 => EnvFilter::new("docdex=info"),
        _ => EnvFilter::new("docdex=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Load configuration
    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };
    let config = config_manager.load().await?;

    // Dispatch to command
    match cli.command {
        Commands::Fetch(args) => docdex::cli::commands::fetch(args, &config).await,
        Commands::Follow(args) => docdex::cli::commands::follow(args, &config).await,
        Commands::Config(args) => docdex::cli::commands::config(args, &config).await,
    }
}
