//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Docdex - documentation page fetcher
///
/// Fetches documentation pages by navigation path, renders their markdown,
/// and caches every resolved document for the lifetime of the process.
#[derive(Parser, Debug)]
#[command(name = "docdex")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "DOCDEX_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one document and print its rendered contents
    Fetch(FetchArgs),

    /// Follow navigation paths from stdin, printing each document
    Follow(FollowArgs),

    /// Show or initialize configuration
    Config(ConfigArgs),
}

/// Arguments for the fetch command
#[derive(Parser, Debug)]
pub struct FetchArgs {
    /// Navigation path of the document (empty for the index)
    #[arg(default_value = "")]
    pub path: String,

    /// Override the configured base href
    #[arg(short, long)]
    pub base: Option<String>,
}

/// Arguments for the follow command
#[derive(Parser, Debug)]
pub struct FollowArgs {
    /// Override the configured base href
    #[arg(short, long)]
    pub base: Option<String>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Config action (defaults to show)
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Print the config file path
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn fetch_path_defaults_to_empty() {
        let cli = Cli::parse_from(["docdex", "fetch"]);
        match cli.command {
            Commands::Fetch(args) => assert_eq!(args.path, ""),
            other => panic!("expected fetch, got {:?}", other),
        }
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::parse_from(["docdex", "-vv", "fetch", "guide"]);
        assert_eq!(cli.verbose, 2);
    }
}
