//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version` / `-V`: Show version
//! - `--verbosity <level>` / `-v`: Log level (debug, info, warn, error)
//! - `--config <path>` / `-c`: Config file path
//! - `--url <endpoint>`: Grafana URL
//! - `--key <credential>`: Grafana API key
//! - `--output <format>` / `-o`: Output format (table, json)
//!
//! None of the settings flags carries a parser-level default: each is an
//! `Option` so the resolver can tell "explicitly set" from "absent" and
//! apply source precedence without inspecting parser internals.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::FlagOverrides;

/// grafanactl - A CLI for Grafana's management API
#[derive(Parser, Debug)]
#[command(name = "grafanactl")]
#[command(author, version)]
#[command(about = "A Grafana CLI interface")]
#[command(
    long_about = "A CLI which performs operations against a Grafana\n\
        installation via Grafana's HTTP API."
)]
pub struct Cli {
    /// Log level (debug, info, warn, error)
    #[arg(short, long, global = true, value_name = "LEVEL")]
    pub verbosity: Option<String>,

    /// Config file (default is $HOME/.grafanactl.yaml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Grafana URL (e.g. https://grafana.example.com)
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Grafana API key
    #[arg(long, global = true, value_name = "KEY")]
    pub key: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true, value_name = "FORMAT")]
    pub output: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// The settings flags the user explicitly set, for resolution.
    pub fn overrides(&self) -> FlagOverrides {
        FlagOverrides {
            config: self.config.clone(),
            url: self.url.clone(),
            key: self.key.clone(),
            verbosity: self.verbosity.clone(),
            output: self.output.clone(),
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage Grafana folders
    #[command(
        name = "folder",
        long_about = "Perform operations against Grafana folders:\n\n\
            * List folders\n\
            * Search folders\n\
            * Create folders\n\
            * Delete folders"
    )]
    Folder {
        #[command(subcommand)]
        action: FolderAction,
    },

    /// Manage Grafana dashboards
    #[command(
        name = "dashboard",
        long_about = "Perform operations against Grafana dashboards:\n\n\
            * List dashboards\n\
            * Search dashboards\n\
            * Create dashboards\n\
            * Delete dashboards"
    )]
    Dashboard {
        #[command(subcommand)]
        action: DashboardAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    # Bash (add to ~/.bashrc)
    grafanactl completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    grafanactl completion zsh >> ~/.zshrc"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Folder verbs.
#[derive(Subcommand, Debug)]
pub enum FolderAction {
    /// List all folders
    List,

    /// Search a folder by id or uid
    #[command(
        long_about = "Search a folder either by numeric id or by uid.\n\n\
            Exactly one of --id and --uid must be given.",
        after_help = "\
EXAMPLES:
    grafanactl folder get --id 42
    grafanactl folder get --uid production"
    )]
    Get {
        /// Folder id to search
        #[arg(long)]
        id: Option<i64>,

        /// Folder uid to search
        #[arg(long)]
        uid: Option<String>,
    },

    /// Create a folder
    #[command(
        long_about = "Create a new Grafana folder, either from inline fields \
            or from a JSON file.\n\n\
            --file cannot be combined with --title or --uid.",
        after_help = "\
EXAMPLES:
    grafanactl folder create --title \"Production\"
    grafanactl folder create --title \"Production\" --uid production
    grafanactl folder create --file folder.json"
    )]
    Create {
        /// Create a folder with this title
        #[arg(long)]
        title: Option<String>,

        /// Create the folder with an explicit uid
        #[arg(long)]
        uid: Option<String>,

        /// Create the folder from a JSON file
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Delete a folder
    Delete {
        /// Folder uid
        #[arg(long)]
        uid: String,
    },
}

/// Dashboard verbs.
#[derive(Subcommand, Debug)]
pub enum DashboardAction {
    /// List all dashboards
    List,

    /// Search a dashboard by uid
    Get {
        /// Dashboard uid to search
        #[arg(long)]
        uid: String,
    },

    /// Create a dashboard from a JSON model file
    #[command(after_help = "\
EXAMPLES:
    grafanactl dashboard create --file dashboard.json")]
    Create {
        /// Dashboard model JSON file
        #[arg(short, long, value_name = "PATH")]
        file: PathBuf,
    },

    /// Delete a dashboard
    Delete {
        /// Dashboard uid
        #[arg(long)]
        uid: String,
    },
}

/// Supported shells for completion.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
