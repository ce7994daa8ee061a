//! cli
//!
//! Command-line interface layer for grafanactl.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve settings and configure logging exactly once per run, before
//!   any subcommand body executes
//! - Delegate to command handlers and map failures to a non-zero exit code
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, resolves a
//! [`Settings`] through [`crate::config`], and dispatches to the command
//! handlers, which talk to the Grafana API through [`crate::client`].

pub mod args;
pub mod commands;
pub mod input;
pub mod logging;
pub mod validate;

pub use args::{Cli, Shell};

use std::process::ExitCode;
use tracing::{debug, error, info};

use crate::config::Settings;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. Settings resolution
/// and logging setup run once here; every failure after that point is
/// logged at error severity and turned into a failing exit code. Output
/// already written to stdout stands.
pub fn run() -> ExitCode {
    let cli = Cli::parse_args();

    let settings = match Settings::resolve(&cli.overrides()) {
        Ok(settings) => settings,
        Err(err) => {
            // The logger is not configured until verbosity resolves.
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = logging::init(settings.verbosity) {
        eprintln!("error: {}", err);
        return ExitCode::FAILURE;
    }

    info!("grafanactl {}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &settings.config_file {
        debug!("loaded config from {}", path.display());
    }

    match commands::dispatch(cli.command, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
