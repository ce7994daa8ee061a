//! cli::logging
//!
//! Process-wide logging setup.
//!
//! Log output goes to stderr so rendered records on stdout stay clean for
//! piping.

use anyhow::{anyhow, Result};
use tracing::Level;

use crate::config::Verbosity;

/// Install the global tracing subscriber at the given verbosity.
///
/// Must run before any subcommand body; callable once per process.
pub fn init(verbosity: Verbosity) -> Result<()> {
    let level = match verbosity {
        Verbosity::Debug => Level::DEBUG,
        Verbosity::Info => Level::INFO,
        Verbosity::Warn => Level::WARN,
        Verbosity::Error => Level::ERROR,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
