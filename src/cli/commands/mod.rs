//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific flag combinations
//! 2. Calls the Grafana client (at most once per invocation)
//! 3. Renders and prints the result
//!
//! # Async Commands
//!
//! Client calls are async because they involve network I/O. Each handler is
//! a synchronous wrapper that owns a tokio runtime and runs its async body
//! to completion.

mod completion;
mod dashboard;
mod folder;

pub use completion::completion;

use anyhow::Result;

use crate::cli::args::{Command, DashboardAction, FolderAction};
use crate::config::Settings;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, settings: &Settings) -> Result<()> {
    match command {
        Command::Folder { action } => match action {
            FolderAction::List => folder::list(settings),
            FolderAction::Get { id, uid } => folder::get(settings, id, uid.as_deref()),
            FolderAction::Create { title, uid, file } => folder::create(
                settings,
                title.as_deref(),
                uid.as_deref(),
                file.as_deref(),
            ),
            FolderAction::Delete { uid } => folder::delete(settings, &uid),
        },
        Command::Dashboard { action } => match action {
            DashboardAction::List => dashboard::list(settings),
            DashboardAction::Get { uid } => dashboard::get(settings, &uid),
            DashboardAction::Create { file } => dashboard::create(settings, &file),
            DashboardAction::Delete { uid } => dashboard::delete(settings, &uid),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}
