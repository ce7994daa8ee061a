//! cli::input
//!
//! File-sourced record payloads.
//!
//! Deserialization failures propagate as [`InputError`] - a payload file
//! that does not parse aborts the command before any client call.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::client::DashboardModel;

/// Errors from reading a payload file.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse '{path}': {message}")]
    Parse { path: PathBuf, message: String },
}

/// Folder definition accepted in file mode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FolderPayload {
    /// Folder title
    pub title: String,
    /// Explicit uid; absent or empty means server-assigned
    #[serde(default)]
    pub uid: Option<String>,
}

/// Read a folder payload from a JSON file.
pub fn folder_payload(path: &Path) -> Result<FolderPayload, InputError> {
    read_json(path)
}

/// Read a raw dashboard model from a JSON file.
pub fn dashboard_model(path: &Path) -> Result<DashboardModel, InputError> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let contents = fs::read_to_string(path).map_err(|e| InputError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&contents).map_err(|e| InputError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
