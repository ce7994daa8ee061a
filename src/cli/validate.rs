//! cli::validate
//!
//! Flag-combination preconditions.
//!
//! # Design
//!
//! Each command validates its argument combination here, before a client is
//! constructed or any call leaves the process. Validation produces typed
//! values (a selector, a create mode) so the command bodies match on
//! structure instead of re-inspecting raw options.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A flag combination violated a command's precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("either --id or --uid must be specified")]
    MissingSelector,

    #[error("only one of --id and --uid is allowed at a time")]
    ConflictingSelectors,

    #[error("--file cannot be combined with --title or --uid")]
    FileWithInlineFields,

    #[error("either --file or --title must be specified")]
    MissingCreateInput,
}

/// How a `folder get` invocation identifies its folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderSelector {
    Id(i64),
    Uid(String),
}

/// Validate the identifying flags of `folder get`.
///
/// Exactly one of `id` and `uid` must be set.
pub fn folder_selector(id: Option<i64>, uid: Option<&str>) -> Result<FolderSelector, ArgumentError> {
    match (id, uid) {
        (Some(id), None) => Ok(FolderSelector::Id(id)),
        (None, Some(uid)) => Ok(FolderSelector::Uid(uid.to_string())),
        (Some(_), Some(_)) => Err(ArgumentError::ConflictingSelectors),
        (None, None) => Err(ArgumentError::MissingSelector),
    }
}

/// Input mode of `folder create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateMode {
    /// Inline fields from `--title` and optional `--uid`
    Inline { title: String, uid: Option<String> },
    /// A JSON payload file from `--file`
    File(PathBuf),
}

/// Validate the input flags of `folder create`.
///
/// File mode and inline mode are mutually exclusive; one of them must be
/// given.
pub fn folder_create_mode(
    title: Option<&str>,
    uid: Option<&str>,
    file: Option<&Path>,
) -> Result<CreateMode, ArgumentError> {
    match file {
        Some(path) => {
            if title.is_some() || uid.is_some() {
                return Err(ArgumentError::FileWithInlineFields);
            }
            Ok(CreateMode::File(path.to_path_buf()))
        }
        None => match title {
            Some(title) => Ok(CreateMode::Inline {
                title: title.to_string(),
                uid: uid.map(str::to_string),
            }),
            None => Err(ArgumentError::MissingCreateInput),
        },
    }
}
