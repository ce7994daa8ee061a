//! cli::commands::folder
//!
//! Folder operations: list, get, create, delete.
//!
//! # Example
//!
//! ```bash
//! grafanactl folder list
//! grafanactl folder get --uid production
//! grafanactl folder create --title "Production" --uid production
//! grafanactl folder delete --uid production
//! ```

use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::cli::input;
use crate::cli::validate::{self, CreateMode, FolderSelector};
use crate::client::{self, GrafanaClient};
use crate::config::Settings;
use crate::render::{self, FOLDER_COL_WIDTH};

/// List all folders.
pub fn list(settings: &Settings) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(list_async(settings))
}

async fn list_async(settings: &Settings) -> Result<()> {
    debug!("listing folders");
    let client = client::connect(settings)?;
    let folders = client.folders().await?;

    let out = render::render(&folders, settings.output, FOLDER_COL_WIDTH)?;
    println!("{}", out);
    Ok(())
}

/// Search a folder by id or uid.
pub fn get(settings: &Settings, id: Option<i64>, uid: Option<&str>) -> Result<()> {
    let selector = validate::folder_selector(id, uid)?;
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(get_async(settings, selector))
}

async fn get_async(settings: &Settings, selector: FolderSelector) -> Result<()> {
    debug!("getting folder");
    let client = client::connect(settings)?;
    let folder = match selector {
        FolderSelector::Id(id) => client.folder_by_id(id).await?,
        FolderSelector::Uid(uid) => client.folder_by_uid(&uid).await?,
    };

    let out = render::render_one(&folder, settings.output, FOLDER_COL_WIDTH)?;
    println!("{}", out);
    Ok(())
}

/// Create a folder from inline fields or a payload file.
pub fn create(
    settings: &Settings,
    title: Option<&str>,
    uid: Option<&str>,
    file: Option<&Path>,
) -> Result<()> {
    let mode = validate::folder_create_mode(title, uid, file)?;
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(create_async(settings, mode))
}

async fn create_async(settings: &Settings, mode: CreateMode) -> Result<()> {
    debug!("creating folder");
    let (title, uid) = match mode {
        CreateMode::Inline { title, uid } => (title, uid),
        CreateMode::File(path) => {
            let payload = input::folder_payload(&path)?;
            (payload.title, payload.uid)
        }
    };
    // An empty uid means server-assigned, same as no uid at all.
    let uid = uid.filter(|uid| !uid.is_empty());

    let client = client::connect(settings)?;
    let folder = match uid.as_deref() {
        Some(uid) => client.create_folder_with_uid(&title, uid).await?,
        None => client.create_folder(&title).await?,
    };

    println!("folder id {} created", folder.id);
    Ok(())
}

/// Delete a folder by uid.
pub fn delete(settings: &Settings, uid: &str) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(delete_async(settings, uid))
}

async fn delete_async(settings: &Settings, uid: &str) -> Result<()> {
    debug!("deleting folder");
    let client = client::connect(settings)?;
    client.delete_folder(uid).await?;

    println!("Folder {} deleted", uid);
    Ok(())
}
