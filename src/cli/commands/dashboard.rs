//! cli::commands::dashboard
//!
//! Dashboard operations: list, get, create, delete.

use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::cli::input;
use crate::client::{self, GrafanaClient};
use crate::config::Settings;
use crate::render::{self, DASHBOARD_COL_WIDTH};

/// List all dashboards.
pub fn list(settings: &Settings) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(list_async(settings))
}

async fn list_async(settings: &Settings) -> Result<()> {
    debug!("listing dashboards");
    let client = client::connect(settings)?;
    let dashboards = client.dashboards().await?;

    let out = render::render(&dashboards, settings.output, DASHBOARD_COL_WIDTH)?;
    println!("{}", out);
    Ok(())
}

/// Search a dashboard by uid.
pub fn get(settings: &Settings, uid: &str) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(get_async(settings, uid))
}

async fn get_async(settings: &Settings, uid: &str) -> Result<()> {
    debug!("getting dashboard");
    let client = client::connect(settings)?;
    let dashboard = client.dashboard_by_uid(uid).await?;

    let out = render::render_one(&dashboard, settings.output, DASHBOARD_COL_WIDTH)?;
    println!("{}", out);
    Ok(())
}

/// Create a dashboard from a model file.
pub fn create(settings: &Settings, file: &Path) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(create_async(settings, file))
}

async fn create_async(settings: &Settings, file: &Path) -> Result<()> {
    debug!("creating dashboard");
    let model = input::dashboard_model(file)?;

    let client = client::connect(settings)?;
    let created = client.create_dashboard(model).await?;

    println!("dashboard id {} created at {}", created.id, created.url);
    Ok(())
}

/// Delete a dashboard by uid.
pub fn delete(settings: &Settings, uid: &str) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(delete_async(settings, uid))
}

async fn delete_async(settings: &Settings, uid: &str) -> Result<()> {
    debug!("deleting dashboard");
    let client = client::connect(settings)?;
    let title = client.delete_dashboard(uid).await?;

    println!("Dashboard {} deleted", title);
    Ok(())
}
