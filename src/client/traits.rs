//! client::traits
//!
//! GrafanaClient trait definition and record types.
//!
//! # Design
//!
//! The `GrafanaClient` trait is async because every operation involves
//! network I/O. All methods return `Result` so API failures surface to the
//! caller verbatim; the command layer treats them as fatal.
//!
//! Records are immutable value objects: the client builds them from API
//! responses and the renderer consumes them once. No component retains them
//! beyond the invocation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The raw JSON model of a dashboard, as stored by Grafana.
pub type DashboardModel = serde_json::Map<String, serde_json::Value>;

/// Errors from client construction and API operations.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// No endpoint resolved; set `--url`, the `URL` variable, or the `url` key.
    #[error("no Grafana URL configured (set --url, the URL environment variable, or the url config key)")]
    MissingEndpoint,

    /// No credential resolved; set `--key`, the `APIKEY` variable, or the `apiKey` key.
    #[error("no Grafana API key configured (set --key, the APIKEY environment variable, or the apiKey config key)")]
    MissingCredential,

    /// Authentication failed (invalid token, expired, insufficient permissions).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),
}

/// A Grafana folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    /// Numeric folder id
    pub id: i64,
    /// Unique folder id
    pub uid: String,
    /// Folder title
    pub title: String,
}

/// A Grafana dashboard.
///
/// `model` carries the raw dashboard JSON when the record came from a
/// single-dashboard fetch; list results carry an empty model because the
/// search API returns summaries only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Numeric dashboard id
    pub id: i64,
    /// Unique dashboard id
    pub uid: String,
    /// Dashboard title
    pub title: String,
    /// Title of the containing folder (empty for the General folder)
    #[serde(rename = "folderTitle", default)]
    pub folder_title: String,
    /// Raw dashboard model
    #[serde(default, skip_serializing_if = "DashboardModel::is_empty")]
    pub model: DashboardModel,
}

impl Dashboard {
    /// Build a dashboard record from its raw model.
    ///
    /// The identifying fields are lifted out of the model; fields the model
    /// does not carry default to zero/empty.
    pub fn from_model(model: DashboardModel, folder_title: String) -> Self {
        let id = model.get("id").and_then(|v| v.as_i64()).unwrap_or(0);
        let uid = model
            .get("uid")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let title = model
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        Self {
            id,
            uid,
            title,
            folder_title,
            model,
        }
    }
}

/// Response to a dashboard create call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardCreated {
    /// Numeric id assigned to the dashboard
    pub id: i64,
    /// Unique id assigned to the dashboard
    pub uid: String,
    /// Access URL of the created dashboard
    pub url: String,
    /// API status string (e.g. "success")
    pub status: String,
}

/// The GrafanaClient trait: the capability surface for the command layer.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// All methods return `Result<T, ClientError>`. Transport, auth, and
/// not-found failures pass through without retry; the command layer reports
/// them and exits non-zero.
#[async_trait]
pub trait GrafanaClient: Send + Sync {
    /// List all folders.
    async fn folders(&self) -> Result<Vec<Folder>, ClientError>;

    /// Get a folder by numeric id.
    async fn folder_by_id(&self, id: i64) -> Result<Folder, ClientError>;

    /// Get a folder by unique id.
    async fn folder_by_uid(&self, uid: &str) -> Result<Folder, ClientError>;

    /// Create a folder with a server-assigned uid.
    async fn create_folder(&self, title: &str) -> Result<Folder, ClientError>;

    /// Create a folder with an explicit uid.
    async fn create_folder_with_uid(&self, title: &str, uid: &str) -> Result<Folder, ClientError>;

    /// Delete a folder by unique id.
    async fn delete_folder(&self, uid: &str) -> Result<(), ClientError>;

    /// List all dashboards.
    async fn dashboards(&self) -> Result<Vec<Dashboard>, ClientError>;

    /// Get a dashboard by unique id, including its raw model.
    async fn dashboard_by_uid(&self, uid: &str) -> Result<Dashboard, ClientError>;

    /// Create a dashboard from its raw model.
    async fn create_dashboard(&self, model: DashboardModel) -> Result<DashboardCreated, ClientError>;

    /// Delete a dashboard by unique id.
    ///
    /// Returns the title of the deleted dashboard.
    async fn delete_dashboard(&self, uid: &str) -> Result<String, ClientError>;
}
