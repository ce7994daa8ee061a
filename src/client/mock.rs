//! client::mock
//!
//! Mock client implementation for deterministic testing.
//!
//! # Design
//!
//! The mock stores folders and dashboards in memory, records every
//! operation for later verification, and can be scripted to fail so error
//! paths are exercisable without a server.
//!
//! # Example
//!
//! ```
//! use grafanactl::client::mock::MockClient;
//! use grafanactl::client::GrafanaClient;
//!
//! # tokio_test::block_on(async {
//! let client = MockClient::new();
//!
//! let folder = client.create_folder("Production").await.unwrap();
//! assert_eq!(folder.id, 1);
//! assert_eq!(folder.title, "Production");
//!
//! let listed = client.folders().await.unwrap();
//! assert_eq!(listed.len(), 1);
//! # });
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::traits::{
    ClientError, Dashboard, DashboardCreated, DashboardModel, Folder, GrafanaClient,
};

/// Mock client for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockClient {
    inner: Arc<Mutex<MockClientInner>>,
}

#[derive(Debug)]
struct MockClientInner {
    folders: Vec<Folder>,
    dashboards: Vec<Dashboard>,
    next_folder_id: i64,
    next_dashboard_id: i64,
    fail_with: Option<ClientError>,
    operations: Vec<Operation>,
}

impl Default for MockClientInner {
    fn default() -> Self {
        Self {
            folders: Vec::new(),
            dashboards: Vec::new(),
            next_folder_id: 1,
            next_dashboard_id: 1,
            fail_with: None,
            operations: Vec::new(),
        }
    }
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Folders,
    FolderById(i64),
    FolderByUid(String),
    CreateFolder {
        title: String,
        uid: Option<String>,
    },
    DeleteFolder(String),
    Dashboards,
    DashboardByUid(String),
    CreateDashboard,
    DeleteDashboard(String),
}

impl MockClient {
    /// Create a new empty mock client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock client with pre-existing folders.
    pub fn with_folders(folders: Vec<Folder>) -> Self {
        let next_folder_id = folders.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(Mutex::new(MockClientInner {
                folders,
                next_folder_id,
                next_dashboard_id: 1,
                ..Default::default()
            })),
        }
    }

    /// Create a mock client with pre-existing dashboards.
    pub fn with_dashboards(dashboards: Vec<Dashboard>) -> Self {
        let next_dashboard_id = dashboards.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        Self {
            inner: Arc::new(Mutex::new(MockClientInner {
                dashboards,
                next_folder_id: 1,
                next_dashboard_id,
                ..Default::default()
            })),
        }
    }

    /// Script every subsequent call to fail with the given error.
    pub fn fail_with(&self, error: ClientError) {
        self.inner.lock().unwrap().fail_with = Some(error);
    }

    /// Get the operations recorded so far.
    pub fn operations(&self) -> Vec<Operation> {
        self.inner.lock().unwrap().operations.clone()
    }

    fn begin(&self, op: Operation) -> Result<(), ClientError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(op);
        match &inner.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl GrafanaClient for MockClient {
    async fn folders(&self) -> Result<Vec<Folder>, ClientError> {
        self.begin(Operation::Folders)?;
        Ok(self.inner.lock().unwrap().folders.clone())
    }

    async fn folder_by_id(&self, id: i64) -> Result<Folder, ClientError> {
        self.begin(Operation::FolderById(id))?;
        self.inner
            .lock()
            .unwrap()
            .folders
            .iter()
            .find(|f| f.id == id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("folder id {}", id)))
    }

    async fn folder_by_uid(&self, uid: &str) -> Result<Folder, ClientError> {
        self.begin(Operation::FolderByUid(uid.to_string()))?;
        self.inner
            .lock()
            .unwrap()
            .folders
            .iter()
            .find(|f| f.uid == uid)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("folder {}", uid)))
    }

    async fn create_folder(&self, title: &str) -> Result<Folder, ClientError> {
        self.begin(Operation::CreateFolder {
            title: title.to_string(),
            uid: None,
        })?;
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_folder_id;
        inner.next_folder_id += 1;
        let folder = Folder {
            id,
            uid: format!("folder-{}", id),
            title: title.to_string(),
        };
        inner.folders.push(folder.clone());
        Ok(folder)
    }

    async fn create_folder_with_uid(&self, title: &str, uid: &str) -> Result<Folder, ClientError> {
        self.begin(Operation::CreateFolder {
            title: title.to_string(),
            uid: Some(uid.to_string()),
        })?;
        let mut inner = self.inner.lock().unwrap();
        if inner.folders.iter().any(|f| f.uid == uid) {
            return Err(ClientError::ApiError {
                status: 409,
                message: format!("a folder with uid {} already exists", uid),
            });
        }
        let id = inner.next_folder_id;
        inner.next_folder_id += 1;
        let folder = Folder {
            id,
            uid: uid.to_string(),
            title: title.to_string(),
        };
        inner.folders.push(folder.clone());
        Ok(folder)
    }

    async fn delete_folder(&self, uid: &str) -> Result<(), ClientError> {
        self.begin(Operation::DeleteFolder(uid.to_string()))?;
        let mut inner = self.inner.lock().unwrap();
        let before = inner.folders.len();
        inner.folders.retain(|f| f.uid != uid);
        if inner.folders.len() == before {
            return Err(ClientError::NotFound(format!("folder {}", uid)));
        }
        Ok(())
    }

    async fn dashboards(&self) -> Result<Vec<Dashboard>, ClientError> {
        self.begin(Operation::Dashboards)?;
        Ok(self.inner.lock().unwrap().dashboards.clone())
    }

    async fn dashboard_by_uid(&self, uid: &str) -> Result<Dashboard, ClientError> {
        self.begin(Operation::DashboardByUid(uid.to_string()))?;
        self.inner
            .lock()
            .unwrap()
            .dashboards
            .iter()
            .find(|d| d.uid == uid)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("dashboard {}", uid)))
    }

    async fn create_dashboard(&self, model: DashboardModel) -> Result<DashboardCreated, ClientError> {
        self.begin(Operation::CreateDashboard)?;
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_dashboard_id;
        inner.next_dashboard_id += 1;

        let mut dashboard = Dashboard::from_model(model, String::new());
        dashboard.id = id;
        if dashboard.uid.is_empty() {
            dashboard.uid = format!("dashboard-{}", id);
        }
        let created = DashboardCreated {
            id,
            uid: dashboard.uid.clone(),
            url: format!("/d/{}/{}", dashboard.uid, dashboard.title),
            status: "success".to_string(),
        };
        inner.dashboards.push(dashboard);
        Ok(created)
    }

    async fn delete_dashboard(&self, uid: &str) -> Result<String, ClientError> {
        self.begin(Operation::DeleteDashboard(uid.to_string()))?;
        let mut inner = self.inner.lock().unwrap();
        let Some(index) = inner.dashboards.iter().position(|d| d.uid == uid) else {
            return Err(ClientError::NotFound(format!("dashboard {}", uid)));
        };
        let dashboard = inner.dashboards.remove(index);
        Ok(dashboard.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn folder(id: i64, uid: &str, title: &str) -> Folder {
        Folder {
            id,
            uid: uid.to_string(),
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn folders_returns_seeded_records_in_order() {
        let client =
            MockClient::with_folders(vec![folder(1, "a", "A"), folder(2, "b", "B")]);
        let folders = client.folders().await.unwrap();
        assert_eq!(folders.len(), 2);
        assert_eq!(folders[0].uid, "a");
        assert_eq!(folders[1].uid, "b");
    }

    #[tokio::test]
    async fn folder_lookup_by_id_and_uid() {
        let client = MockClient::with_folders(vec![folder(7, "ops", "Operations")]);

        assert_eq!(client.folder_by_id(7).await.unwrap().title, "Operations");
        assert_eq!(client.folder_by_uid("ops").await.unwrap().id, 7);
        assert!(matches!(
            client.folder_by_id(8).await,
            Err(ClientError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn create_folder_with_duplicate_uid_fails() {
        let client = MockClient::with_folders(vec![folder(1, "ops", "Operations")]);
        let result = client.create_folder_with_uid("Other", "ops").await;
        assert!(matches!(result, Err(ClientError::ApiError { status: 409, .. })));
    }

    #[tokio::test]
    async fn delete_folder_removes_record() {
        let client = MockClient::with_folders(vec![folder(1, "ops", "Operations")]);
        client.delete_folder("ops").await.unwrap();
        assert!(client.folders().await.unwrap().is_empty());
        assert!(matches!(
            client.delete_folder("ops").await,
            Err(ClientError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn create_dashboard_assigns_id_and_url() {
        let client = MockClient::new();
        let serde_json::Value::Object(model) = json!({"uid": "req", "title": "Requests"})
        else {
            unreachable!()
        };

        let created = client.create_dashboard(model).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.uid, "req");
        assert_eq!(created.status, "success");

        let title = client.delete_dashboard("req").await.unwrap();
        assert_eq!(title, "Requests");
    }

    #[tokio::test]
    async fn scripted_failure_applies_to_every_call() {
        let client = MockClient::new();
        client.fail_with(ClientError::NetworkError("connection refused".into()));

        assert!(matches!(
            client.folders().await,
            Err(ClientError::NetworkError(_))
        ));
        assert!(matches!(
            client.create_folder("x").await,
            Err(ClientError::NetworkError(_))
        ));
    }

    #[tokio::test]
    async fn operations_are_recorded() {
        let client = MockClient::new();
        let _ = client.folders().await;
        let _ = client.folder_by_uid("ops").await;

        assert_eq!(
            client.operations(),
            vec![Operation::Folders, Operation::FolderByUid("ops".to_string())]
        );
    }
}
