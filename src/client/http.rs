//! client::http
//!
//! HTTP implementation of the GrafanaClient trait against the Grafana REST
//! API.
//!
//! # Design
//!
//! One thin method per API operation. Requests carry Bearer authentication
//! and JSON accept headers; responses are mapped through a single error
//! handler so every operation reports auth, not-found, and transport
//! failures the same way.
//!
//! Timeouts and retries are not this layer's concern: each call is made
//! once and the outcome is surfaced verbatim.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use super::traits::{
    ClientError, Dashboard, DashboardCreated, DashboardModel, Folder, GrafanaClient,
};

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "grafanactl";

/// HTTP client for the Grafana management API.
pub struct HttpGrafanaClient {
    /// HTTP client for making requests
    client: Client,
    /// API key sent as a Bearer token
    api_key: String,
    /// Base URL of the Grafana installation, without trailing slash
    base_url: String,
}

// Custom Debug to avoid exposing the API key
impl std::fmt::Debug for HttpGrafanaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGrafanaClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Error body returned by the Grafana API.
#[derive(Debug, Deserialize)]
struct GrafanaErrorResponse {
    message: String,
}

/// Response envelope of `GET /api/dashboards/uid/{uid}`.
#[derive(Debug, Deserialize)]
struct DashboardEnvelope {
    dashboard: DashboardModel,
    #[serde(default)]
    meta: DashboardMeta,
}

#[derive(Debug, Default, Deserialize)]
struct DashboardMeta {
    #[serde(rename = "folderTitle", default)]
    folder_title: String,
}

/// Search hit returned by `GET /api/search?type=dash-db`.
#[derive(Debug, Deserialize)]
struct DashboardHit {
    #[serde(default)]
    id: i64,
    uid: String,
    title: String,
    #[serde(rename = "folderTitle", default)]
    folder_title: String,
}

/// Response of `DELETE /api/dashboards/uid/{uid}`.
#[derive(Debug, Deserialize)]
struct DeleteDashboardResponse {
    #[serde(default)]
    title: String,
}

impl HttpGrafanaClient {
    /// Create a client for the given Grafana installation.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url,
        }
    }

    /// Get the base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an API endpoint.
    fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// Build common headers for API requests.
    fn headers(&self) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|_| ClientError::AuthFailed("API key contains invalid characters".into()))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        Ok(headers)
    }

    /// Handle an API response, deserializing the success body.
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| ClientError::ApiError {
                status: status.as_u16(),
                message: format!("failed to parse response: {}", e),
            })
        } else {
            Err(Self::error_from(response, status).await)
        }
    }

    /// Handle an API response whose success body is irrelevant.
    async fn handle_empty(&self, response: Response) -> Result<(), ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response, status).await)
        }
    }

    /// Map an error response to a `ClientError`.
    async fn error_from(response: Response, status: StatusCode) -> ClientError {
        let message = match response.json::<GrafanaErrorResponse>().await {
            Ok(err) => err.message,
            Err(_) => "unknown error".to_string(),
        };

        match status {
            StatusCode::UNAUTHORIZED => ClientError::AuthFailed("invalid or expired API key".into()),
            StatusCode::FORBIDDEN => ClientError::AuthFailed(format!("permission denied: {}", message)),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            _ => ClientError::ApiError {
                status: status.as_u16(),
                message,
            },
        }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, ClientError> {
        let response = self
            .client
            .get(self.api_url(path))
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| ClientError::NetworkError(e.to_string()))?;
        self.handle_response(response).await
    }

    async fn post_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, ClientError> {
        let response = self
            .client
            .post(self.api_url(path))
            .headers(self.headers()?)
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::NetworkError(e.to_string()))?;
        self.handle_response(response).await
    }

    async fn delete(&self, path: &str) -> Result<Response, ClientError> {
        self.client
            .delete(self.api_url(path))
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| ClientError::NetworkError(e.to_string()))
    }
}

#[async_trait]
impl GrafanaClient for HttpGrafanaClient {
    async fn folders(&self) -> Result<Vec<Folder>, ClientError> {
        self.get_json("folders").await
    }

    async fn folder_by_id(&self, id: i64) -> Result<Folder, ClientError> {
        self.get_json(&format!("folders/id/{}", id)).await
    }

    async fn folder_by_uid(&self, uid: &str) -> Result<Folder, ClientError> {
        self.get_json(&format!("folders/{}", uid)).await
    }

    async fn create_folder(&self, title: &str) -> Result<Folder, ClientError> {
        let body = serde_json::json!({ "title": title });
        self.post_json("folders", &body).await
    }

    async fn create_folder_with_uid(&self, title: &str, uid: &str) -> Result<Folder, ClientError> {
        let body = serde_json::json!({ "title": title, "uid": uid });
        self.post_json("folders", &body).await
    }

    async fn delete_folder(&self, uid: &str) -> Result<(), ClientError> {
        let response = self.delete(&format!("folders/{}", uid)).await?;
        self.handle_empty(response).await
    }

    async fn dashboards(&self) -> Result<Vec<Dashboard>, ClientError> {
        let response = self
            .client
            .get(self.api_url("search"))
            .query(&[("type", "dash-db")])
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| ClientError::NetworkError(e.to_string()))?;
        let hits: Vec<DashboardHit> = self.handle_response(response).await?;

        Ok(hits
            .into_iter()
            .map(|hit| Dashboard {
                id: hit.id,
                uid: hit.uid,
                title: hit.title,
                folder_title: hit.folder_title,
                model: DashboardModel::new(),
            })
            .collect())
    }

    async fn dashboard_by_uid(&self, uid: &str) -> Result<Dashboard, ClientError> {
        let envelope: DashboardEnvelope =
            self.get_json(&format!("dashboards/uid/{}", uid)).await?;
        Ok(Dashboard::from_model(
            envelope.dashboard,
            envelope.meta.folder_title,
        ))
    }

    async fn create_dashboard(&self, model: DashboardModel) -> Result<DashboardCreated, ClientError> {
        let body = serde_json::json!({ "dashboard": model, "overwrite": false });
        self.post_json("dashboards/db", &body).await
    }

    async fn delete_dashboard(&self, uid: &str) -> Result<String, ClientError> {
        let response = self.delete(&format!("dashboards/uid/{}", uid)).await?;
        let deleted: DeleteDashboardResponse = self.handle_response(response).await?;
        Ok(deleted.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_trimmed() {
        let client = HttpGrafanaClient::new("http://grafana.local/", "key");
        assert_eq!(client.base_url(), "http://grafana.local");
        assert_eq!(client.api_url("folders"), "http://grafana.local/api/folders");
    }

    #[test]
    fn debug_hides_api_key() {
        let client = HttpGrafanaClient::new("http://grafana.local", "top-secret");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("top-secret"));
    }
}
