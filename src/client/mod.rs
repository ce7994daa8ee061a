//! client
//!
//! Abstraction over the Grafana management API.
//!
//! # Architecture
//!
//! The `GrafanaClient` trait defines the capability surface the command
//! layer depends on. Commands use the [`connect`] factory rather than
//! constructing the HTTP implementation directly, so the point where a
//! missing endpoint or credential surfaces is the collaborator boundary,
//! not the settings resolver.
//!
//! # Modules
//!
//! - `traits`: Core `GrafanaClient` trait and record types
//! - [`http`]: HTTP implementation against the Grafana REST API
//! - [`mock`]: In-memory implementation for deterministic testing

pub mod http;
pub mod mock;
mod traits;

pub use http::HttpGrafanaClient;
pub use traits::*;

use crate::config::Settings;

/// Construct the HTTP client from resolved settings.
///
/// # Errors
///
/// Returns `ClientError::MissingEndpoint` or `ClientError::MissingCredential`
/// when the corresponding setting resolved to its empty default.
pub fn connect(settings: &Settings) -> Result<HttpGrafanaClient, ClientError> {
    if settings.url.is_empty() {
        return Err(ClientError::MissingEndpoint);
    }
    if settings.api_key.is_empty() {
        return Err(ClientError::MissingCredential);
    }
    Ok(HttpGrafanaClient::new(&settings.url, &settings.api_key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_requires_endpoint() {
        let settings = Settings {
            api_key: "key".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            connect(&settings),
            Err(ClientError::MissingEndpoint)
        ));
    }

    #[test]
    fn connect_requires_credential() {
        let settings = Settings {
            url: "http://grafana.local".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            connect(&settings),
            Err(ClientError::MissingCredential)
        ));
    }

    #[test]
    fn connect_with_both_succeeds() {
        let settings = Settings {
            url: "http://grafana.local".to_string(),
            api_key: "key".to_string(),
            ..Default::default()
        };
        assert!(connect(&settings).is_ok());
    }
}
