//! Sentry store-API error reporter.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

use super::reporter::ErrorReporter;

/// Errors raised while configuring the reporter from a DSN.
#[derive(Debug, Error)]
pub enum ReportingError {
    #[error("invalid DSN: {0}")]
    InvalidDsn(String),
}

/// Error reporter posting minimal events to a Sentry-compatible store API.
///
/// The DSN (`https://<key>@<host>/<project>`) is parsed once at startup into
/// the store endpoint and auth header. Delivery failures are logged and
/// swallowed.
pub struct SentryReporter {
    http: reqwest::Client,
    store_url: String,
    auth_header: String,
    environment: String,
}

impl SentryReporter {
    /// Builds a reporter from a DSN and deployment-environment label.
    ///
    /// # Errors
    ///
    /// Returns [`ReportingError::InvalidDsn`] if the DSN is not a URL or is
    /// missing the public key or project id.
    pub fn from_dsn(
        http: reqwest::Client,
        dsn: &str,
        environment: &str,
    ) -> Result<Self, ReportingError> {
        let url =
            Url::parse(dsn).map_err(|e| ReportingError::InvalidDsn(format!("not a URL: {e}")))?;

        let key = url.username();
        if key.is_empty() {
            return Err(ReportingError::InvalidDsn(
                "missing public key before '@'".to_string(),
            ));
        }

        let host = url
            .host_str()
            .ok_or_else(|| ReportingError::InvalidDsn("missing host".to_string()))?;

        let project = url.path().trim_matches('/');
        if project.is_empty() {
            return Err(ReportingError::InvalidDsn(
                "missing project id in path".to_string(),
            ));
        }

        let port = url
            .port()
            .map(|p| format!(":{p}"))
            .unwrap_or_default();

        let store_url = format!("{}://{}{}/api/{}/store/", url.scheme(), host, port, project);
        let auth_header = format!(
            "Sentry sentry_version=7, sentry_key={}, sentry_client={}/{}",
            key,
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
        );

        info!("Error reporter ready (project {project})");

        Ok(Self {
            http,
            store_url,
            auth_header,
            environment: environment.to_string(),
        })
    }
}

#[async_trait]
impl ErrorReporter for SentryReporter {
    async fn report(&self, message: &str) {
        let event = json!({
            "message": message,
            "level": "error",
            "platform": "other",
            "environment": self.environment,
            "release": concat!(env!("CARGO_PKG_NAME"), "@", env!("CARGO_PKG_VERSION")),
            "timestamp": Utc::now().to_rfc3339(),
        });

        let result = self
            .http
            .post(&self.store_url)
            .header("X-Sentry-Auth", &self.auth_header)
            .json(&event)
            .send()
            .await;

        match result {
            Ok(response) if !response.status().is_success() => {
                warn!("Error report rejected with status {}", response.status());
            }
            Ok(_) => {}
            Err(e) => {
                warn!("Failed to deliver error report: {}", e);
            }
        }
    }
}
