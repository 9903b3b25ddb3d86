//! Google Analytics Measurement Protocol sink.

use async_trait::async_trait;
use tracing::{debug, info};

use super::sink::{AnalyticsError, AnalyticsResult, AnalyticsSink};
use crate::domain::event::{EVENT_CATEGORY, RedirectEvent};

const COLLECT_URL: &str = "https://www.google-analytics.com/collect";
const DEBUG_COLLECT_URL: &str = "https://www.google-analytics.com/debug/collect";

/// Measurement Protocol v1 implementation of [`AnalyticsSink`].
///
/// Events are posted as form-encoded event hits. The raw user agent travels
/// in the protocol's `ua` override parameter so the backend attributes the
/// hit to the original client rather than to this service.
pub struct GoogleAnalyticsSink {
    http: reqwest::Client,
    tracking_id: String,
    client_id: String,
    endpoint: &'static str,
}

impl GoogleAnalyticsSink {
    /// Creates a sink for the given tracking property.
    ///
    /// # Arguments
    ///
    /// - `http` - shared HTTP client
    /// - `tracking_id` - Measurement Protocol property id (`UA-XXXX-Y`)
    /// - `client_id` - anonymous client identifier attached to every hit
    /// - `debug` - when `true`, hits go to the validation endpoint, which
    ///   echoes parser results instead of recording anything
    pub fn new(http: reqwest::Client, tracking_id: String, client_id: String, debug: bool) -> Self {
        let endpoint = if debug { DEBUG_COLLECT_URL } else { COLLECT_URL };
        info!("Analytics sink ready (endpoint: {endpoint})");

        Self {
            http,
            tracking_id,
            client_id,
            endpoint,
        }
    }

    /// Builds the form payload for an event hit.
    fn payload(&self, event: &RedirectEvent) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("v", "1".to_string()),
            ("tid", self.tracking_id.clone()),
            ("cid", self.client_id.clone()),
            ("t", "event".to_string()),
            ("ec", EVENT_CATEGORY.to_string()),
            ("ea", event.action.as_str().to_string()),
            ("el", event.phone.clone()),
            ("cd1", event.device.as_str().to_string()),
        ];

        if let Some(ua) = &event.user_agent {
            params.push(("ua", ua.clone()));
        }

        params
    }
}

#[async_trait]
impl AnalyticsSink for GoogleAnalyticsSink {
    async fn send(&self, event: &RedirectEvent) -> AnalyticsResult<()> {
        let response = self
            .http
            .post(self.endpoint)
            .form(&self.payload(event))
            .send()
            .await
            .map_err(|e| AnalyticsError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyticsError::Status(status.as_u16()));
        }

        debug!(
            action = event.action.as_str(),
            label = %event.phone,
            "Event hit accepted"
        );

        Ok(())
    }
}
