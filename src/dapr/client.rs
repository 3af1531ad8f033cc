//! HTTP client for the Dapr sidecar's state API.

use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::SidecarError;
use crate::metrics;

use super::types::StateEntry;

/// Client for the co-located Dapr sidecar.
#[derive(Debug, Clone)]
pub struct DaprClient {
    /// HTTP client for sidecar requests.
    http: reqwest::Client,
    /// Base URL for the state API, e.g. `http://localhost:3500/v1.0/state`.
    state_url: String,
}

impl DaprClient {
    /// Create a new sidecar client from config.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            // Sidecar is on loopback; keep connections alive for reuse.
            .tcp_nodelay(true)
            .tcp_keepalive(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            state_url: config.state_url(),
        }
    }

    /// Build a client against an explicit state URL (used by tests).
    pub fn with_state_url(state_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            state_url: state_url.into(),
        }
    }

    /// Get the state API base URL.
    pub fn state_url(&self) -> &str {
        &self.state_url
    }

    /// Persist a single key/value pair through the state API.
    ///
    /// Returns the sidecar's HTTP status. Callers decide whether to branch
    /// on it; a non-2xx status is not an error here, only a failed request.
    #[instrument(skip(self, value), fields(key = %key))]
    pub async fn save_state(&self, key: &str, value: Value) -> Result<StatusCode, SidecarError> {
        let payload = [StateEntry::new(key, value)];

        let response = self.http.post(&self.state_url).json(&payload).send().await?;

        let status = response.status();
        debug!(%status, "state write completed");
        metrics::inc_state_writes();

        Ok(status)
    }

    /// Read the value stored under `key` from the state API.
    ///
    /// The body is passed through as raw JSON. An empty body (no value
    /// stored) decodes as JSON `null`.
    #[instrument(skip(self), fields(key = %key))]
    pub async fn get_state(&self, key: &str) -> Result<Value, SidecarError> {
        let url = format!("{}/{}", self.state_url, key);

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(%status, bytes = body.len(), "state read completed");
        metrics::inc_state_reads();

        if body.is_empty() {
            return Ok(Value::Null);
        }

        let value: Value = serde_json::from_slice(&body)?;
        Ok(value)
    }
}
