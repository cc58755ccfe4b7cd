//! HTTP client for the discovery backend's health API.

use thiserror::Error;
use url::Url;

/// Error type for health fetches.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to discovery backend failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("discovery backend returned status {status}")]
    Status { status: reqwest::StatusCode },
}

/// Client for the per-service health endpoint.
///
/// Holds one connection-pooling HTTP client shared by every spec. No request
/// timeout is configured: a hung backend blocks the poll loop, which is the
/// documented stall mode of the daemon.
pub struct DiscoveryClient {
    http: reqwest::Client,
    base: Url,
}

impl DiscoveryClient {
    pub fn new(base: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    /// Fetch the raw health response body for a service.
    ///
    /// Exactly one GET per call. The returned bytes are the single source of
    /// truth for both fingerprinting and classification.
    pub async fn service_health(&self, service: &str) -> Result<Vec<u8>, FetchError> {
        let url = format!(
            "{}/v1/health/service/{}",
            self.base.as_str().trim_end_matches('/'),
            service
        );
        tracing::debug!(%url, "querying service health");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
