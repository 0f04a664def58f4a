//! Relay HTTP client.

use shark_core::models::{DownloadRequest, DownloadResult, RelayStats};
use std::time::Duration;
use tracing::debug;

/// Failure talking to the relay.
#[derive(Debug, thiserror::Error)]
pub enum RelayClientError {
    /// Connection, timeout or non-2xx status
    #[error("Relay request failed: {0}")]
    Network(#[source] reqwest::Error),
    /// Body was not the expected JSON
    #[error("Relay response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
}

impl From<reqwest::Error> for RelayClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e)
        } else {
            Self::Network(e)
        }
    }
}

/// Client for `POST /download` and `GET /stats`.
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: reqwest::Client,
    base_url: String,
}

impl RelayClient {
    /// Creates a client for the relay at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, RelayClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RelayClientError::Network)?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Requests a download.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an undecodable body.
    pub async fn download(
        &self,
        request: &DownloadRequest,
    ) -> Result<DownloadResult, RelayClientError> {
        debug!(url = %request.url, quality = %request.quality, "Calling relay /download");
        let result = self
            .client
            .post(self.endpoint("download"))
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(result)
    }

    /// Fetches the relay counters.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an undecodable body.
    pub async fn stats(&self) -> Result<RelayStats, RelayClientError> {
        let stats = self
            .client
            .get(self.endpoint("stats"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(stats)
    }
}
