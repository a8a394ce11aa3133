use std::time::Duration;

use reqwest::{Client, Url};

use business::domain::errors::UpstreamError;

/// Shared HTTP client configuration for one upstream service.
pub struct UpstreamClient {
    pub client: Client,
    pub base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Joins path segments onto the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            tracing::error!(base_url = %self.base_url, error = %e, "Invalid upstream base URL");
            UpstreamError::Transport
        })?;
        url.path_segments_mut()
            .map_err(|_| UpstreamError::Transport)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

pub(crate) fn transport_error(e: reqwest::Error) -> UpstreamError {
    tracing::error!(error = %e, "Upstream request failed");
    UpstreamError::Transport
}

pub(crate) fn decode_error(e: reqwest::Error) -> UpstreamError {
    tracing::error!(error = %e, "Upstream response could not be decoded");
    UpstreamError::InvalidResponse
}
