//! Asset fetcher implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::{AppError, HttpFetcherConfig};
use crate::ports::AssetFetcher;

/// Blocking HTTP client for downloading assets.
///
/// One attempt per call with no request timeout. Redirects and proxies follow
/// reqwest's defaults.
#[derive(Debug, Clone)]
pub struct HttpAssetFetcher {
    client: Client,
}

impl HttpAssetFetcher {
    /// Create a new fetcher with the given configuration.
    pub fn new(config: &HttpFetcherConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl AssetFetcher for HttpAssetFetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, AppError> {
        tracing::debug!(%url, "sending GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| AppError::Http { url: url.to_string(), details: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus { url: url.to_string(), status: status.as_u16() });
        }

        let body = response
            .bytes()
            .map_err(|e| AppError::Http { url: url.to_string(), details: e.to_string() })?;

        tracing::debug!(%url, status = status.as_u16(), bytes = body.len(), "received body");
        Ok(body.to_vec())
    }
}
