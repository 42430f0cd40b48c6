//! Feed sources — where raw payload bytes come from.
//!
//! [`HttpFeedSource`] is the production source. Tests plug in their own
//! [`FeedSource`] to count fetches or simulate outages without a network.

use crate::error::FeedError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use seismo_core::config::FeedConfig;
use std::time::Duration;

const USER_AGENT: &str = concat!("seismoscope/", env!("CARGO_PKG_VERSION"));

/// Trait implemented by each payload source.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the raw payload. Any failure means the whole load failed.
    async fn fetch(&self) -> Result<Vec<u8>, FeedError>;
}

/// GETs the configured URL with a bounded timeout.
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpFeedSource {
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();
        headers.insert(reqwest::header::USER_AGENT, HeaderValue::from_static(USER_AGENT));

        let client = reqwest::Client::builder()
            .gzip(true)
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| FeedError::Request(e.to_string()))?;

        Ok(Self {
            url: config.url.clone(),
            timeout: config.timeout(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn classify(&self, error: reqwest::Error) -> FeedError {
        if error.is_timeout() {
            FeedError::Timeout(self.timeout)
        } else {
            FeedError::Request(error.to_string())
        }
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self) -> Result<Vec<u8>, FeedError> {
        tracing::debug!(url = %self.url, "fetching feed");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        tracing::debug!(bytes = body.len(), "feed fetched");
        Ok(body.to_vec())
    }
}
