//! HTTP client for the remote documentation search endpoint.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::error::SearchError;
use crate::core::config::SearchConfig;

/// A backend able to answer documentation search queries.
///
/// The tool and prompt adapters only depend on this trait, so transports and
/// tests can inject any implementation.
#[async_trait]
pub trait DocumentationSearch: Send + Sync {
    /// Search the documentation and return the raw response text.
    async fn search(&self, query: &str) -> Result<String, SearchError>;
}

/// reqwest-backed client for the documentation endpoint.
///
/// The inner `reqwest::Client` holds a connection pool and is cheap to share
/// between concurrent calls.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    api_url: String,
    timeout_secs: u64,
    max_retries: u32,
}

impl SearchClient {
    /// Build a client from the search configuration.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(SearchError::Client)?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            timeout_secs: config.timeout_secs,
            max_retries: config.max_retries,
        })
    }

    /// The endpoint this client queries.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Send the GET request, retrying connection failures.
    async fn send_with_retry(&self, query: &str) -> Result<reqwest::Response, SearchError> {
        let max_attempts = self.max_retries.saturating_add(1);
        let mut attempt: u32 = 1;
        loop {
            let result = self
                .http
                .get(&self.api_url)
                .query(&[("query", query)])
                .send()
                .await;

            match result {
                Ok(response) => return Ok(response),
                Err(e) if SearchError::is_retryable(&e) && attempt < max_attempts => {
                    warn!(
                        "Connection to {} failed (attempt {}/{}): {}",
                        self.api_url, attempt, max_attempts, e
                    );
                }
                Err(e) => return Err(SearchError::from_reqwest(e, attempt, self.timeout_secs)),
            }
            attempt += 1;
        }
    }
}

#[async_trait]
impl DocumentationSearch for SearchClient {
    #[instrument(skip(self), fields(url = %self.api_url))]
    async fn search(&self, query: &str) -> Result<String, SearchError> {
        let response = self.send_with_retry(query).await?;
        let response = response
            .error_for_status()
            .map_err(|e| SearchError::from_reqwest(e, 1, self.timeout_secs))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::from_reqwest(e, 1, self.timeout_secs))?;

        debug!("Received {} bytes", body.len());
        Ok(body)
    }
}
