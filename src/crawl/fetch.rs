// src/crawl/fetch.rs
// =============================================================================
// Page fetching.
//
// The crawl loop only needs "give me the HTML at this URL", so fetching sits
// behind the `PageSource` trait. `HttpSource` is the real implementation
// (reqwest with our User-Agent and timeout); tests plug in an in-memory map.
//
// There is no retry: a failed request or a non-2xx status is returned as a
// `FetchError` and the caller aborts the run.
// =============================================================================

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: StatusCode },

    /// The request never produced a response (DNS, TLS, timeout, ...)
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Something that can return the HTML for a URL.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// Fetches pages over HTTP with one shared client.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = FetchError::Status {
            url: "https://docs.example.com/schema/x".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(
            err.to_string(),
            "HTTP 404 Not Found for https://docs.example.com/schema/x"
        );
    }

    #[test]
    fn test_client_builds_from_default_config() {
        assert!(HttpSource::new(&Config::default()).is_ok());
    }
}
