//! HTTP-based page fetcher using reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::fetcher::{FetchResult, PageFetcher, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::{FetchFailure, Result};

/// A page fetcher that uses plain HTTP GET requests via reqwest.
///
/// Only a `200 OK` answer counts as success. Every other status, transport
/// error or timeout becomes a [`FetchResult::Failure`].
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a new `HttpFetcher` with the default 10 second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates an `HttpFetcher` with a custom per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Creates an `HttpFetcher` with a custom reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Error fetching {}: {}", url, e);
                return FetchFailure::NetworkError(describe(&e)).into();
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Error fetching {}: status {}", url, status);
            return FetchFailure::BadStatus(status.as_u16()).into();
        }

        match response.text().await {
            Ok(body) => {
                debug!("Fetched {} ({} bytes)", url, body.len());
                FetchResult::Success { body }
            }
            Err(e) => {
                warn!("Error reading body of {}: {}", url, e);
                FetchFailure::NetworkError(describe(&e)).into()
            }
        }
    }
}

fn describe(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("timed out: {}", err)
    } else {
        err.to_string()
    }
}
