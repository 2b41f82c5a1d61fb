//! Page fetcher abstraction for retrieving HTML content.

use std::time::Duration;

use async_trait::async_trait;

use crate::FetchFailure;

/// Desktop browser identification sent with every page request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of a single page fetch.
///
/// Failures are values rather than errors: the aggregator keeps going no
/// matter what one URL does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// The server answered 200 and the body was read.
    Success {
        /// Document text.
        body: String,
    },
    /// The page could not be retrieved.
    Failure(FetchFailure),
}

impl FetchResult {
    /// Creates a successful result.
    pub fn success(body: impl Into<String>) -> Self {
        Self::Success { body: body.into() }
    }

    /// Returns true for `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the body of a successful fetch.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Success { body } => Some(body),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure reason, if any.
    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            Self::Success { .. } => None,
            Self::Failure(reason) => Some(reason),
        }
    }
}

impl From<FetchFailure> for FetchResult {
    fn from(failure: FetchFailure) -> Self {
        Self::Failure(failure)
    }
}

/// Trait for fetching the full HTML content of a URL.
///
/// All configuration (user-agent, timeout) is set at construction time;
/// `fetch` is a simple URL-in, result-out interface.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the given URL. Never panics or returns an error.
    async fn fetch(&self, url: &str) -> FetchResult;
}
