//! Error types for the harvester library.

use thiserror::Error;

/// Result type alias for harvest operations.
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Errors that can terminate a harvest.
///
/// Per-page fetch problems are not represented here; they are reported as
/// [`FetchFailure`] values so that one bad URL never aborts a batch.
#[derive(Error, Debug)]
pub enum HarvestError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse a response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid query.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// A query source needs a credential that was not provided.
    #[error("Missing API key for {0}")]
    MissingApiKey(String),

    /// The query source could not produce a URL list.
    #[error("Query source '{source_name}' failed: {message}")]
    QuerySource {
        /// Name of the failing source.
        source_name: String,
        /// Underlying failure description.
        message: String,
    },

    /// URL parsing error.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Filesystem error while writing an export.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a single page could not be fetched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// Transport error, timeout, or unreadable body.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The server answered with something other than 200.
    #[error("bad status: {0}")]
    BadStatus(u16),
}

impl FetchFailure {
    /// Returns true if the failure is a transport-level problem.
    pub fn is_network(&self) -> bool {
        matches!(self, FetchFailure::NetworkError(_))
    }
}
