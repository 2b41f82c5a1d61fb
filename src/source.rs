//! Query source trait and configuration.

use std::time::Duration;

use async_trait::async_trait;

use crate::{Result, SearchQuery};

/// Request timeout for query sources, in seconds.
const DEFAULT_SOURCE_TIMEOUT: u64 = 10;

/// Configuration for a query source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Display name of the source.
    pub name: String,
    /// Request timeout in seconds.
    pub timeout: u64,
}

impl SourceConfig {
    /// Creates a configuration with the default timeout.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timeout: DEFAULT_SOURCE_TIMEOUT,
        }
    }

    /// Returns the timeout as a `Duration`.
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// A collaborator that turns a search query into candidate page URLs.
///
/// Any failure here is terminal for the harvest, unlike per-page fetch
/// failures.
#[async_trait]
pub trait QuerySource: Send + Sync {
    /// Returns the source configuration.
    fn config(&self) -> &SourceConfig;

    /// Performs the search and returns result URLs in ranking order.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<String>>;

    /// Returns the source name.
    fn name(&self) -> &str {
        &self.config().name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource {
        config: SourceConfig,
    }

    #[async_trait]
    impl QuerySource for FixedSource {
        fn config(&self) -> &SourceConfig {
            &self.config
        }

        async fn search(&self, _query: &SearchQuery) -> Result<Vec<String>> {
            Ok(vec!["https://example.com".to_string()])
        }
    }

    #[test]
    fn test_source_config_new() {
        let config = SourceConfig::new("Test");
        assert_eq!(config.name, "Test");
        assert_eq!(config.timeout, 10);
        assert_eq!(config.timeout_duration(), Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_query_source_defaults() {
        let source = FixedSource {
            config: SourceConfig::new("Fixed"),
        };
        assert_eq!(source.name(), "Fixed");
        let urls = source.search(&SearchQuery::new("x")).await.unwrap();
        assert_eq!(urls, vec!["https://example.com"]);
    }
}
