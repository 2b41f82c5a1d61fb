//! Search query representation.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{HarvestError, Result};

/// Result count used when none is given.
pub const DEFAULT_NUM_RESULTS: u32 = 10;

/// Largest result count a query may ask for.
pub const MAX_NUM_RESULTS: u32 = 100;

/// A search query: free text plus how many result URLs to request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The search terms.
    pub query: String,
    /// Number of result URLs to request (1 to 100).
    pub num_results: u32,
}

impl SearchQuery {
    /// Creates a new search query with the given terms.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            num_results: DEFAULT_NUM_RESULTS,
        }
    }

    /// Sets the number of results to request.
    pub fn with_num_results(mut self, num_results: u32) -> Self {
        self.num_results = num_results;
        self
    }

    /// Checks that the query has terms and a result count in range.
    pub fn validate(&self) -> Result<()> {
        if self.query.trim().is_empty() {
            return Err(HarvestError::InvalidQuery("Query cannot be empty".into()));
        }
        if !(1..=MAX_NUM_RESULTS).contains(&self.num_results) {
            return Err(HarvestError::InvalidQuery(format!(
                "Result count must be between 1 and {}, got {}",
                MAX_NUM_RESULTS, self.num_results
            )));
        }
        Ok(())
    }
}

/// Checks URLs given directly on the command line.
///
/// Each entry must parse as an absolute `http` or `https` URL. The URLs are
/// returned as typed, minus surrounding whitespace.
pub fn parse_page_urls<I, S>(urls: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    urls.into_iter()
        .map(|raw| {
            let raw = raw.as_ref().trim();
            let url = Url::parse(raw)?;
            match url.scheme() {
                "http" | "https" => Ok(raw.to_string()),
                scheme => Err(HarvestError::InvalidQuery(format!(
                    "Unsupported URL scheme '{}' in {}",
                    scheme, raw
                ))),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_search_query_new() {
        let query = SearchQuery::new("plumbers in madrid");
        assert_eq!(query.query, "plumbers in madrid");
        assert_eq!(query.num_results, DEFAULT_NUM_RESULTS);
    }

    #[test]
    fn test_search_query_with_num_results() {
        let query = SearchQuery::new("test").with_num_results(42);
        assert_eq!(query.num_results, 42);
    }

    #[test]
    fn test_validate_ok() {
        assert_ok!(SearchQuery::new("test").validate());
        assert_ok!(SearchQuery::new("test").with_num_results(1).validate());
        assert_ok!(SearchQuery::new("test").with_num_results(100).validate());
    }

    #[test]
    fn test_validate_empty_query() {
        let err = assert_err!(SearchQuery::new("  \t\n").validate());
        assert!(matches!(err, HarvestError::InvalidQuery(_)));
    }

    #[test]
    fn test_validate_num_results_bounds() {
        assert_err!(SearchQuery::new("test").with_num_results(0).validate());
        assert_err!(SearchQuery::new("test").with_num_results(101).validate());
    }

    #[test]
    fn test_parse_page_urls_ok() {
        let urls = assert_ok!(parse_page_urls([" https://acme.com/contact ", "http://b.org"]));
        assert_eq!(urls, vec!["https://acme.com/contact", "http://b.org"]);
    }

    #[test]
    fn test_parse_page_urls_relative() {
        let err = assert_err!(parse_page_urls(["acme.com/contact"]));
        assert!(matches!(err, HarvestError::UrlParse(_)));
    }

    #[test]
    fn test_parse_page_urls_bad_scheme() {
        let err = assert_err!(parse_page_urls(["https://ok.com", "ftp://files.example"]));
        assert!(matches!(err, HarvestError::InvalidQuery(_)));
    }

    #[test]
    fn test_search_query_serialization() {
        let query = SearchQuery::new("test").with_num_results(5);
        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(json, r#"{"query":"test","num_results":5}"#);
    }

    #[test]
    fn test_search_query_deserialization() {
        let json = r#"{"query":"dentists","num_results":20}"#;
        let query: SearchQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query, SearchQuery::new("dentists").with_num_results(20));
    }
}
