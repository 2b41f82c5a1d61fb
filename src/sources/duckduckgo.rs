//! DuckDuckGo HTML results, usable without a credential.

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::debug;

use crate::fetcher::DEFAULT_USER_AGENT;
use crate::source::{QuerySource, SourceConfig};
use crate::{HarvestError, Result, SearchQuery};

const DUCKDUCKGO_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// DuckDuckGo query source.
pub struct DuckDuckGo {
    config: SourceConfig,
    client: Client,
    endpoint: String,
}

impl DuckDuckGo {
    /// Creates a new DuckDuckGo source.
    pub fn new() -> Result<Self> {
        let config = SourceConfig::new("DuckDuckGo");
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(config.timeout_duration())
            .build()?;
        Ok(Self {
            config,
            client,
            endpoint: DUCKDUCKGO_ENDPOINT.to_string(),
        })
    }

    /// Points the source at a different endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl QuerySource for DuckDuckGo {
    fn config(&self) -> &SourceConfig {
        &self.config
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<String>> {
        let url = format!(
            "{}?q={}",
            self.endpoint,
            urlencoding::encode(&query.query)
        );

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let html = response.text().await?;

        let mut urls = parse_results(&html)?;
        urls.truncate(query.num_results as usize);
        debug!("DuckDuckGo returned {} URLs", urls.len());
        Ok(urls)
    }
}

fn parse_results(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let link_selector = Selector::parse(".result__title a")
        .map_err(|e| HarvestError::Parse(format!("Failed to parse selector: {:?}", e)))?;

    let mut urls: Vec<String> = Vec::new();
    for element in document.select(&link_selector) {
        let href = element.value().attr("href").unwrap_or_default();

        let url = if href.starts_with("//duckduckgo.com/l/") {
            match extract_redirect_url(href) {
                Some(url) => url,
                None => continue,
            }
        } else {
            href.to_string()
        };

        if url.starts_with("http") && !urls.contains(&url) {
            urls.push(url);
        }
    }

    Ok(urls)
}

fn extract_redirect_url(url: &str) -> Option<String> {
    let url = url.trim_start_matches("//duckduckgo.com/l/?uddg=");
    let decoded = urlencoding::decode(url).ok()?;
    let end = decoded.find('&').unwrap_or(decoded.len());
    Some(decoded[..end].to_string())
}
