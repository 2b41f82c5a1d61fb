//! Google results through the SerpAPI JSON endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::source::{QuerySource, SourceConfig};
use crate::{HarvestError, Result, SearchQuery};

const SERPAPI_ENDPOINT: &str = "https://serpapi.com/search";

/// SerpAPI query source.
///
/// The API key is handed in explicitly; nothing is read from the
/// environment here.
pub struct SerpApi {
    config: SourceConfig,
    client: Client,
    api_key: String,
    endpoint: String,
}

impl SerpApi {
    /// Creates a new SerpAPI source with the given credential.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let config = SourceConfig::new("SerpAPI");
        let client = Client::builder()
            .timeout(config.timeout_duration())
            .build()?;
        Ok(Self {
            config,
            client,
            api_key: api_key.into(),
            endpoint: SERPAPI_ENDPOINT.to_string(),
        })
    }

    /// Points the source at a different endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[derive(Deserialize)]
struct SerpResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct OrganicResult {
    link: Option<String>,
}

#[async_trait]
impl QuerySource for SerpApi {
    fn config(&self) -> &SourceConfig {
        &self.config
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<String>> {
        if self.api_key.trim().is_empty() {
            return Err(HarvestError::MissingApiKey(self.config.name.clone()));
        }

        let num = query.num_results.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", query.query.as_str()),
                ("engine", "google"),
                ("api_key", self.api_key.as_str()),
                ("num", num.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: SerpResponse = response.json().await?;
        let urls = parse_response(body).map_err(|message| HarvestError::QuerySource {
            source_name: self.config.name.clone(),
            message,
        })?;

        debug!("SerpAPI returned {} URLs", urls.len());
        Ok(urls)
    }
}

fn parse_response(body: SerpResponse) -> std::result::Result<Vec<String>, String> {
    if let Some(error) = body.error {
        return Err(error);
    }
    Ok(body
        .organic_results
        .into_iter()
        .filter_map(|r| r.link)
        .collect())
}
