//! Harvest orchestration: query source, then aggregation.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::record::HarvestReport;
use crate::source::QuerySource;
use crate::{Aggregator, HarvestError, Result, SearchQuery};

/// How a harvest ended when the query itself succeeded.
#[derive(Debug)]
pub enum HarvestOutcome {
    /// The source returned no URLs; nothing was fetched.
    NoUrls,
    /// Pages were processed but no address was found.
    NoEmails(HarvestReport),
    /// At least one record was produced.
    Found(HarvestReport),
}

impl HarvestOutcome {
    /// Returns the report, if aggregation ran.
    pub fn report(&self) -> Option<&HarvestReport> {
        match self {
            Self::NoUrls => None,
            Self::NoEmails(report) | Self::Found(report) => Some(report),
        }
    }
}

/// Runs a query source and feeds its URLs to an [`Aggregator`].
pub struct Harvester {
    source: Arc<dyn QuerySource>,
    aggregator: Aggregator,
}

impl Harvester {
    /// Creates a new harvester.
    pub fn new(source: Arc<dyn QuerySource>, aggregator: Aggregator) -> Self {
        Self { source, aggregator }
    }

    /// Returns the configured source name.
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Performs the search and scrapes every returned URL.
    ///
    /// Only an invalid query or a failing source is an error. Individual
    /// pages that cannot be fetched show up as failed entries in the report.
    pub async fn run(&self, query: &SearchQuery) -> Result<HarvestOutcome> {
        query.validate()?;

        let start = Instant::now();
        let urls = self.source.search(query).await.map_err(|e| {
            warn!("Source {} failed: {}", self.source.name(), e);
            if matches!(
                e,
                HarvestError::QuerySource { .. } | HarvestError::MissingApiKey(_)
            ) {
                return e;
            }
            HarvestError::QuerySource {
                source_name: self.source.name().to_string(),
                message: e.to_string(),
            }
        })?;

        if urls.is_empty() {
            info!("Source {} returned no URLs", self.source.name());
            return Ok(HarvestOutcome::NoUrls);
        }
        debug!("Source {} returned {} URLs", self.source.name(), urls.len());

        let report = self.aggregator.collect(urls).await;
        info!(
            "Harvested {} records from {} pages ({} failed) in {}ms",
            report.records().len(),
            report.scraped_count(),
            report.failed_count(),
            start.elapsed().as_millis()
        );

        if report.records().is_empty() {
            Ok(HarvestOutcome::NoEmails(report))
        } else {
            Ok(HarvestOutcome::Found(report))
        }
    }
}
