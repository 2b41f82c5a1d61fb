//! Bounded-parallel fetch and extraction over a URL list.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::debug;

use crate::extractor::extract;
use crate::fetcher::{FetchResult, PageFetcher};
use crate::record::{EmailRecord, HarvestReport, PageReport, PageStatus};

/// Maximum number of pages processed at once.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Runs a [`PageFetcher`] and the extractor over many URLs.
///
/// At most `concurrency` URLs are in flight; each slot fetches and then
/// extracts one URL before taking the next. A failing URL contributes no
/// records and never affects the others.
pub struct Aggregator {
    fetcher: Arc<dyn PageFetcher>,
    concurrency: usize,
}

impl Aggregator {
    /// Creates a new aggregator with the default pool size.
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            fetcher,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Sets the number of concurrent slots. Values below 1 are raised to 1.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Returns the configured pool size.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Fetches every URL and returns the flattened `(title, email)` records.
    ///
    /// Records appear in completion order, not input order.
    pub async fn aggregate<I, S>(&self, urls: I) -> Vec<EmailRecord>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.collect(urls).await.into_records()
    }

    /// Like [`aggregate`](Self::aggregate), but also reports what happened to
    /// each URL.
    pub async fn collect<I, S>(&self, urls: I) -> HarvestReport
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let urls: Vec<String> = urls.into_iter().map(Into::into).collect();
        debug!(
            "Aggregating {} URLs with {} slots",
            urls.len(),
            self.concurrency
        );

        let pages: Vec<(PageReport, Vec<EmailRecord>)> = stream::iter(urls)
            .map(|url| self.process(url))
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        let mut report = HarvestReport::new();
        for (page, records) in pages {
            report.add_page(page, records);
        }
        report
    }

    async fn process(&self, url: String) -> (PageReport, Vec<EmailRecord>) {
        match self.fetcher.fetch(&url).await {
            FetchResult::Success { body } => {
                let extraction = extract(&body);
                debug!(
                    "{}: '{}' with {} emails",
                    url,
                    extraction.title,
                    extraction.emails.len()
                );

                let records: Vec<EmailRecord> = extraction
                    .emails
                    .into_iter()
                    .map(|email| EmailRecord::new(extraction.title.clone(), email))
                    .collect();
                let status = PageStatus::Scraped {
                    title: extraction.title,
                    emails: records.len(),
                };
                (PageReport { url, status }, records)
            }
            FetchResult::Failure(reason) => {
                let status = PageStatus::Failed(reason);
                (PageReport { url, status }, Vec::new())
            }
        }
    }
}
