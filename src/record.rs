//! Harvest result types.

use serde::{Deserialize, Serialize};

use crate::FetchFailure;

/// One harvested address together with the title of the page it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailRecord {
    /// Title of the page the address was found on.
    pub site_title: String,
    /// The address itself.
    pub email: String,
}

impl EmailRecord {
    /// Creates a new record.
    pub fn new(site_title: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            site_title: site_title.into(),
            email: email.into(),
        }
    }
}

/// What happened to a single URL during aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    /// The page was fetched and scanned.
    Scraped {
        /// Extracted page title.
        title: String,
        /// Number of distinct addresses found.
        emails: usize,
    },
    /// The page could not be fetched.
    Failed(FetchFailure),
}

/// Per-URL outcome, kept so callers can tell failed pages from empty ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    /// The URL that was processed.
    pub url: String,
    /// Outcome for that URL.
    pub status: PageStatus,
}

impl PageReport {
    /// Returns true if the page was fetched.
    pub fn is_scraped(&self) -> bool {
        matches!(self.status, PageStatus::Scraped { .. })
    }
}

/// Flattened records plus per-page outcomes for one aggregation call.
#[derive(Debug, Clone, Default)]
pub struct HarvestReport {
    records: Vec<EmailRecord>,
    pages: Vec<PageReport>,
}

impl HarvestReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the records of one page and its outcome.
    pub fn add_page(&mut self, page: PageReport, records: Vec<EmailRecord>) {
        self.records.extend(records);
        self.pages.push(page);
    }

    /// Returns the flattened records.
    pub fn records(&self) -> &[EmailRecord] {
        &self.records
    }

    /// Consumes the report, returning only the records.
    pub fn into_records(self) -> Vec<EmailRecord> {
        self.records
    }

    /// Returns the per-page outcomes in completion order.
    pub fn pages(&self) -> &[PageReport] {
        &self.pages
    }

    /// Number of pages that were fetched and scanned.
    pub fn scraped_count(&self) -> usize {
        self.pages.iter().filter(|p| p.is_scraped()).count()
    }

    /// Number of pages that could not be fetched.
    pub fn failed_count(&self) -> usize {
        self.pages.len() - self.scraped_count()
    }

    /// Iterates over the pages that could not be fetched.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &FetchFailure)> {
        self.pages.iter().filter_map(|p| match &p.status {
            PageStatus::Failed(reason) => Some((p.url.as_str(), reason)),
            PageStatus::Scraped { .. } => None,
        })
    }
}
