//! # mailharvest
//!
//! Search-driven email harvesting: ask a search engine for candidate pages,
//! fetch them with bounded parallelism, and pull out each page's title and
//! the email addresses it mentions.
//!
//! - A [`QuerySource`] turns a [`SearchQuery`] into URLs
//! - An [`Aggregator`] fetches up to five pages at a time and extracts
//!   `(site title, email)` records
//! - [`export::to_csv`] renders the records as a downloadable table
//!
//! A page that cannot be fetched contributes no records; it never aborts the
//! batch.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use mailharvest::{sources::SerpApi, Aggregator, Harvester, HarvestOutcome, HttpFetcher, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let source = SerpApi::new("my-api-key")?;
//!     let aggregator = Aggregator::new(Arc::new(HttpFetcher::new()?));
//!     let harvester = Harvester::new(Arc::new(source), aggregator);
//!
//!     let query = SearchQuery::new("bakeries in lisbon").with_num_results(20);
//!     if let HarvestOutcome::Found(report) = harvester.run(&query).await? {
//!         for record in report.records() {
//!             println!("{}: {}", record.site_title, record.email);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod aggregator;
mod error;
mod fetcher_http;
mod harvest;
mod query;
mod record;
mod source;

pub mod export;
pub mod extractor;
pub mod fetcher;
pub mod sources;

pub use aggregator::{Aggregator, DEFAULT_CONCURRENCY};
pub use error::{FetchFailure, HarvestError, Result};
pub use extractor::{extract, Extraction};
pub use fetcher::{FetchResult, PageFetcher};
pub use fetcher_http::HttpFetcher;
pub use harvest::{HarvestOutcome, Harvester};
pub use query::{parse_page_urls, SearchQuery};
pub use record::{EmailRecord, HarvestReport, PageReport, PageStatus};
pub use source::{QuerySource, SourceConfig};
