//! Source registry and the fetch side of the scrape pipeline.
//!
//! Each [`ScrapeSource`] pairs a page endpoint with its own [`Extractor`];
//! fetching and ingestion are shared.

use thiserror::Error;

use crate::repository::RepositoryError;

pub mod extractors;
pub mod fetcher;
pub mod registry;

pub use extractors::Extractor;
pub use fetcher::{FetchError, PageFetcher};
pub use registry::{ScrapeSource, SourceRegistry};

/// Failure of a single source during a scrape run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("storage failed: {0}")]
    Storage(#[from] RepositoryError),
}
