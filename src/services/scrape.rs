use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Local, NaiveDate};
use serde::{Serialize, Serializer};

use crate::domain::update::NewUpdate;
use crate::repository::UpdateWriter;
use crate::scraper::{PageFetcher, ScrapeError, ScrapeSource, SourceRegistry};

/// Result of scraping one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome {
    Success,
    Error(String),
}

impl Display for SourceOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Error(message) => write!(f, "error: {message}"),
        }
    }
}

impl Serialize for SourceOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Per-source outcomes of a full scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeReport {
    pub results: BTreeMap<String, SourceOutcome>,
    pub finished_at: DateTime<Local>,
}

/// Fetch, extract and ingest one source. Returns how many of the extracted
/// records were new.
async fn scrape_source<R>(
    source: &ScrapeSource,
    fetcher: &PageFetcher,
    repo: &R,
    publish_date: NaiveDate,
) -> Result<(usize, usize), ScrapeError>
where
    R: UpdateWriter,
{
    let body = fetcher.fetch(source.endpoint.as_str()).await?;

    let updates = source
        .extractor
        .extract(&body)
        .into_iter()
        .map(|candidate| {
            NewUpdate::from_candidate(
                candidate,
                source.name.clone(),
                source.category.clone(),
                publish_date,
            )
        })
        .collect::<Vec<_>>();

    let inserted = repo.ingest_updates(&updates)?;
    Ok((updates.len(), inserted))
}

/// Scrape every registered source in turn.
///
/// A failing source is logged and recorded in the report; the remaining
/// sources are still attempted.
pub async fn scrape_and_ingest_all<R>(
    registry: &SourceRegistry,
    fetcher: &PageFetcher,
    repo: &R,
) -> ScrapeReport
where
    R: UpdateWriter,
{
    let publish_date = Local::now().date_naive();
    let mut results = BTreeMap::new();

    for source in registry.iter() {
        log::info!("Scraping: {} ({})", source.name, source.endpoint);

        let outcome = match scrape_source(source, fetcher, repo, publish_date).await {
            Ok((extracted, inserted)) => {
                log::info!(
                    "Scraped {extracted} notices from {}, {inserted} new",
                    source.name
                );
                SourceOutcome::Success
            }
            Err(e) => {
                log::error!("Error scraping {}: {e}", source.key);
                SourceOutcome::Error(e.to_string())
            }
        };

        results.insert(source.key.to_string(), outcome);
    }

    ScrapeReport {
        results,
        finished_at: Local::now(),
    }
}
