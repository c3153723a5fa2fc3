use std::fmt;
use std::sync::Arc;

use crate::domain::types::{
    CategoryName, SourceEndpoint, SourceKey, SourceName, TypeConstraintError,
};
use crate::scraper::extractors::{
    BPSC_NOTICES, EDUCATION_NOTICES, Extractor, NoNotices, PlaceholderExtractor,
};

/// A site the scrape run visits.
#[derive(Clone)]
pub struct ScrapeSource {
    pub key: SourceKey,
    pub endpoint: SourceEndpoint,
    /// Stored as `source` on every update this site yields.
    pub name: SourceName,
    /// Stored as `category`; `hot` also sets `is_hot`.
    pub category: CategoryName,
    pub extractor: Arc<dyn Extractor>,
}

impl ScrapeSource {
    pub fn new(
        key: &str,
        endpoint: &str,
        name: &str,
        category: &str,
        extractor: impl Extractor + 'static,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            key: SourceKey::new(key)?,
            endpoint: SourceEndpoint::new(endpoint)?,
            name: SourceName::new(name)?,
            category: CategoryName::new(category)?,
            extractor: Arc::new(extractor),
        })
    }
}

impl fmt::Debug for ScrapeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrapeSource")
            .field("key", &self.key)
            .field("endpoint", &self.endpoint)
            .field("name", &self.name)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Ordered set of scrape sources, unique by key.
#[derive(Clone, Debug, Default)]
pub struct SourceRegistry {
    sources: Vec<ScrapeSource>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `source`, replacing any source already registered under its key.
    pub fn register(mut self, source: ScrapeSource) -> Self {
        match self.sources.iter_mut().find(|s| s.key == source.key) {
            Some(existing) => *existing = source,
            None => self.sources.push(source),
        }
        self
    }

    /// The five government sites served by the public API.
    pub fn builtin() -> Result<Self, TypeConstraintError> {
        Ok(Self::new()
            .register(ScrapeSource::new(
                "bpsc",
                "https://www.bpsc.gov.bd/",
                "বিসিএস কমিশন",
                "job",
                PlaceholderExtractor::new(BPSC_NOTICES),
            )?)
            .register(ScrapeSource::new(
                "mopa",
                "https://www.mopa.gov.bd/",
                "জনপ্রশাসন মন্ত্রণালয়",
                "job",
                NoNotices,
            )?)
            .register(ScrapeSource::new(
                "education",
                "http://www.educationboardresults.gov.bd/",
                "শিক্ষা বোর্ড",
                "education",
                PlaceholderExtractor::new(EDUCATION_NOTICES),
            )?)
            .register(ScrapeSource::new(
                "cabinet",
                "https://cabinet.gov.bd/",
                "মন্ত্রিপরিষদ বিভাগ",
                "government",
                NoNotices,
            )?)
            .register(ScrapeSource::new(
                "btrc",
                "https://www.btrc.gov.bd/",
                "বিটিআরসি",
                "hot",
                NoNotices,
            )?))
    }

    pub fn get(&self, key: &str) -> Option<&ScrapeSource> {
        self.sources.iter().find(|s| s.key.as_str() == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScrapeSource> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
