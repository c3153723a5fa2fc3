use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CategoryName, SourceName, TypeConstraintError, UpdateId, UpdateStatus, UpdateTitle, UpdateUrl,
};

/// A stored notice, exam result or job circular.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Update {
    pub id: UpdateId,
    pub title: UpdateTitle,
    pub summary: Option<String>,
    /// Natural dedup key; unique across the store.
    pub original_url: UpdateUrl,
    /// Display name of the originating site.
    pub source: SourceName,
    pub category: CategoryName,
    /// Day the record was ingested, not a date parsed from the page.
    pub publish_date: NaiveDate,
    /// Insertion timestamp. List queries order on this, newest first.
    pub created_at: NaiveDateTime,
    pub is_hot: bool,
    pub status: UpdateStatus,
}

/// Information required to insert a new [`Update`].
///
/// `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUpdate {
    pub title: UpdateTitle,
    pub summary: String,
    pub original_url: UpdateUrl,
    pub source: SourceName,
    pub category: CategoryName,
    pub publish_date: NaiveDate,
    pub is_hot: bool,
    pub status: UpdateStatus,
}

impl NewUpdate {
    /// Build an insertable record for something an extractor found on a
    /// source page. `is_hot` follows the source category.
    pub fn from_candidate(
        candidate: CandidateUpdate,
        source: SourceName,
        category: CategoryName,
        publish_date: NaiveDate,
    ) -> Self {
        Self {
            title: candidate.title,
            summary: candidate.summary.unwrap_or_default(),
            original_url: candidate.original_url,
            source,
            is_hot: category.is_hot(),
            category,
            publish_date,
            status: UpdateStatus::Active,
        }
    }
}

/// A record as produced by a source extractor, before the source metadata
/// is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateUpdate {
    pub title: UpdateTitle,
    pub original_url: UpdateUrl,
    pub summary: Option<String>,
}

impl CandidateUpdate {
    pub fn new(
        title: impl Into<String>,
        original_url: impl Into<String>,
        summary: Option<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            title: UpdateTitle::new(title)?,
            original_url: UpdateUrl::new(original_url)?,
            summary,
        })
    }
}

/// Aggregate counters over every stored record, whatever its status.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateStats {
    pub total_updates: i64,
    pub hot_updates: i64,
    pub by_category: BTreeMap<String, i64>,
    /// Most recent `created_at`, `None` for an empty store.
    pub last_updated: Option<NaiveDateTime>,
}
