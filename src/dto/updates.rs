//! JSON bodies returned by the HTTP API. Every body carries `success`.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::update::{Update, UpdateStats};
use crate::services::scrape::{ScrapeReport, SourceOutcome};

#[derive(Debug, Serialize)]
pub struct UpdateListResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub count: usize,
    pub updates: Vec<Update>,
}

impl UpdateListResponse {
    pub fn new(updates: Vec<Update>) -> Self {
        Self {
            success: true,
            category: None,
            count: updates.len(),
            updates,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateStatsDto {
    pub total_updates: i64,
    pub hot_updates: i64,
    pub by_category: BTreeMap<String, i64>,
    pub last_updated: Option<NaiveDateTime>,
    pub sources_count: usize,
}

impl UpdateStatsDto {
    pub fn new(stats: UpdateStats, sources_count: usize) -> Self {
        Self {
            total_updates: stats.total_updates,
            hot_updates: stats.hot_updates,
            by_category: stats.by_category,
            last_updated: stats.last_updated,
            sources_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: UpdateStatsDto,
}

#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    pub success: bool,
    pub message: &'static str,
    pub results: BTreeMap<String, SourceOutcome>,
    pub timestamp: String,
}

impl From<ScrapeReport> for ScrapeResponse {
    fn from(report: ScrapeReport) -> Self {
        Self {
            success: true,
            message: "স্ক্র্যাপিং সম্পন্ন",
            results: report.results,
            timestamp: report.finished_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddUpdateResponse {
    pub success: bool,
    pub message: &'static str,
    pub inserted: bool,
}

impl AddUpdateResponse {
    pub fn new(inserted: bool) -> Self {
        Self {
            success: true,
            message: if inserted {
                "আপডেট যোগ করা হয়েছে"
            } else {
                "আপডেট আগে থেকেই আছে"
            },
            inserted,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub success: bool,
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

impl Default for IndexResponse {
    fn default() -> Self {
        Self {
            success: true,
            message: "বাংলাদেশ আপডেট API সার্ভার চলছে",
            version: env!("CARGO_PKG_VERSION"),
            endpoints: BTreeMap::from([
                ("/api/updates", "সব আপডেট পান"),
                ("/api/updates/{category}", "ক্যাটাগরি অনুযায়ী"),
                ("/api/hot", "হট আপডেট"),
                ("/api/scrape", "নতুন ডাটা সংগ্রহ করুন"),
                ("/api/stats", "স্ট্যাটিস্টিক্স"),
            ]),
        }
    }
}
