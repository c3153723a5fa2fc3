use crate::db::{DbConnection, DbPool};
use crate::domain::types::{CategoryFilter, CategoryName, ListLimit};
use crate::domain::update::{NewUpdate, Update, UpdateStats};

pub mod errors;
pub mod update;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers. Each call checks out its own
/// connection, which goes back to the pool when dropped.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing updates.
///
/// Only `active` records are ever listed; results are ordered by
/// `created_at` descending.
#[derive(Debug, Clone)]
pub struct UpdateListQuery {
    /// Filter on the stored `category` column.
    pub category: Option<CategoryName>,
    /// Restrict to records flagged `is_hot`.
    pub hot_only: bool,
    pub limit: ListLimit,
}

impl UpdateListQuery {
    pub fn new(limit: ListLimit) -> Self {
        Self {
            category: None,
            hot_only: false,
            limit,
        }
    }

    pub fn category(mut self, category: CategoryName) -> Self {
        self.category = Some(category);
        self
    }

    pub fn hot(mut self) -> Self {
        self.hot_only = true;
        self
    }

    /// Translate a browsable category into a query. `hot` selects by the
    /// `is_hot` flag rather than the stored category.
    pub fn for_filter(filter: CategoryFilter, limit: ListLimit) -> RepositoryResult<Self> {
        let query = Self::new(limit);
        match filter {
            CategoryFilter::Hot => Ok(query.hot()),
            other => Ok(query.category(CategoryName::new(other.as_str())?)),
        }
    }
}

/// Read-only operations for update records.
pub trait UpdateReader {
    /// List active updates matching the query, newest first.
    fn list_updates(&self, query: UpdateListQuery) -> RepositoryResult<Vec<Update>>;
    /// Aggregate counters across every record regardless of status.
    fn update_stats(&self) -> RepositoryResult<UpdateStats>;
}

/// Write operations for update records.
pub trait UpdateWriter {
    /// Insert records, silently skipping any whose `original_url` is already
    /// stored. Returns the number of rows actually inserted.
    fn ingest_updates(&self, updates: &[NewUpdate]) -> RepositoryResult<usize>;
}
