use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::types::{
    CategoryName, SourceName, TypeConstraintError, UpdateStatus, UpdateTitle, UpdateUrl,
};
use crate::domain::update::{NewUpdate as DomainNewUpdate, Update as DomainUpdate};

/// Storage format of `publish_date`.
pub const PUBLISH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Diesel model representing the `updates` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::updates)]
pub struct Update {
    pub id: i32,
    pub title: String,
    pub summary: Option<String>,
    pub original_url: String,
    pub source: String,
    pub category: String,
    pub publish_date: String,
    pub created_at: NaiveDateTime,
    pub is_hot: bool,
    pub status: String,
}

/// Insertable form of [`Update`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::updates)]
pub struct NewUpdate {
    pub title: String,
    pub summary: Option<String>,
    pub original_url: String,
    pub source: String,
    pub category: String,
    pub publish_date: String,
    pub created_at: NaiveDateTime,
    pub is_hot: bool,
    pub status: String,
}

impl TryFrom<Update> for DomainUpdate {
    type Error = TypeConstraintError;

    fn try_from(update: Update) -> Result<Self, Self::Error> {
        let publish_date = NaiveDate::parse_from_str(&update.publish_date, PUBLISH_DATE_FORMAT)
            .map_err(|e| {
                TypeConstraintError::InvalidValue(format!(
                    "publish date {:?}: {e}",
                    update.publish_date
                ))
            })?;

        Ok(Self {
            id: update.id.try_into()?,
            title: UpdateTitle::new(update.title)?,
            summary: update.summary,
            original_url: UpdateUrl::new(update.original_url)?,
            source: SourceName::new(update.source)?,
            category: CategoryName::new(update.category)?,
            publish_date,
            created_at: update.created_at,
            is_hot: update.is_hot,
            status: UpdateStatus::try_from(update.status)?,
        })
    }
}

impl NewUpdate {
    /// Stamp a domain record with its insertion time.
    pub fn new(update: DomainNewUpdate, created_at: NaiveDateTime) -> Self {
        Self {
            title: update.title.into_inner(),
            summary: Some(update.summary),
            original_url: update.original_url.into_inner(),
            source: update.source.into_inner(),
            category: update.category.into_inner(),
            publish_date: update.publish_date.format(PUBLISH_DATE_FORMAT).to_string(),
            created_at,
            is_hot: update.is_hot,
            status: update.status.into(),
        }
    }
}
