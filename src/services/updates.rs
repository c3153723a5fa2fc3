use chrono::Local;
use serde::Deserialize;

use crate::domain::types::{CategoryFilter, CategoryName, ListLimit};
use crate::domain::update::Update;
use crate::forms::updates::{AddUpdateForm, AddUpdateFormPayload};
use crate::repository::{UpdateListQuery, UpdateReader, UpdateWriter};

use super::{ServiceError, ServiceResult};

pub const DEFAULT_UPDATES_LIMIT: i64 = 20;
pub const DEFAULT_CATEGORY_LIMIT: i64 = 10;
pub const DEFAULT_HOT_LIMIT: i64 = 5;

/// Query parameters accepted by `GET /api/updates`.
#[derive(Deserialize, Debug, Default)]
pub struct UpdatesQueryParams {
    pub category: Option<String>,
    pub limit: Option<i64>,
}

/// Query parameters of endpoints that only take a row limit.
#[derive(Deserialize, Debug, Default)]
pub struct LimitQueryParams {
    pub limit: Option<i64>,
}

fn list_limit(limit: Option<i64>, default: i64) -> ServiceResult<ListLimit> {
    Ok(ListLimit::new(limit.unwrap_or(default))?)
}

fn load<R>(query: UpdateListQuery, repo: &R) -> ServiceResult<Vec<Update>>
where
    R: UpdateReader,
{
    repo.list_updates(query).map_err(|e| {
        log::error!("Failed to list updates: {e}");
        ServiceError::Internal
    })
}

/// Most recently ingested active updates, optionally restricted to one
/// stored category. An unknown category simply matches nothing.
pub fn list_updates<R>(params: UpdatesQueryParams, repo: &R) -> ServiceResult<Vec<Update>>
where
    R: UpdateReader,
{
    let mut query = UpdateListQuery::new(list_limit(params.limit, DEFAULT_UPDATES_LIMIT)?);

    if let Some(category) = params.category.filter(|c| !c.trim().is_empty()) {
        query = query.category(CategoryName::new(category)?);
    }

    load(query, repo)
}

/// Active updates for one of the browsable categories.
///
/// Anything outside `job`, `education`, `government` and `hot` is a
/// validation error.
pub fn list_by_category<R>(
    category: &str,
    params: LimitQueryParams,
    repo: &R,
) -> ServiceResult<(CategoryFilter, Vec<Update>)>
where
    R: UpdateReader,
{
    let filter: CategoryFilter = category.parse()?;
    let limit = list_limit(params.limit, DEFAULT_CATEGORY_LIMIT)?;

    let query = UpdateListQuery::for_filter(filter, limit).map_err(|e| {
        log::error!("Failed to build category query: {e}");
        ServiceError::Internal
    })?;

    Ok((filter, load(query, repo)?))
}

/// Active updates flagged `is_hot`, newest first.
pub fn list_hot<R>(params: LimitQueryParams, repo: &R) -> ServiceResult<Vec<Update>>
where
    R: UpdateReader,
{
    let query = UpdateListQuery::new(list_limit(params.limit, DEFAULT_HOT_LIMIT)?).hot();
    load(query, repo)
}

/// Insert a manually submitted update.
///
/// Returns `false` when a record with the same `original_url` already exists.
pub fn add_update<R>(form: AddUpdateForm, repo: &R) -> ServiceResult<bool>
where
    R: UpdateWriter,
{
    let payload: AddUpdateFormPayload = form.try_into()?;
    let update = payload.into_new_update(Local::now().date_naive());

    match repo.ingest_updates(&[update]) {
        Ok(inserted) => Ok(inserted > 0),
        Err(e) => {
            log::error!("Failed to add update: {e}");
            Err(ServiceError::Internal)
        }
    }
}
