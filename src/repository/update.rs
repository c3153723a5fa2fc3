use std::collections::BTreeMap;

use chrono::{NaiveDateTime, Utc};
use diesel::dsl::{count_star, max};
use diesel::prelude::*;

use crate::domain::update::{NewUpdate, Update, UpdateStats};
use crate::models::update::{NewUpdate as DbNewUpdate, Update as DbUpdate};
use crate::repository::{
    DieselRepository, RepositoryResult, UpdateListQuery, UpdateReader, UpdateWriter,
};

const ACTIVE_STATUS: &str = "active";

impl UpdateReader for DieselRepository {
    fn list_updates(&self, query: UpdateListQuery) -> RepositoryResult<Vec<Update>> {
        use crate::schema::updates;

        let mut conn = self.conn()?;

        let mut items = updates::table
            .filter(updates::status.eq(ACTIVE_STATUS))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(category) = &query.category {
            items = items.filter(updates::category.eq(category.as_str()));
        }

        if query.hot_only {
            items = items.filter(updates::is_hot.eq(true));
        }

        let items: Vec<Update> = items
            .order((updates::created_at.desc(), updates::id.desc()))
            .limit(query.limit.get())
            .load::<DbUpdate>(&mut conn)?
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                match Update::try_from(row) {
                    Ok(update) => Some(update),
                    Err(e) => {
                        log::warn!("Skipping malformed update row {id}: {e}");
                        None
                    }
                }
            })
            .collect();

        Ok(items)
    }

    fn update_stats(&self) -> RepositoryResult<UpdateStats> {
        use crate::schema::updates;

        let mut conn = self.conn()?;

        let total_updates = updates::table.count().get_result::<i64>(&mut conn)?;

        let hot_updates = updates::table
            .filter(updates::is_hot.eq(true))
            .count()
            .get_result::<i64>(&mut conn)?;

        let by_category = updates::table
            .group_by(updates::category)
            .select((updates::category, count_star()))
            .load::<(String, i64)>(&mut conn)?
            .into_iter()
            .collect::<BTreeMap<String, i64>>();

        let last_updated = updates::table
            .select(max(updates::created_at))
            .first::<Option<NaiveDateTime>>(&mut conn)?;

        Ok(UpdateStats {
            total_updates,
            hot_updates,
            by_category,
            last_updated,
        })
    }
}

impl UpdateWriter for DieselRepository {
    fn ingest_updates(&self, updates: &[NewUpdate]) -> RepositoryResult<usize> {
        use crate::schema::updates;

        let mut conn = self.conn()?;

        let inserted = conn.transaction(|conn| {
            let mut inserted = 0;
            for update in updates {
                let row = DbNewUpdate::new(update.clone(), Utc::now().naive_utc());
                inserted += diesel::insert_or_ignore_into(updates::table)
                    .values(&row)
                    .execute(conn)?;
            }
            diesel::result::QueryResult::Ok(inserted)
        })?;

        Ok(inserted)
    }
}
