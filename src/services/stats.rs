use crate::dto::updates::UpdateStatsDto;
use crate::repository::UpdateReader;
use crate::scraper::SourceRegistry;

use super::{ServiceError, ServiceResult};

/// Counters over the whole store plus the number of configured sources.
///
/// Unlike the list operations this does not filter on `status`.
pub fn compute_stats<R>(registry: &SourceRegistry, repo: &R) -> ServiceResult<UpdateStatsDto>
where
    R: UpdateReader,
{
    match repo.update_stats() {
        Ok(stats) => Ok(UpdateStatsDto::new(stats, registry.len())),
        Err(e) => {
            log::error!("Failed to compute update stats: {e}");
            Err(ServiceError::Internal)
        }
    }
}
