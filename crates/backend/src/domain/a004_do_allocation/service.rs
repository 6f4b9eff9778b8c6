use contracts::domain::a004_do_allocation::AllocationRecord;
use contracts::shared::{PageQuery, Paginated};

use crate::shared::error::AppError;
use crate::shared::upstream::UpstreamApi;

/// Страница распределений в исходном виде upstream (без сводной таблицы)
pub async fn list(
    upstream: &dyn UpstreamApi,
    page: PageQuery,
) -> Result<Paginated<AllocationRecord>, AppError> {
    let allocations = upstream.list_allocations(page).await?;
    for record in &allocations.data {
        if let Err(e) = record.validate() {
            tracing::warn!("Malformed allocation record: {}", e);
        }
    }
    Ok(allocations)
}
