use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use contracts::domain::a004_do_allocation::AllocationRecord;
use contracts::shared::{PageQuery, Paginated};

use crate::domain::a004_do_allocation::service;
use crate::shared::error::AppError;
use crate::system::state::AppState;

/// GET /api/do-allocation?page=1&limit=10
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Paginated<AllocationRecord>>, AppError> {
    let Query(page) = query?;
    let allocations = service::list(state.upstream.as_ref(), page).await?;
    Ok(Json(allocations))
}
