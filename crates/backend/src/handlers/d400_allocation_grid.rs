use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use contracts::dashboards::d400_allocation_grid::AllocationGridResponse;
use contracts::shared::PageQuery;

use crate::dashboards::d400_allocation_grid::service;
use crate::shared::error::AppError;
use crate::system::state::AppState;

/// GET /api/do-allocation/grid?page=1&limit=10
pub async fn get_grid(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<AllocationGridResponse>, AppError> {
    let Query(page) = query?;
    tracing::info!(
        "D400 Allocation grid: page {} (limit {})",
        page.page(),
        page.limit()
    );

    let response = service::get_grid(&state, page).await?;
    tracing::info!(
        "D400 Allocation grid: returning {} rows, {} sub-godown columns",
        response.grid.rows.len(),
        response.grid.columns.len()
    );
    Ok(Json(response))
}
