use axum::{extract::State, Json};
use contracts::dashboards::d401_row_counts::{RowCountsResponse, SummaryCardsResponse};

use crate::dashboards::d401_row_counts::service;
use crate::shared::error::AppError;
use crate::system::state::AppState;

/// GET /api/get-count
pub async fn get_counts(
    State(state): State<AppState>,
) -> Result<Json<RowCountsResponse>, AppError> {
    Ok(Json(service::get_counts(&state).await?))
}

/// GET /api/get-count/cards
pub async fn get_cards(
    State(state): State<AppState>,
) -> Result<Json<SummaryCardsResponse>, AppError> {
    Ok(Json(service::get_cards(&state).await?))
}
