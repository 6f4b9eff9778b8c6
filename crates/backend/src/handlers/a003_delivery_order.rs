use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use contracts::domain::a003_delivery_order::{
    DeliveryOrder, DeliveryOrderDto, DoGenerateRequest, DoGenerateResponse, NextDoNumber,
};
use contracts::shared::{PageQuery, Paginated};

use crate::domain::a003_delivery_order::service;
use crate::shared::error::AppError;
use crate::system::state::AppState;

/// GET /api/do-generate?page=1&limit=10
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Paginated<DeliveryOrder>>, AppError> {
    let Query(page) = query?;
    let orders = service::list(state.upstream.as_ref(), page).await?;
    Ok(Json(orders))
}

/// GET /api/do-generate/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let order = service::get_by_id(state.upstream.as_ref(), &id).await?;
    Ok(Json(order))
}

/// GET /api/do-generate/next-do
pub async fn next_do(State(state): State<AppState>) -> Result<Json<NextDoNumber>, AppError> {
    let next = service::next_do_number(state.upstream.as_ref()).await?;
    Ok(Json(next))
}

/// POST /api/do-generate
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<DoGenerateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DoGenerateResponse>), AppError> {
    let Json(request) = payload?;
    let response = service::create(state.upstream.as_ref(), request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /api/do-generate
pub async fn update(
    State(state): State<AppState>,
    payload: Result<Json<DeliveryOrderDto>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(dto) = payload?;
    let result = service::update(state.upstream.as_ref(), dto).await?;
    Ok(Json(result))
}
