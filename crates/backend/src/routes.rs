use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;
use crate::system::middleware::request_logger::request_logger;
use crate::system::state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DELIVERY ORDERS
        // ========================================
        .route(
            "/api/do-generate",
            get(handlers::a003_delivery_order::list)
                .post(handlers::a003_delivery_order::create)
                .put(handlers::a003_delivery_order::update),
        )
        .route(
            "/api/do-generate/next-do",
            get(handlers::a003_delivery_order::next_do),
        )
        .route(
            "/api/do-generate/:id",
            get(handlers::a003_delivery_order::get_by_id),
        )
        // ========================================
        // DO ALLOCATIONS
        // ========================================
        .route(
            "/api/do-allocation",
            get(handlers::a004_do_allocation::list),
        )
        // ========================================
        // DASHBOARDS
        // ========================================
        // D400 Allocation grid
        .route(
            "/api/do-allocation/grid",
            get(handlers::d400_allocation_grid::get_grid),
        )
        // D401 Row counts
        .route("/api/get-count", get(handlers::d401_row_counts::get_counts))
        .route(
            "/api/get-count/cards",
            get(handlers::d401_row_counts::get_cards),
        )
        .with_state(state)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
