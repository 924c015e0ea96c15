//! 路由配置

use axum::{Router, middleware, routing::get};

use badge_shared::observability::middleware::{http_tracing, request_id};

use crate::{handlers, state::AppState};

/// 徽章页面路由
pub fn badge_routes() -> Router<AppState> {
    Router::new()
        .route("/badges/mine", get(handlers::my_badges))
        .route("/badges/badge.php", get(handlers::issued_badge))
}

/// 构建完整的应用路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(badge_routes())
        .route("/health", get(handlers::health_check))
        .layer(middleware::from_fn(http_tracing))
        .layer(middleware::from_fn(request_id))
        .with_state(state)
}
