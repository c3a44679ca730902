//! Top-level router configuration.
//!
//! # Route structure
//!
//! - `GET    /{hook}`           - Redirect to the original URL (public)
//! - `GET    /health`           - Health check: DB and cache status
//! - `POST   /api`              - Create one or many short links
//! - `DELETE /api/{hook}`       - Delete a short link
//! - `GET    /api/{hook}/stats` - Visit statistics as JSON
//! - `GET    /app`              - Home page with the shorten form
//! - `GET    /app/{hook}/stats` - Visit statistics as HTML

use crate::api::handlers::{
    create_handler, delete_handler, health_handler, redirect_handler, stats_handler,
};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::{delete, get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = Router::new()
        .route("/", post(create_handler))
        .route("/{hook}", delete(delete_handler))
        .route("/{hook}/stats", get(stats_handler));

    let web_router = Router::new()
        .route("/", get(web::handlers::home_handler))
        .route("/{hook}/stats", get(web::handlers::stats_handler));

    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/{hook}", get(redirect_handler))
        .nest("/api", api_router)
        .nest("/app", web_router)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
