//! Health check handler.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: bool,
    pub cache: bool,
}

/// Reports database and cache health.
///
/// # Endpoint
///
/// `GET /health`
///
/// Answers 200 when the database responds, 503 otherwise. Cache state is
/// reported but does not degrade the status; the service works without it.
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let database = sqlx::query("SELECT 1").execute(&state.db).await.is_ok();
    let cache = state.cache.health_check().await;

    let (status_code, status) = if database {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            database,
            cache,
        }),
    )
}
