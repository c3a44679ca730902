//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::application::services::StatsReport;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves visit statistics for a hook.
///
/// # Endpoint
///
/// `GET /api/{hook}/stats`
///
/// The stats read itself is lenient, so existence is checked separately
/// here to give the API its 404 semantics.
///
/// # Response
///
/// Visit count, creation date, and up to 100 raw visit rows in insertion
/// order.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(hook): Path<String>,
) -> Result<Json<StatsReport>, AppError> {
    if !state.stats.hook_exists(&hook).await? {
        return Err(AppError::not_found("Invalid URL"));
    }

    Ok(Json(state.stats.get_stats(&hook).await))
}
