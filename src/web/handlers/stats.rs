//! Link statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::domain::entities::Visit;
use crate::state::AppState;

/// Template for the link statistics page.
///
/// Renders `templates/stats.html` with the visit counter and the raw visit
/// rows. Like the JSON stats path, the page is lenient: an unknown hook
/// renders a zeroed page rather than a 404.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub hook: String,
    pub visits: i64,
    pub creation_date: String,
    pub data: Vec<Visit>,
}

/// Renders the statistics page for a hook.
///
/// # Endpoint
///
/// `GET /app/{hook}/stats`
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(hook): Path<String>,
) -> impl IntoResponse {
    let report = state.stats.get_stats(&hook).await;

    StatsTemplate {
        hook,
        visits: report.visits,
        creation_date: report
            .creation_date
            .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string()),
        data: report.data,
    }
}
