//! Visit statistics service.

use std::sync::Arc;

use crate::domain::entities::Visit;
use crate::domain::repositories::{LinkRepository, StatsRepository};
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

/// Maximum number of visit rows returned per stats request.
pub const VISIT_LIST_LIMIT: i64 = 100;

/// Aggregate visit count plus raw visit rows for one hook.
///
/// `creation_date` is `None` when the hook is unknown (zeroed report).
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub visits: i64,
    pub creation_date: Option<DateTime<Utc>>,
    pub data: Vec<Visit>,
}

impl StatsReport {
    fn empty() -> Self {
        Self {
            visits: 0,
            creation_date: None,
            data: Vec::new(),
        }
    }
}

/// Service for retrieving per-link visit statistics.
pub struct StatsService {
    link_repository: Arc<dyn LinkRepository>,
    stats_repository: Arc<dyn StatsRepository>,
}

impl StatsService {
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        stats_repository: Arc<dyn StatsRepository>,
    ) -> Self {
        Self {
            link_repository,
            stats_repository,
        }
    }

    /// Checks whether a hook exists.
    ///
    /// The stats read path itself is lenient; callers needing existence
    /// semantics (the API layer's 404) call this first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn hook_exists(&self, hook: &str) -> Result<bool, AppError> {
        Ok(self.link_repository.find_by_hook(hook).await?.is_some())
    }

    /// Retrieves the visit count, creation date, and up to
    /// [`VISIT_LIST_LIMIT`] visit rows for a hook, in insertion order.
    ///
    /// Best-effort telemetry: an unknown hook or a backend failure yields a
    /// zeroed report instead of an error. Swallowed failures are logged.
    pub async fn get_stats(&self, hook: &str) -> StatsReport {
        let summary = match self.stats_repository.count_visits_and_creation(hook).await {
            Ok(Some(summary)) => summary,
            Ok(None) => return StatsReport::empty(),
            Err(e) => {
                warn!("stats summary lookup failed for {hook}: {e}");
                return StatsReport::empty();
            }
        };

        let data = match self
            .stats_repository
            .list_visits(summary.link_id, VISIT_LIST_LIMIT)
            .await
        {
            Ok(rows) => rows,
            Err(e) => {
                warn!("visit listing failed for {hook}: {e}");
                Vec::new()
            }
        };

        StatsReport {
            visits: summary.visits,
            creation_date: Some(summary.creation_date),
            data,
        }
    }
}
