//! Repository trait for visit recording and statistics.

use crate::domain::entities::{NewVisit, Visit};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Aggregate counters for one link, looked up by hook.
#[derive(Debug, Clone)]
pub struct VisitSummary {
    pub link_id: i64,
    pub visits: i64,
    pub creation_date: DateTime<Utc>,
}

/// Repository interface for the visit log.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStatsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Appends one visit row. Rows are never updated or deleted afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert_visit(&self, visit: NewVisit) -> Result<(), AppError>;

    /// Looks up the visit counter and creation date for a hook.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_visits_and_creation(&self, hook: &str)
    -> Result<Option<VisitSummary>, AppError>;

    /// Lists up to `limit` visit rows for a link, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_visits(&self, link_id: i64, limit: i64) -> Result<Vec<Visit>, AppError>;
}
