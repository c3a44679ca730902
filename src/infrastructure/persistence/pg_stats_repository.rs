//! PostgreSQL implementation of the visit-log repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewVisit, Visit};
use crate::domain::repositories::{StatsRepository, VisitSummary};
use crate::error::AppError;

/// PostgreSQL repository for visit recording and statistics reads.
pub struct PgStatsRepository {
    pool: Arc<PgPool>,
}

impl PgStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatsRepository for PgStatsRepository {
    async fn insert_visit(&self, visit: NewVisit) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO link_visits (link_id, from_addr, browser_info, referrer, os_info) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(visit.link_id)
        .bind(&visit.from_addr)
        .bind(&visit.browser_info)
        .bind(&visit.referrer)
        .bind(&visit.os_info)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn count_visits_and_creation(
        &self,
        hook: &str,
    ) -> Result<Option<VisitSummary>, AppError> {
        let row: Option<(i64, i64, DateTime<Utc>)> =
            sqlx::query_as("SELECT id, visits, created_at FROM links WHERE hook = $1")
                .bind(hook)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(|(link_id, visits, creation_date)| VisitSummary {
            link_id,
            visits,
            creation_date,
        }))
    }

    async fn list_visits(&self, link_id: i64, limit: i64) -> Result<Vec<Visit>, AppError> {
        let rows = sqlx::query_as(
            "SELECT from_addr, browser_info, referrer, os_info \
             FROM link_visits WHERE link_id = $1 ORDER BY id LIMIT $2",
        )
        .bind(link_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }
}
