//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

const LINK_COLUMNS: &str = "id, original_url, hook, created_at, expires_at, visits";

/// PostgreSQL repository for link storage and retrieval.
///
/// Uses SQLx prepared statements; all lookups are case-sensitive since the
/// hook and URL columns are plain `TEXT` compared byte-for-byte.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_by_hook(&self, hook: &str) -> Result<Option<Link>, AppError> {
        let rows: Vec<Link> = sqlx::query_as(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE hook = $1"
        ))
        .bind(hook)
        .fetch_all(self.pool.as_ref())
        .await?;

        // More than one row for a hook is a data-integrity condition; the
        // unique index should make it impossible, but treat it as not found
        // rather than redirecting to an arbitrary winner.
        if rows.len() > 1 {
            tracing::error!("duplicate rows for hook {hook}");
            return Ok(None);
        }

        Ok(rows.into_iter().next())
    }

    async fn find_by_original_url(&self, url: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE original_url = $1"
        ))
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as(&format!(
            "INSERT INTO links (original_url, hook, expires_at, visits) \
             VALUES ($1, $2, $3, 0) \
             RETURNING {LINK_COLUMNS}"
        ))
        .bind(&new_link.original_url)
        .bind(&new_link.hook)
        .bind(new_link.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete_by_hook(&self, hook: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE hook = $1")
            .bind(hook)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn increment_visits(&self, id: i64) -> Result<(), AppError> {
        // Relative update: correct under concurrent redirects of the same hook.
        sqlx::query("UPDATE links SET visits = visits + 1 WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
