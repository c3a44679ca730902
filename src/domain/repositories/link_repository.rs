//! Repository trait for link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for link records.
///
/// Hook and URL lookups are byte-exact (case-sensitive) matches.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its exact hook.
    ///
    /// Anything other than exactly one matching row is reported as `None`;
    /// duplicate rows are a data-integrity condition, not a hit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_hook(&self, hook: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its exact original URL.
    ///
    /// Used as the best-effort uniqueness pre-check before insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_original_url(&self, url: &str) -> Result<Option<Link>, AppError>;

    /// Inserts a new link with `visits = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidParameter`] when the store-level uniqueness
    /// constraint fires, [`AppError::Internal`] on other database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Hard-deletes a link by hook, returning the number of affected rows.
    ///
    /// Associated visit rows are kept (append-only log).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_by_hook(&self, hook: &str) -> Result<u64, AppError>;

    /// Increments the visit counter by exactly one.
    ///
    /// Expressed as a relative update at the store level so concurrent
    /// redirects of the same hook never lose counts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_visits(&self, id: i64) -> Result<(), AppError>;
}
