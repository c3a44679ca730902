//! Cache service trait and error types.

use async_trait::async_trait;

/// Hard cap on requested TTLs: 30 days. Larger values are clamped.
pub const MAX_TTL_SECONDS: u64 = 2_592_000;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),

    #[error("Cache operation error: {0}")]
    Operation(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Key/value cache with per-entry TTL, used to accelerate hook lookups.
///
/// Implementations must be thread-safe and fail open: a broken cache degrades
/// to database lookups, it never takes a request down with it.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a cached value.
    ///
    /// Returns `Ok(None)` on both cache miss and backend error; errors are
    /// logged by the implementation and treated as misses.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores a value with the given TTL in seconds.
    ///
    /// TTLs above [`MAX_TTL_SECONDS`] are clamped. Backend errors are logged
    /// and swallowed so the request flow is never disrupted.
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()>;

    /// Removes a cached value. Used when a link is deleted.
    async fn delete(&self, key: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;
}
