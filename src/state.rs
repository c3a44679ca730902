//! Shared application state.
//!
//! All handles are constructed once by the process entry point and injected
//! here; no service owns a global connection.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{LinkLifecycleService, ResolveService, StatsService};
use crate::infrastructure::cache::CacheService;

#[derive(Clone)]
pub struct AppState {
    pub lifecycle: Arc<LinkLifecycleService>,
    pub resolver: Arc<ResolveService>,
    pub stats: Arc<StatsService>,
    pub cache: Arc<dyn CacheService>,
    pub db: PgPool,
    /// Fallback short-link base when the request carries no Host header.
    pub base_url: String,
}
