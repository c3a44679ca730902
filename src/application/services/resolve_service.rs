//! Hook resolution and visit recording service.

use std::sync::Arc;

use crate::application::services::link_cache_key;
use crate::domain::entities::{LinkDetails, NewVisit};
use crate::domain::repositories::{LinkRepository, StatsRepository};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::user_agent::{browser_name, os_name};
use tracing::warn;

/// TTL for cached link details on the redirect read path.
pub const LINK_CACHE_TTL_SECONDS: u64 = 3600;

/// Request metadata captured for the visit log.
///
/// Fields are plain strings, empty when the corresponding header was absent.
#[derive(Debug, Clone)]
pub struct VisitContext {
    pub from_addr: String,
    pub user_agent: String,
    pub referrer: String,
}

/// Service for the redirect read path: cache-then-store lookup, expiration
/// enforcement, and visit recording.
pub struct ResolveService {
    link_repository: Arc<dyn LinkRepository>,
    stats_repository: Arc<dyn StatsRepository>,
    cache: Arc<dyn CacheService>,
}

impl ResolveService {
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        stats_repository: Arc<dyn StatsRepository>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            link_repository,
            stats_repository,
            cache,
        }
    }

    /// Resolves a hook to its link details, consulting the cache first.
    ///
    /// A cache hit skips the store entirely. On a miss the store row is
    /// cached for [`LINK_CACHE_TTL_SECONDS`] under a namespaced key. An
    /// undecodable cache entry is treated as a miss.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the hook matches no link.
    pub async fn resolve(&self, hook: &str) -> Result<LinkDetails, AppError> {
        let key = link_cache_key(hook);

        if let Ok(Some(cached)) = self.cache.get(&key).await {
            match serde_json::from_str::<LinkDetails>(&cached) {
                Ok(details) => return Ok(details),
                Err(e) => warn!("discarding undecodable cache entry for {hook}: {e}"),
            }
        }

        let link = self
            .link_repository
            .find_by_hook(hook)
            .await?
            .ok_or_else(|| AppError::not_found("Invalid URL"))?;

        let details = LinkDetails::from(&link);

        match serde_json::to_string(&details) {
            Ok(payload) => {
                if let Err(e) = self.cache.set(&key, &payload, LINK_CACHE_TTL_SECONDS).await {
                    warn!("failed to cache link details for {hook}: {e}");
                }
            }
            Err(e) => warn!("failed to encode link details for {hook}: {e}"),
        }

        Ok(details)
    }

    /// Records a visit and returns the redirect target.
    ///
    /// The visit row is inserted before the counter increment; both must
    /// succeed. The increment is a relative update at the store level, so
    /// concurrent redirects never lose counts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Expired`] when the link's expiry is strictly in
    /// the past, [`AppError::Internal`] when either persistence step fails.
    pub async fn record_visit_and_redirect(
        &self,
        details: &LinkDetails,
        ctx: &VisitContext,
    ) -> Result<String, AppError> {
        if details.is_expired() {
            return Err(AppError::Expired);
        }

        self.stats_repository
            .insert_visit(NewVisit {
                link_id: details.id,
                from_addr: ctx.from_addr.clone(),
                browser_info: browser_name(&ctx.user_agent),
                referrer: ctx.referrer.clone(),
                os_info: os_name(&ctx.user_agent),
            })
            .await?;

        self.link_repository.increment_visits(details.id).await?;

        Ok(normalize_redirect_target(&details.original_url))
    }
}

/// Prefixes `http://` when the stored URL carries no scheme.
///
/// Validated URLs always have one; this also covers legacy rows written by
/// other tooling directly into the store.
fn normalize_redirect_target(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}
