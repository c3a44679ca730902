//! Application services orchestrating repositories, cache, and probing.

mod lifecycle_service;
mod resolve_service;
mod stats_service;

pub use lifecycle_service::{BatchOutcome, CreateLinkItem, CreatedLink, LinkLifecycleService};
pub use resolve_service::{LINK_CACHE_TTL_SECONDS, ResolveService, VisitContext};
pub use stats_service::{StatsReport, StatsService, VISIT_LIST_LIMIT};

/// Namespace prefix for link entries in the shared cache.
const CACHE_KEY_PREFIX: &str = "hooklink:";

/// Builds the namespaced cache key for a hook.
pub(crate) fn link_cache_key(hook: &str) -> String {
    format!("{CACHE_KEY_PREFIX}{hook}")
}
