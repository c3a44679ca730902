//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, service wiring, and the Axum
//! server lifecycle.

use crate::application::services::{LinkLifecycleService, ResolveService, StatsService};
use crate::config::Config;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::persistence::{PgLinkRepository, PgStatsRepository};
use crate::infrastructure::reachability::HttpReachabilityChecker;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Redis cache (or NullCache fallback)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Migrations fail to apply
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let cache: Arc<dyn CacheService> = if let Some(redis_url) = &config.redis_url {
        match RedisCache::connect(redis_url).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                Arc::new(NullCache::new())
            }
        }
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    let pool_arc = Arc::new(pool.clone());
    let link_repository = Arc::new(PgLinkRepository::new(pool_arc.clone()));
    let stats_repository = Arc::new(PgStatsRepository::new(pool_arc));
    let probe = Arc::new(HttpReachabilityChecker::new(Duration::from_secs(
        config.probe_timeout_seconds,
    )));

    let state = AppState {
        lifecycle: Arc::new(LinkLifecycleService::new(
            link_repository.clone(),
            cache.clone(),
            probe,
        )),
        resolver: Arc::new(ResolveService::new(
            link_repository.clone(),
            stats_repository.clone(),
            cache.clone(),
        )),
        stats: Arc::new(StatsService::new(link_repository, stats_repository)),
        cache,
        db: pool,
        base_url: config.base_url.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
