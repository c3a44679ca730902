//! Outbound reachability probing for candidate URLs.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Pluggable reachability check used by URL validation.
///
/// A probe answers a single question: does the URL respond at all within a
/// bounded time? Any HTTP response, including 4xx/5xx, counts as reachable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReachabilityChecker: Send + Sync {
    async fn probe(&self, url: &str) -> bool;
}

/// HEAD-probe implementation backed by reqwest.
///
/// Builds a fresh client per probe so no cached or pooled connection can
/// answer for a host that is actually down.
pub struct HttpReachabilityChecker {
    timeout: Duration,
}

impl HttpReachabilityChecker {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl ReachabilityChecker for HttpReachabilityChecker {
    async fn probe(&self, url: &str) -> bool {
        let client = match reqwest::Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(0)
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                tracing::error!("failed to build probe client: {e}");
                return false;
            }
        };

        match client.head(url).send().await {
            Ok(response) => {
                debug!("Probe {}: {}", url, response.status());
                true
            }
            Err(e) => {
                debug!("Probe {} failed: {}", url, e);
                false
            }
        }
    }
}
