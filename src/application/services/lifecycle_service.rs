//! Link creation and deletion service.

use std::sync::Arc;

use crate::application::services::link_cache_key;
use crate::domain::entities::NewLink;
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, InvalidReason};
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::reachability::ReachabilityChecker;
use crate::utils::expiration::parse_expiration;
use crate::utils::hook::{DEFAULT_HOOK_LENGTH, generate_hook, normalize_custom_hook};
use crate::utils::url_check::validate_url_syntax;
use tracing::warn;

/// One entry of a batch create request.
///
/// `url` is optional only so its absence can surface as a typed
/// `REQUIRED_PARAMETER` failure instead of a deserialization error.
#[derive(Debug, Clone)]
pub struct CreateLinkItem {
    pub url: Option<String>,
    pub custom_hook: Option<String>,
    pub expiration_date: Option<String>,
}

/// Successful creation: the fully-qualified short URL.
#[derive(Debug, Clone)]
pub struct CreatedLink {
    pub url: String,
}

/// Outcome of a best-effort batch create.
///
/// `results` preserves input order one-to-one; a failed item never aborts
/// the items after it.
#[derive(Debug)]
pub struct BatchOutcome {
    pub results: Vec<Result<CreatedLink, AppError>>,
    pub processed_count: usize,
    pub error_count: usize,
}

/// Service for creating and removing short links.
///
/// Owns the per-item validation pipeline: URL syntax, uniqueness,
/// reachability, hook generation/validation, and expiration checks.
pub struct LinkLifecycleService {
    link_repository: Arc<dyn LinkRepository>,
    cache: Arc<dyn CacheService>,
    probe: Arc<dyn ReachabilityChecker>,
}

impl LinkLifecycleService {
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        cache: Arc<dyn CacheService>,
        probe: Arc<dyn ReachabilityChecker>,
    ) -> Self {
        Self {
            link_repository,
            cache,
            probe,
        }
    }

    /// Creates short links for a batch of items, strictly in input order.
    ///
    /// Items are processed independently; each result is either the
    /// fully-qualified short URL (`base_url` + hook) or the item's own typed
    /// failure. The cache is not pre-populated on create; entries appear
    /// lazily on first resolve.
    pub async fn create_links(&self, items: Vec<CreateLinkItem>, base_url: &str) -> BatchOutcome {
        let mut results = Vec::with_capacity(items.len());
        let mut processed_count = 0;
        let mut error_count = 0;

        for item in items {
            match self.create_single(item, base_url).await {
                Ok(created) => {
                    processed_count += 1;
                    results.push(Ok(created));
                }
                Err(err) => {
                    error_count += 1;
                    results.push(Err(err));
                }
            }
        }

        BatchOutcome {
            results,
            processed_count,
            error_count,
        }
    }

    /// Removes a link by hook and invalidates its cache entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown hook and
    /// [`AppError::Internal`] when the delete affects no rows despite the
    /// existence check (lost a race with a concurrent delete).
    pub async fn remove_link(&self, hook: &str, base_url: &str) -> Result<CreatedLink, AppError> {
        if self.link_repository.find_by_hook(hook).await?.is_none() {
            return Err(AppError::not_found("Short link not found"));
        }

        let affected = self.link_repository.delete_by_hook(hook).await?;
        if affected == 0 {
            return Err(AppError::internal("No links were removed"));
        }

        if let Err(e) = self.cache.delete(&link_cache_key(hook)).await {
            warn!("failed to invalidate cache for {hook}: {e}");
        }

        Ok(CreatedLink {
            url: short_url(base_url, hook),
        })
    }

    async fn create_single(
        &self,
        item: CreateLinkItem,
        base_url: &str,
    ) -> Result<CreatedLink, AppError> {
        let url = item.url.as_deref().ok_or_else(|| AppError::required("url"))?;

        validate_url_syntax(url)?;

        if self
            .link_repository
            .find_by_original_url(url)
            .await?
            .is_some()
        {
            return Err(AppError::invalid("url", InvalidReason::UrlAlreadyExists));
        }

        if !self.probe.probe(url).await {
            return Err(AppError::invalid("url", InvalidReason::UrlNotReachable));
        }

        let hook = match item.custom_hook.as_deref() {
            Some(custom) => normalize_custom_hook(custom, DEFAULT_HOOK_LENGTH)?,
            None => generate_hook(DEFAULT_HOOK_LENGTH),
        };

        // Collisions are surfaced, not retried, for generated hooks too.
        if self.link_repository.find_by_hook(&hook).await?.is_some() {
            return Err(AppError::invalid(
                "custom_hook",
                InvalidReason::HookCollision,
            ));
        }

        let expires_at = parse_expiration(item.expiration_date.as_deref())?;

        // Close the race window between the initial uniqueness check and the
        // insert; the store-level constraint remains the final arbiter.
        if self
            .link_repository
            .find_by_original_url(url)
            .await?
            .is_some()
        {
            return Err(AppError::invalid("url", InvalidReason::UrlAlreadyExists));
        }

        let link = self
            .link_repository
            .insert(NewLink {
                original_url: url.to_string(),
                hook,
                expires_at,
            })
            .await?;

        Ok(CreatedLink {
            url: short_url(base_url, &link.hook),
        })
    }
}

fn short_url(base_url: &str, hook: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), hook)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Link;
    use crate::domain::repositories::MockLinkRepository;
    use crate::infrastructure::cache::MockCacheService;
    use crate::infrastructure::reachability::MockReachabilityChecker;
    use chrono::Utc;

    const BASE: &str = "http://host";

    fn stored_link(id: i64, hook: &str, url: &str) -> Link {
        Link {
            id,
            original_url: url.to_string(),
            hook: hook.to_string(),
            created_at: Utc::now(),
            expires_at: None,
            visits: 0,
        }
    }

    fn service(
        link_repo: MockLinkRepository,
        cache: MockCacheService,
        probe: MockReachabilityChecker,
    ) -> LinkLifecycleService {
        LinkLifecycleService::new(Arc::new(link_repo), Arc::new(cache), Arc::new(probe))
    }

    fn reachable_probe() -> MockReachabilityChecker {
        let mut probe = MockReachabilityChecker::new();
        probe.expect_probe().returning(|_| true);
        probe
    }

    fn item(url: &str) -> CreateLinkItem {
        CreateLinkItem {
            url: Some(url.to_string()),
            custom_hook: None,
            expiration_date: None,
        }
    }

    #[tokio::test]
    async fn test_create_single_url_success() {
        let mut link_repo = MockLinkRepository::new();
        link_repo
            .expect_find_by_original_url()
            .times(2)
            .returning(|_| Ok(None));
        link_repo.expect_find_by_hook().returning(|_| Ok(None));
        link_repo
            .expect_insert()
            .withf(|new_link| new_link.hook.len() == 8 && new_link.expires_at.is_none())
            .times(1)
            .returning(|new_link| Ok(stored_link(1, &new_link.hook, &new_link.original_url)));

        let service = service(link_repo, MockCacheService::new(), reachable_probe());

        let outcome = service
            .create_links(vec![item("http://example.com/a")], BASE)
            .await;

        assert_eq!(outcome.processed_count, 1);
        assert_eq!(outcome.error_count, 0);
        let created = outcome.results[0].as_ref().unwrap();
        assert!(created.url.starts_with("http://host/"));
        assert_eq!(created.url.len(), BASE.len() + 1 + 8);
    }

    #[tokio::test]
    async fn test_create_truncates_long_custom_hook() {
        let mut link_repo = MockLinkRepository::new();
        link_repo
            .expect_find_by_original_url()
            .returning(|_| Ok(None));
        link_repo
            .expect_find_by_hook()
            .withf(|hook| hook == "abcdefgh")
            .returning(|_| Ok(None));
        link_repo
            .expect_insert()
            .withf(|new_link| new_link.hook == "abcdefgh")
            .times(1)
            .returning(|new_link| Ok(stored_link(1, &new_link.hook, &new_link.original_url)));

        let service = service(link_repo, MockCacheService::new(), reachable_probe());

        let outcome = service
            .create_links(
                vec![CreateLinkItem {
                    url: Some("http://example.com/a".to_string()),
                    custom_hook: Some("abcdefghijkl".to_string()),
                    expiration_date: None,
                }],
                BASE,
            )
            .await;

        assert_eq!(outcome.results[0].as_ref().unwrap().url, "http://host/abcdefgh");
    }

    #[tokio::test]
    async fn test_create_rejects_short_custom_hook() {
        let mut link_repo = MockLinkRepository::new();
        link_repo
            .expect_find_by_original_url()
            .returning(|_| Ok(None));
        link_repo.expect_insert().times(0);

        let service = service(link_repo, MockCacheService::new(), reachable_probe());

        let outcome = service
            .create_links(
                vec![CreateLinkItem {
                    url: Some("http://example.com/a".to_string()),
                    custom_hook: Some("abc".to_string()),
                    expiration_date: None,
                }],
                BASE,
            )
            .await;

        let err = outcome.results[0].as_ref().unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidParameter {
                field: "custom_hook",
                reason: InvalidReason::HookTooShort,
            }
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_hook_collision() {
        let mut link_repo = MockLinkRepository::new();
        link_repo
            .expect_find_by_original_url()
            .returning(|_| Ok(None));
        link_repo
            .expect_find_by_hook()
            .returning(|hook| Ok(Some(stored_link(5, hook, "http://other.example"))));
        link_repo.expect_insert().times(0);

        let service = service(link_repo, MockCacheService::new(), reachable_probe());

        let outcome = service
            .create_links(vec![item("http://example.com/a")], BASE)
            .await;

        let err = outcome.results[0].as_ref().unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidParameter {
                field: "custom_hook",
                reason: InvalidReason::HookCollision,
            }
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_unreachable_url() {
        let mut link_repo = MockLinkRepository::new();
        link_repo
            .expect_find_by_original_url()
            .returning(|_| Ok(None));
        link_repo.expect_insert().times(0);

        let mut probe = MockReachabilityChecker::new();
        probe.expect_probe().returning(|_| false);

        let service = service(link_repo, MockCacheService::new(), probe);

        let outcome = service
            .create_links(vec![item("http://unreachable.example")], BASE)
            .await;

        let err = outcome.results[0].as_ref().unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidParameter {
                field: "url",
                reason: InvalidReason::UrlNotReachable,
            }
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_missing_url() {
        let service = service(
            MockLinkRepository::new(),
            MockCacheService::new(),
            MockReachabilityChecker::new(),
        );

        let outcome = service
            .create_links(
                vec![CreateLinkItem {
                    url: None,
                    custom_hook: None,
                    expiration_date: None,
                }],
                BASE,
            )
            .await;

        let err = outcome.results[0].as_ref().unwrap_err();
        assert!(matches!(err, AppError::RequiredParameter { field: "url" }));
    }

    #[tokio::test]
    async fn test_create_rejects_past_expiration() {
        let mut link_repo = MockLinkRepository::new();
        link_repo
            .expect_find_by_original_url()
            .returning(|_| Ok(None));
        link_repo.expect_find_by_hook().returning(|_| Ok(None));
        link_repo.expect_insert().times(0);

        let service = service(link_repo, MockCacheService::new(), reachable_probe());

        let outcome = service
            .create_links(
                vec![CreateLinkItem {
                    url: Some("http://example.com/a".to_string()),
                    custom_hook: None,
                    expiration_date: Some("2001-01-01 00:00:00".to_string()),
                }],
                BASE,
            )
            .await;

        let err = outcome.results[0].as_ref().unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidParameter {
                field: "expiration_date",
                reason: InvalidReason::ExpirationInPast,
            }
        ));
    }

    #[tokio::test]
    async fn test_batch_continues_past_failed_item() {
        let mut link_repo = MockLinkRepository::new();
        // Item 2 is a duplicate URL; items 1 and 3 are fresh.
        link_repo
            .expect_find_by_original_url()
            .returning(|url| {
                if url == "http://example.com/dup" {
                    Ok(Some(stored_link(9, "dup00000", url)))
                } else {
                    Ok(None)
                }
            });
        link_repo.expect_find_by_hook().returning(|_| Ok(None));
        link_repo
            .expect_insert()
            .times(2)
            .returning(|new_link| Ok(stored_link(1, &new_link.hook, &new_link.original_url)));

        let service = service(link_repo, MockCacheService::new(), reachable_probe());

        let outcome = service
            .create_links(
                vec![
                    item("http://example.com/1"),
                    item("http://example.com/dup"),
                    item("http://example.com/3"),
                ],
                BASE,
            )
            .await;

        assert_eq!(outcome.processed_count, 2);
        assert_eq!(outcome.error_count, 1);
        assert!(outcome.results[0].is_ok());
        assert!(outcome.results[2].is_ok());

        let err = outcome.results[1].as_ref().unwrap_err();
        assert_eq!(err.type_tag(), "INVALID_PARAMETER");
        assert!(matches!(
            err,
            AppError::InvalidParameter {
                field: "url",
                reason: InvalidReason::UrlAlreadyExists,
            }
        ));
    }

    #[tokio::test]
    async fn test_remove_link_invalidates_cache() {
        let mut link_repo = MockLinkRepository::new();
        link_repo
            .expect_find_by_hook()
            .withf(|hook| hook == "ab3f9c1d")
            .returning(|hook| Ok(Some(stored_link(1, hook, "http://example.com/a"))));
        link_repo
            .expect_delete_by_hook()
            .times(1)
            .returning(|_| Ok(1));

        let mut cache = MockCacheService::new();
        cache
            .expect_delete()
            .withf(|key| key == "hooklink:ab3f9c1d")
            .times(1)
            .returning(|_| Ok(()));

        let service = service(link_repo, cache, MockReachabilityChecker::new());

        let removed = service.remove_link("ab3f9c1d", BASE).await.unwrap();
        assert_eq!(removed.url, "http://host/ab3f9c1d");
    }

    #[tokio::test]
    async fn test_remove_unknown_hook_is_not_found() {
        let mut link_repo = MockLinkRepository::new();
        link_repo.expect_find_by_hook().returning(|_| Ok(None));
        link_repo.expect_delete_by_hook().times(0);

        let service = service(
            link_repo,
            MockCacheService::new(),
            MockReachabilityChecker::new(),
        );

        let err = service.remove_link("missing1", BASE).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_remove_race_yields_server_error() {
        let mut link_repo = MockLinkRepository::new();
        link_repo
            .expect_find_by_hook()
            .returning(|hook| Ok(Some(stored_link(1, hook, "http://example.com/a"))));
        link_repo.expect_delete_by_hook().returning(|_| Ok(0));

        let service = service(
            link_repo,
            MockCacheService::new(),
            MockReachabilityChecker::new(),
        );

        let err = service.remove_link("ab3f9c1d", BASE).await.unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
