//! Request-derived base URL for fully-qualified short links.

use axum::http::{HeaderMap, header};

/// Derives the short-link base (`scheme://host`) from request headers.
///
/// Uses the `Host` header and honors `X-Forwarded-Proto` when present,
/// defaulting to `http`. Returns `None` when no usable `Host` header exists;
/// callers fall back to the configured base URL.
pub fn base_url_from_headers(headers: &HeaderMap) -> Option<String> {
    let host = headers.get(header::HOST)?.to_str().ok()?.trim();
    if host.is_empty() {
        return None;
    }

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .filter(|v| *v == "https")
        .unwrap_or("http");

    Some(format!("{scheme}://{host}"))
}
