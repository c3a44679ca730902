//! Client IP resolution from proxy headers.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Resolves the originating client address.
///
/// Precedence: `Client-IP` header, then the first entry of `X-Forwarded-For`,
/// then the peer socket address. Header values are trusted as-is; the service
/// is expected to run behind a proxy it controls.
pub fn resolve_client_ip(headers: &HeaderMap, remote: SocketAddr) -> String {
    if let Some(ip) = header_value(headers, "client-ip") {
        return ip;
    }

    if let Some(forwarded) = header_value(headers, "x-forwarded-for") {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    remote.ip().to_string()
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
