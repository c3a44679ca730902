//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;

use crate::application::services::VisitContext;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::resolve_client_ip;

/// Redirects a hook to its original URL and records the visit.
///
/// # Endpoint
///
/// `GET /{hook}`
///
/// # Request flow
///
/// 1. Resolve the hook (cache first, then store)
/// 2. Refuse expired links with 410 Gone
/// 3. Record one visit row and bump the visit counter
/// 4. Answer 302 Found with the original URL
///
/// # Errors
///
/// Returns 404 for an unknown hook, 410 for an expired link, and 500 when
/// visit recording fails.
pub async fn redirect_handler(
    Path(hook): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, AppError> {
    let details = state.resolver.resolve(&hook).await?;

    let ctx = VisitContext {
        from_addr: resolve_client_ip(&headers, addr),
        user_agent: header_string(&headers, header::USER_AGENT.as_str()),
        referrer: header_string(&headers, header::REFERER.as_str()),
    };

    let target = state.resolver.record_visit_and_redirect(&details, &ctx).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, target)]).into_response())
}

fn header_string(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
