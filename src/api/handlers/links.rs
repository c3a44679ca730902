//! Handlers for link creation and deletion.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use crate::api::dto::links::{CreatePayload, RemovedLinkResponse, result_items};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::base_url_from_headers;

/// Creates short links for one or many URLs.
///
/// # Endpoint
///
/// `POST /api`
///
/// The body is either a single `{url, custom_hook?, expiration_date?}`
/// object or an array of them; the response mirrors the input shape.
/// Items are processed best-effort in input order.
///
/// # Status
///
/// - 201 when every item succeeded
/// - 207 Multi-Status on partial success
/// - 400 when every item failed
pub async fn create_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePayload>,
) -> Response {
    let (items, single) = match payload {
        CreatePayload::One(body) => (vec![body.into()], true),
        CreatePayload::Many(bodies) => {
            (bodies.into_iter().map(Into::into).collect(), false)
        }
    };

    let base_url = base_url_from_headers(&headers).unwrap_or_else(|| state.base_url.clone());

    let outcome = state.lifecycle.create_links(items, &base_url).await;

    let status = if outcome.error_count == 0 {
        StatusCode::CREATED
    } else if outcome.processed_count == 0 {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::MULTI_STATUS
    };

    let mut items = result_items(&outcome);

    if single {
        // Single-object input answers with a single object.
        match items.pop() {
            Some(item) => (status, Json(item)).into_response(),
            None => (status, Json(serde_json::json!({}))).into_response(),
        }
    } else {
        (status, Json(items)).into_response()
    }
}

/// Deletes a short link by hook.
///
/// # Endpoint
///
/// `DELETE /api/{hook}`
///
/// Returns the removed fully-qualified short URL on success, 404 for an
/// unknown hook.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(hook): Path<String>,
    headers: HeaderMap,
) -> Result<Json<RemovedLinkResponse>, AppError> {
    let base_url = base_url_from_headers(&headers).unwrap_or_else(|| state.base_url.clone());

    let removed = state.lifecycle.remove_link(&hook, &base_url).await?;

    Ok(Json(RemovedLinkResponse { url: removed.url }))
}
