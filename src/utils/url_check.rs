//! Syntactic URL validation.

use crate::error::{AppError, InvalidReason};
use url::Url;
use validator::ValidateUrl;

/// Checks that a candidate URL is structurally sound.
///
/// Two stages: a structural parse requiring a non-empty scheme and host,
/// then the validator crate's stricter URL filter. The input is returned
/// unmodified on success; no normalization is performed.
///
/// # Errors
///
/// Returns [`AppError::InvalidParameter`] with `UrlMalformed` or
/// `UrlFilterFailed` respectively.
pub fn validate_url_syntax(raw: &str) -> Result<(), AppError> {
    let parsed =
        Url::parse(raw).map_err(|_| AppError::invalid("url", InvalidReason::UrlMalformed))?;

    if parsed.scheme().is_empty() || !parsed.has_host() {
        return Err(AppError::invalid("url", InvalidReason::UrlMalformed));
    }

    if !raw.validate_url() {
        return Err(AppError::invalid("url", InvalidReason::UrlFilterFailed));
    }

    Ok(())
}
