//! Expiration-date parsing and validation.

use crate::error::{AppError, InvalidReason};
use chrono::{DateTime, NaiveDateTime, Utc};

const EXPIRATION_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses an optional `YYYY-MM-DD HH:MM:SS` expiration date.
///
/// Timestamps are interpreted as UTC. An absent input means "no expiration"
/// and maps to `None`.
///
/// # Errors
///
/// Returns [`AppError::InvalidParameter`] when the input does not match the
/// format or lies in the past relative to now.
pub fn parse_expiration(raw: Option<&str>) -> Result<Option<DateTime<Utc>>, AppError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let naive = NaiveDateTime::parse_from_str(raw, EXPIRATION_FORMAT).map_err(|_| {
        AppError::invalid("expiration_date", InvalidReason::ExpirationMalformed)
    })?;

    let timestamp = DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc);

    if timestamp < Utc::now() {
        return Err(AppError::invalid(
            "expiration_date",
            InvalidReason::ExpirationInPast,
        ));
    }

    Ok(Some(timestamp))
}
