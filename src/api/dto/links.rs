//! DTOs for link creation and deletion.

use crate::application::services::{BatchOutcome, CreateLinkItem, CreatedLink};
use crate::error::{AppError, ErrorInfo};
use serde::{Deserialize, Serialize};

/// One link to create.
///
/// `url` stays optional so a missing field surfaces as a typed
/// `REQUIRED_PARAMETER` item failure instead of a 422 from the extractor.
#[derive(Debug, Deserialize)]
pub struct CreateLinkBody {
    pub url: Option<String>,
    pub custom_hook: Option<String>,
    pub expiration_date: Option<String>,
}

impl From<CreateLinkBody> for CreateLinkItem {
    fn from(body: CreateLinkBody) -> Self {
        Self {
            url: body.url,
            custom_hook: body.custom_hook,
            expiration_date: body.expiration_date,
        }
    }
}

/// Request body of `POST /api`: a single object or an array of objects.
///
/// The answer mirrors the input shape: object in, object out; array in,
/// array out.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CreatePayload {
    Many(Vec<CreateLinkBody>),
    One(CreateLinkBody),
}

/// Per-item result in the create response.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CreateResultItem {
    Success {
        url: String,
    },
    Failure {
        #[serde(rename = "statusCode")]
        status_code: u16,
        error: ErrorInfo,
    },
}

impl From<&Result<CreatedLink, AppError>> for CreateResultItem {
    fn from(result: &Result<CreatedLink, AppError>) -> Self {
        match result {
            Ok(created) => Self::Success {
                url: created.url.clone(),
            },
            Err(err) => Self::Failure {
                status_code: err.status_code().as_u16(),
                error: err.to_error_info(),
            },
        }
    }
}

/// Response of `DELETE /api/{hook}`: the removed short URL.
#[derive(Debug, Serialize)]
pub struct RemovedLinkResponse {
    pub url: String,
}

/// Maps a batch outcome to the wire items.
pub fn result_items(outcome: &BatchOutcome) -> Vec<CreateResultItem> {
    outcome.results.iter().map(CreateResultItem::from).collect()
}
