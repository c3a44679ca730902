use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Fine-grained reason attached to an [`AppError::InvalidParameter`].
///
/// Error categories are carried as explicit tags end to end; nothing in the
/// crate infers a category from message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    UrlMalformed,
    UrlFilterFailed,
    UrlAlreadyExists,
    UrlNotReachable,
    HookTooShort,
    HookCollision,
    ExpirationMalformed,
    ExpirationInPast,
}

#[derive(Debug)]
pub enum AppError {
    RequiredParameter { field: &'static str },
    InvalidParameter { field: &'static str, reason: InvalidReason },
    NotFound { message: String },
    Expired,
    Internal { message: String },
}

/// Machine-readable error payload used both in HTTP responses and in
/// per-item results of batch operations.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    #[serde(rename = "statusCode")]
    status_code: u16,
    error: ErrorInfo,
}

impl AppError {
    pub fn required(field: &'static str) -> Self {
        Self::RequiredParameter { field }
    }

    pub fn invalid(field: &'static str, reason: InvalidReason) -> Self {
        Self::InvalidParameter { field, reason }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::RequiredParameter { .. } | Self::InvalidParameter { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Expired => StatusCode::GONE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::RequiredParameter { .. } => "REQUIRED_PARAMETER",
            Self::InvalidParameter { .. } => "INVALID_PARAMETER",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Expired => "EXPIRED_URL",
            Self::Internal { .. } => "SERVER_ERROR",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::RequiredParameter { field } => format!("Required parameter {field}"),
            Self::InvalidParameter { field, reason } => match reason {
                InvalidReason::UrlMalformed => {
                    format!("Invalid parameter {field} - Not well formed")
                }
                InvalidReason::UrlFilterFailed => {
                    format!("Invalid parameter {field} - Filter match fail")
                }
                InvalidReason::UrlAlreadyExists => {
                    format!("Invalid parameter {field} - Already exists")
                }
                InvalidReason::UrlNotReachable => {
                    format!("Invalid parameter {field} - Not reachable")
                }
                InvalidReason::HookTooShort
                | InvalidReason::HookCollision
                | InvalidReason::ExpirationMalformed
                | InvalidReason::ExpirationInPast => format!("Invalid parameter {field}"),
            },
            Self::NotFound { message } => message.clone(),
            Self::Expired => "Shortened URL expired".to_string(),
            Self::Internal { message } => message.clone(),
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo {
            kind: self.type_tag(),
            message: self.message(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                // The store-level constraint is the final arbiter of the
                // check-then-act uniqueness race. Constraint position decides
                // which parameter lost the race.
                return match db.constraint() {
                    Some("links_hook_key") => {
                        Self::invalid("custom_hook", InvalidReason::HookCollision)
                    }
                    _ => Self::invalid("url", InvalidReason::UrlAlreadyExists),
                };
            }
        }

        tracing::error!("database error: {e}");
        Self::internal("Error occurred while statement execution")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status_code: self.status_code().as_u16(),
            error: self.to_error_info(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}
