//! Error types shared by the persistence, service, and HTTP layers.
//!
//! [`StoreError`] is what repositories return; it keeps a path collision apart
//! from every other persistence failure so the service can retry on it.
//! [`AppError`] is the classified outcome handed to the HTTP boundary, which
//! maps each variant to exactly one status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Failure reported by a [`crate::domain::repositories::ShortUrlRepository`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The unique key on `short_url_path` rejected the insert.
    #[error("short url path already exists: {0}")]
    DuplicatePath(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload returned to API clients.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid destination or malformed request input (400).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Lookup or delete target does not exist (404).
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Client tried to set a server-assigned field (409).
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Stored destination cannot be used as a redirect target (422).
    #[error("{message}")]
    Unprocessable { message: String, details: Value },

    /// Every generated path collided with an existing record (500).
    #[error("{message}")]
    GenerationExhausted { message: String, details: Value },

    /// Persistence failure unrelated to path uniqueness (500).
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn unprocessable(message: impl Into<String>, details: Value) -> Self {
        Self::Unprocessable {
            message: message.into(),
            details,
        }
    }

    pub fn generation_exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::GenerationExhausted {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::GenerationExhausted { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Converts the error into the serializable payload sent to clients.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("immutable_field", message, details),
            AppError::Unprocessable { message, details } => {
                ("invalid_redirect", message, details)
            }
            AppError::GenerationExhausted { message, details } => {
                ("generation_exhausted", message, details)
            }
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            // Only reachable if a repository reports a collision outside the
            // create retry loop.
            StoreError::DuplicatePath(path) => {
                tracing::error!(short_url_path = %path, "Short url path collision");
                AppError::internal(
                    "Short url path collision",
                    json!({ "shortUrlPath": path }),
                )
            }
            StoreError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                AppError::internal("Database error", json!({}))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|k| k.to_string())
            .collect();

        AppError::bad_request(
            "Request validation failed",
            json!({ "fields": fields, "errors": errors }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::bad_request("m", json!({})), StatusCode::BAD_REQUEST),
            (AppError::not_found("m", json!({})), StatusCode::NOT_FOUND),
            (AppError::conflict("m", json!({})), StatusCode::CONFLICT),
            (
                AppError::unprocessable("m", json!({})),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::generation_exhausted("m", json!({})),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::internal("m", json!({})),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.status_code(), status, "{err:?}");
        }
    }

    #[test]
    fn test_error_info_codes_are_distinct() {
        let codes: std::collections::HashSet<_> = [
            AppError::bad_request("m", json!({})),
            AppError::not_found("m", json!({})),
            AppError::conflict("m", json!({})),
            AppError::unprocessable("m", json!({})),
            AppError::generation_exhausted("m", json!({})),
            AppError::internal("m", json!({})),
        ]
        .iter()
        .map(|e| e.to_error_info().code)
        .collect();

        assert_eq!(codes.len(), 6);
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::not_found("Short url not found", json!({ "shortUrlPath": "abc" }));
        assert_eq!(err.to_string(), "Short url not found");
    }

    #[test]
    fn test_store_error_duplicate_path_is_internal() {
        let err: AppError = StoreError::DuplicatePath("abc".to_string()).into();
        let info = err.to_error_info();
        assert_eq!(info.code, "internal_error");
        assert_eq!(info.details, json!({ "shortUrlPath": "abc" }));
    }

    #[test]
    fn test_store_error_database_hides_details() {
        let err: AppError = StoreError::Database(sqlx::Error::RowNotFound).into();
        let info = err.to_error_info();
        assert_eq!(info.code, "internal_error");
        assert_eq!(info.details, json!({}));
    }
}
