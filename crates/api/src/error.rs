use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use leadlink_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `leadlink-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Denied(msg) => (StatusCode::FORBIDDEN, "DENIED", msg.clone()),
                CoreError::Write(msg) => {
                    tracing::error!(error = %msg, "storage write failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "WRITE_ERROR",
                        "A storage operation failed".to_string(),
                    )
                }
                CoreError::Inconsistent(msg) => {
                    tracing::error!(error = %msg, "inconsistent storage state");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INCONSISTENT_STATE",
                        "Stored data is in an inconsistent state".to_string(),
                    )
                }
            },
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
