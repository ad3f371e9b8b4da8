use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Handlers substitute a fallback for `Upstream` only; `Parse` always reaches the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    Upstream(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Configuration(_) | AppError::Parse(_) | AppError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::NotFound(msg) => tracing::info!("Not found: {msg}"),
            AppError::Configuration(msg) => tracing::error!("Configuration error: {msg}"),
            AppError::Parse(msg) => tracing::error!("Parse error: {msg}"),
            AppError::Upstream(msg) => tracing::error!("Upstream error: {msg}"),
        }

        let body = Json(json!({ "detail": self.to_string() }));

        (status, body).into_response()
    }
}
