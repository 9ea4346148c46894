use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::llm_client::LlmError;

/// Fallback message when a failure carries nothing more useful.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate tickets from text.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    ConfigurationMissing(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Upstream completion failed: {0}")]
    Upstream(#[from] LlmError),

    #[error("Malformed model output: {0}")]
    MalformedOutput(#[source] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::ConfigurationMissing(_)
            | AppError::Upstream(_)
            | AppError::MalformedOutput(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Best-effort human message for a processing failure: the upstream API's
    /// own message, else the cause's message, else a generic fallback.
    fn failure_message(&self) -> String {
        let message = match self {
            AppError::Upstream(e) => e
                .upstream_message()
                .map(str::to_string)
                .unwrap_or_else(|| e.to_string()),
            AppError::MalformedOutput(e) => e.to_string(),
            AppError::Internal(e) => e.to_string(),
            other => other.to_string(),
        };
        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }

    fn body(&self) -> Value {
        match self {
            AppError::ConfigurationMissing(msg) | AppError::InvalidRequest(msg) => {
                json!({ "error": msg })
            }
            AppError::MethodNotAllowed => json!({ "error": self.to_string() }),
            AppError::Upstream(_) | AppError::MalformedOutput(_) => json!({
                "error": self.failure_message(),
                "details": self.to_string(),
            }),
            AppError::Internal(e) => json!({
                "error": self.failure_message(),
                "details": format!("{e:#}"),
            }),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::ConfigurationMissing(msg) => tracing::error!("Configuration missing: {msg}"),
            AppError::Upstream(e) => tracing::error!("Upstream completion error: {e}"),
            AppError::MalformedOutput(e) => tracing::error!("Malformed model output: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            AppError::InvalidRequest(_) | AppError::MethodNotAllowed => {}
        }

        (status, Json(self.body())).into_response()
    }
}
