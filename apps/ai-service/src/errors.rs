use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type shared by the extraction, parsing and matching
/// components. Implements `IntoResponse` so Axum handlers can return
/// `Result<T, AppError>` directly.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Text extraction failed: {0}")]
    Extraction(String),

    #[error("LLM request failed: {0}")]
    LlmRequest(#[from] LlmError),

    #[error("Malformed LLM response: {0}")]
    MalformedResponse(String),

    #[error("Embedding failed: {0}")]
    Embedding(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::UnsupportedFormat(_) => (StatusCode::BAD_REQUEST, "UNSUPPORTED_FORMAT"),
            AppError::Extraction(_) => (StatusCode::BAD_REQUEST, "EXTRACTION_FAILED"),
            AppError::EmptyInput(_) => (StatusCode::BAD_REQUEST, "EMPTY_INPUT"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::LlmRequest(_) => (StatusCode::INTERNAL_SERVER_ERROR, "LLM_ERROR"),
            AppError::MalformedResponse(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "MALFORMED_LLM_RESPONSE")
            }
            AppError::Embedding(_) => (StatusCode::INTERNAL_SERVER_ERROR, "EMBEDDING_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            AppError::UnsupportedFormat(_)
            | AppError::Extraction(_)
            | AppError::EmptyInput(_)
            | AppError::Validation(_) => self.to_string(),
            AppError::LlmRequest(e) => {
                tracing::error!("LLM error: {e}");
                "An AI processing error occurred".to_string()
            }
            AppError::MalformedResponse(msg) => {
                tracing::error!("Malformed LLM response: {msg}");
                "The AI backend returned an unexpected response".to_string()
            }
            AppError::Embedding(msg) => {
                tracing::error!("Embedding error: {msg}");
                "An embedding error occurred".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
