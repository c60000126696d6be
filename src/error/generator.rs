//! Errors raised by the generator endpoints.
//!
//! The wire contract hides every detail: any failure answers HTTP 500 with
//! `{"error": "Erro interno do servidor"}`. The detail only reaches the log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Body text of every generator failure response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Request body could not be read as the expected JSON shape.
    #[error("malformed {endpoint} payload: {source}")]
    MalformedPayload {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize {endpoint} response: {source}")]
    Serialization {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl GeneratorError {
    pub fn endpoint(&self) -> &'static str {
        match self {
            GeneratorError::MalformedPayload { endpoint, .. }
            | GeneratorError::Serialization { endpoint, .. } => endpoint,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            GeneratorError::MalformedPayload { .. } => "E_GEN_PAYLOAD",
            GeneratorError::Serialization { .. } => "E_GEN_SERIALIZE",
        }
    }
}

impl IntoResponse for GeneratorError {
    fn into_response(self) -> Response {
        tracing::error!(
            endpoint = self.endpoint(),
            code = self.error_code(),
            "generator request failed: {}",
            self
        );
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": INTERNAL_ERROR_MESSAGE })),
        )
            .into_response()
    }
}
