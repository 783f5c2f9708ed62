//! API errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tierbank_config::ConfigError;
use tierbank_core::CoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Core(CoreError::InvalidArgument(_) | CoreError::Overflow(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Core(CoreError::InvalidSchedule(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Config(ConfigError::Parse(_) | ConfigError::Validation(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Config(ConfigError::NotFound(_) | ConfigError::Io(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
