use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON body returned for every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Bad request payload: missing field or malformed wallet address.
    /// Detected before any side effect.
    #[error("{0}")]
    Validation(String),

    /// Store unreadable or an append failed.
    #[error("storage error: {0}")]
    Storage(String),
}

impl AppError {
    pub fn missing_fields() -> Self {
        Self::Validation("Please fill in all fields".to_string())
    }

    pub fn invalid_wallet() -> Self {
        Self::Validation("Invalid wallet address".to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        Self::Storage(e.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::Storage(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
