//! Unified error types for the service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Sidecar communication error.
    #[error("sidecar error: {0}")]
    Sidecar(#[from] SidecarError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors talking to the Dapr sidecar's state API.
#[derive(Error, Debug)]
pub enum SidecarError {
    /// HTTP request to the sidecar failed at the transport level.
    #[error("sidecar request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Sidecar response body could not be decoded as JSON.
    #[error("failed to decode sidecar payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl IntoResponse for SidecarError {
    fn into_response(self) -> Response {
        // Transport failures and undecodable payloads both mean the
        // sidecar broke; surface as a gateway error.
        let status = StatusCode::BAD_GATEWAY;
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Sidecar(e) => e.into_response(),
            other => {
                let body = Json(json!({ "error": other.to_string() }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
