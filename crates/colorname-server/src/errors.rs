//! Error types for startup configuration and request handling.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use miette::Diagnostic;
use serde_json::json;
use thiserror::Error;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised while reading server configuration from the environment
#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not an IP address")]
    #[diagnostic(
        code(colorname::config::invalid_host),
        help("use a literal address such as 127.0.0.1 or 0.0.0.0")
    )]
    InvalidHost { var: &'static str, value: String },

    #[error("invalid {var}: {value:?} is not a port number")]
    #[diagnostic(
        code(colorname::config::invalid_port),
        help("ports are integers between 0 and 65535")
    )]
    InvalidPort { var: &'static str, value: String },
}

// ============================================================================
// Request Errors
// ============================================================================

/// Errors returned to HTTP clients
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    /// The body was not valid JSON, lacked `color`, or had the wrong type.
    #[error("{0}")]
    #[diagnostic(code(colorname::api::invalid_body))]
    InvalidBody(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
