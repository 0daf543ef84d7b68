//! Error types for the todo server.
//!
//! `ApiError` is what handlers and extractors return; it renders the two
//! failure responses the API knows about. `ServerError` and `ConfigError`
//! only occur while starting the binary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Request-level failures, rendered as HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Unknown id, or an id segment that is not a number. Renders an empty 404.
    #[error("todo not found")]
    NotFound,

    /// The body could not be read or decoded. The message is sent back as
    /// plain text.
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
        }
    }
}

/// An environment variable held a value that could not be parsed.
#[derive(Debug, Error)]
#[error("invalid value {value:?} for {key}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

/// Startup failures of the `todo-server` binary.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
