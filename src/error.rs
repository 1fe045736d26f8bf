//! Error types for argstone.
//!
//! Uses thiserror for derive macros. Each variant maps to a process exit code
//! for the CLI and to an HTTP status for the `/open` endpoint.

use crate::exit_codes;
use crate::prompt::TemplateError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Main error type for argstone operations.
#[derive(Error, Debug)]
pub enum ArgstoneError {
    /// User provided invalid arguments or an invalid config file.
    #[error("{0}")]
    UserError(String),

    /// A submitted prompt request failed validation.
    #[error("{0}")]
    BadRequest(String),

    /// A prompt template could not be rendered.
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// The HTTP server failed to bind or stopped unexpectedly.
    #[error("Server error: {0}")]
    ServerError(String),

    /// The system browser could not open a URL.
    #[error("Failed to open browser: {0}")]
    BrowserError(String),
}

impl ArgstoneError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ArgstoneError::UserError(_) => exit_codes::USER_ERROR,
            ArgstoneError::BadRequest(_) => exit_codes::USER_ERROR,
            ArgstoneError::Template(_) => exit_codes::USER_ERROR,
            ArgstoneError::ServerError(_) => exit_codes::SERVER_FAILURE,
            ArgstoneError::BrowserError(_) => exit_codes::BROWSER_FAILURE,
        }
    }

    /// Returns the HTTP status used when this error ends a request.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ArgstoneError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ArgstoneError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Result type alias for argstone operations.
pub type Result<T> = std::result::Result<T, ArgstoneError>;
