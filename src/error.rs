//! Error types for mail-scrub.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Top-level error type for the service.
///
/// Every variant maps to a plain-text HTTP response; the display message
/// is the response body verbatim.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Request(#[from] RequestError),

    /// Unexpected failure inside the sanitizer, surfaced as 500.
    #[error("Error processing email: {0}")]
    Processing(String),
}

/// Request extraction errors, surfaced as 400 responses.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Raw body bytes are not valid UTF-8.
    #[error("Error: Could not decode request body.")]
    Decode,

    /// No usable text after both the structured and raw extraction paths.
    #[error("Error: No email body provided.")]
    EmptyBody,
}

impl Error {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Request(_) => StatusCode::BAD_REQUEST,
            Error::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;
