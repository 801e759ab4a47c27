//! Error types for the Outline API client.

use quill_core::SourceError;

/// Error from Outline API operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum OutlineError {
    /// HTTP request failed (network error, timeout, malformed response).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },
}

impl From<OutlineError> for SourceError {
    fn from(err: OutlineError) -> Self {
        match err {
            OutlineError::HttpResponse { status, body } => Self::HttpResponse { status, body },
            err @ OutlineError::HttpRequest(_) => Self::transport(err),
        }
    }
}
