//! Error types for the HTTP server.

use quill_core::{IndexError, SourceError};

use crate::template::TemplateError;

/// Error while starting or running the server.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ServeError {
    /// Page template failed to load or compile.
    #[error("{0}")]
    Template(#[from] TemplateError),

    /// Bind address was malformed.
    #[error("Invalid bind address: {0}")]
    Addr(#[from] std::net::AddrParseError),

    /// I/O error binding or serving.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure inside one request's render pipeline.
///
/// Caught at the handler boundary and converted to a 500 page; never
/// propagates out of a request.
#[derive(Debug, thiserror::Error)]
pub(crate) enum PipelineError {
    /// Upstream fetch failed.
    #[error("upstream fetch failed: {0}")]
    Source(#[from] SourceError),

    /// The fetched document tree was malformed.
    #[error("invalid document tree: {0}")]
    Index(#[from] IndexError),

    /// The blocking fetch task panicked or was cancelled.
    #[error("fetch task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
