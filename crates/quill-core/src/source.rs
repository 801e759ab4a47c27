//! Document source abstraction.
//!
//! The [`DocumentSource`] trait is the seam between the pure core and the
//! backend that actually fetches documents. This enables unit testing the
//! request pipeline without a live Outline instance and keeps the core free
//! of HTTP concerns.

use crate::document::{DocumentContent, DocumentNode};

/// Error from a document source backend.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SourceError {
    /// The backend returned a non-success HTTP status.
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// Transport-level failure (connection error, timeout, malformed
    /// response).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SourceError {
    /// Wrap a backend-specific error as a transport failure.
    #[must_use]
    pub fn transport(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(source))
    }
}

/// Backend that fetches document trees and document content.
///
/// Implementations make one attempt per call; retries are not part of the
/// contract.
pub trait DocumentSource: Send + Sync {
    /// Fetch the full nested document tree for the configured collection.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport failure or a non-success
    /// upstream status.
    fn fetch_document_tree(&self) -> Result<Vec<DocumentNode>, SourceError>;

    /// Fetch full content for one document by id.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport failure or a non-success
    /// upstream status.
    fn fetch_content(&self, id: &str) -> Result<DocumentContent, SourceError>;
}
