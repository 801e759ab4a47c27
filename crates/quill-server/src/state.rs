//! Application state.
//!
//! Shared state for all request handlers. Everything here is immutable for
//! the life of the process; per-request data never crosses requests.

use std::sync::Arc;

use quill_core::DocumentSource;
use url::Url;

use crate::template::PageTemplate;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Backend that fetches document trees and content.
    pub(crate) source: Arc<dyn DocumentSource>,
    /// Compiled page template.
    pub(crate) template: PageTemplate,
    /// Outline instance base URL, for absolute link rewriting.
    pub(crate) api_host: Url,
    /// Public site base URL, the rewrite target.
    pub(crate) site_url: Url,
    /// Prefix for page titles.
    pub(crate) site_name: String,
}
