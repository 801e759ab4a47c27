//! Router construction.

use std::sync::Arc;

use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Create the application router.
///
/// A single catch-all route: every path and method resolves through the
/// wiki's path index.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(handlers::pages::render_page)
        .with_state(state)
}
