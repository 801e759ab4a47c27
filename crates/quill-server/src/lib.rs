//! HTTP server for the Quill wiki engine.
//!
//! Serves a personal wiki by proxying an Outline collection: every request
//! fetches the collection's document tree, flattens it into a path index,
//! fetches the matched document's Markdown, renders it to HTML, rewrites
//! cross-document links to the public site's URL scheme, and substitutes the
//! result into a single HTML template.
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum catch-all route (quill-server)
//!                        │
//!                        ├─► DocumentSource (quill-outline) ── tree + content
//!                        ├─► quill-core ── path index + link rewriting + icons
//!                        └─► pulldown-cmark + minijinja ── HTML page
//! ```
//!
//! Requests are independent by design: no cache, no coalescing, no shared
//! mutable state. Each request's pipeline completes or fails as one unit,
//! and a failure renders a 500 page instead of crashing the process.
//!
//! # Quick Start
//!
//! ```ignore
//! use quill_server::{Config, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env().unwrap();
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod config;
mod error;
mod handlers;
mod markdown;
mod state;
mod template;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use axum::Router;
use quill_core::DocumentSource;
use quill_outline::OutlineClient;

pub use config::{Config, ConfigError, DEFAULT_PORT};
pub use error::ServeError;
pub use template::{PageTemplate, TemplateError};

use state::AppState;

/// Build the application router from a document source and a compiled
/// template.
///
/// Split out from [`run_server`] so tests can drive the router directly
/// with a stub [`DocumentSource`].
#[must_use]
pub fn router(source: Arc<dyn DocumentSource>, template: PageTemplate, config: &Config) -> Router {
    let state = Arc::new(AppState {
        source,
        template,
        api_host: config.api_host.clone(),
        site_url: config.site_url.clone(),
        site_name: config.site_name.clone(),
    });

    app::create_router(state)
}

/// Run the server until shutdown.
///
/// Loads the page template, constructs the Outline client, and serves the
/// catch-all wiki route on the configured address.
///
/// # Errors
///
/// Returns an error if the template cannot be loaded or the listener fails
/// to bind.
pub async fn run_server(config: Config) -> Result<(), ServeError> {
    let template = PageTemplate::from_file(&config.template_path)?;

    let source: Arc<dyn DocumentSource> = Arc::new(OutlineClient::new(
        &config.api_host,
        config.api_key.clone(),
        config.collection_id.clone(),
    ));

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    let app = router(source, template, &config);

    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}
