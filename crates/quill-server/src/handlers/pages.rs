//! The wiki page handler.
//!
//! Every request runs the same pipeline: fetch the collection's document
//! tree, flatten it into a path index, resolve the request path, fetch the
//! matched document, render Markdown, rewrite wiki links, and substitute
//! into the page template. Failures anywhere in the pipeline become a 500
//! page; the process never dies for one bad request.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use percent_encoding::percent_decode_str;
use quill_core::{
    DocumentContent, IconSet, PathIndex, build_path_index, classify_icon, rewrite_links,
};

use crate::error::PipelineError;
use crate::markdown;
use crate::state::AppState;
use crate::template::TemplateContext;

/// Path of the document rendered for unresolved requests, if present.
const NOT_FOUND_PATH: &str = "/404";
/// Icon for 404 pages.
const NOT_FOUND_ICON: &str = "🥸";
/// Icon for 500 pages.
const ERROR_ICON: &str = "🔥";
/// Body when no `/404` document exists.
const NOT_FOUND_BODY: &str = "<p>Page not found.</p>";
/// Body for pipeline failures.
const ERROR_BODY: &str =
    "<p>Something went wrong, and the server failed to render the page.</p><p>Womp womp.</p>";

/// A resolved page, ready for template substitution.
#[derive(Debug)]
struct Page {
    status: StatusCode,
    /// Path shown in the page title (prefixed with the site name).
    title_path: String,
    html: String,
    updated_at: Option<String>,
    icon: IconSet,
}

/// Handle any request path.
pub(crate) async fn render_page(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let start = Instant::now();
    let path = resolve_request_path(uri.path());

    let page = match render_pipeline(&state, &path).await {
        Ok(page) => page,
        Err(err) => {
            tracing::error!(path = %path, error = %err, "Failed to render page");
            error_page()
        }
    };

    let status = page.status;
    let response = respond(&state, page, start);
    tracing::debug!(path = %path, status = %status, elapsed_ms = start.elapsed().as_millis(), "Rendered page");
    response
}

/// Map the raw request path to a path index key.
///
/// The root resolves to `/index`; everything else is percent-decoded.
fn resolve_request_path(raw: &str) -> String {
    if raw.is_empty() || raw == "/" {
        "/index".to_owned()
    } else {
        percent_decode_str(raw).decode_utf8_lossy().into_owned()
    }
}

async fn render_pipeline(state: &Arc<AppState>, path: &str) -> Result<Page, PipelineError> {
    let source = Arc::clone(&state.source);
    let tree = tokio::task::spawn_blocking(move || source.fetch_document_tree()).await??;
    let index = build_path_index(&tree)?;

    if let Some(entry) = index.get(path) {
        let content = fetch_content(state, entry.id.clone()).await?;
        let icon = classify_icon(content.icon.as_deref().unwrap_or_default());
        return Ok(Page {
            status: StatusCode::OK,
            title_path: path.to_owned(),
            html: render_document(state, &index, &content),
            updated_at: Some(content.updated_at),
            icon,
        });
    }

    // Unresolved: prefer a wiki-authored /404 document over the static body.
    if let Some(entry) = index.get(NOT_FOUND_PATH) {
        let content = fetch_content(state, entry.id.clone()).await?;
        return Ok(Page {
            status: StatusCode::NOT_FOUND,
            title_path: path.to_owned(),
            html: render_document(state, &index, &content),
            updated_at: Some(content.updated_at),
            icon: classify_icon(NOT_FOUND_ICON),
        });
    }

    Ok(Page {
        status: StatusCode::NOT_FOUND,
        title_path: NOT_FOUND_PATH.to_owned(),
        html: NOT_FOUND_BODY.to_owned(),
        updated_at: None,
        icon: classify_icon(NOT_FOUND_ICON),
    })
}

async fn fetch_content(
    state: &Arc<AppState>,
    id: String,
) -> Result<DocumentContent, PipelineError> {
    let source = Arc::clone(&state.source);
    Ok(tokio::task::spawn_blocking(move || source.fetch_content(&id)).await??)
}

fn render_document(state: &AppState, index: &PathIndex, content: &DocumentContent) -> String {
    let html = markdown::to_html(&content.text);
    rewrite_links(index, &html, &state.api_host, &state.site_url)
}

fn error_page() -> Page {
    Page {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        title_path: "/500".to_owned(),
        html: ERROR_BODY.to_owned(),
        updated_at: None,
        icon: classify_icon(ERROR_ICON),
    }
}

/// Substitute a resolved page into the template and build the response.
fn respond(state: &AppState, page: Page, start: Instant) -> Response {
    let context = TemplateContext {
        title: format!("{}{}", state.site_name, page.title_path),
        html: page.html,
        updated_at: page.updated_at,
        render_time: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        emoji: page.icon.emoji,
        favicon: page.icon.favicon,
    };

    match state.template.render(&context) {
        Ok(body) => (page.status, Html(body)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Template render failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to render page template",
            )
                .into_response()
        }
    }
}
