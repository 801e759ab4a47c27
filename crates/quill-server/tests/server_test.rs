//! End-to-end router tests with a stub document source.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use quill_core::{DocumentContent, DocumentNode, DocumentSource, SourceError};
use quill_server::{Config, PageTemplate};
use tower::ServiceExt;
use url::Url;

struct StubSource {
    tree: Result<Vec<DocumentNode>, u16>,
    content: Option<DocumentContent>,
}

impl DocumentSource for StubSource {
    fn fetch_document_tree(&self) -> Result<Vec<DocumentNode>, SourceError> {
        match &self.tree {
            Ok(tree) => Ok(tree.clone()),
            Err(status) => Err(SourceError::HttpResponse {
                status: *status,
                body: "upstream unavailable".to_owned(),
            }),
        }
    }

    fn fetch_content(&self, id: &str) -> Result<DocumentContent, SourceError> {
        self.content.clone().ok_or(SourceError::HttpResponse {
            status: 404,
            body: format!("no content for {id}"),
        })
    }
}

fn config() -> Config {
    Config {
        host: "127.0.0.1".to_owned(),
        port: 0,
        api_key: "test-key".to_owned(),
        collection_id: "col-1".to_owned(),
        api_host: Url::parse("https://outline.example.com").unwrap(),
        site_url: Url::parse("https://wiki.example.com").unwrap(),
        template_path: PathBuf::from("unused"),
        site_name: "leo".to_owned(),
    }
}

fn app(source: StubSource) -> axum::Router {
    let template = PageTemplate::from_source(
        "<title>{{ title }}</title>{{ favicon }}<main>{{ html }}</main>".to_owned(),
    )
    .unwrap();
    quill_server::router(Arc::new(source), template, &config())
}

fn index_doc() -> DocumentNode {
    DocumentNode {
        id: "1".to_owned(),
        url: "/doc/index-abc".to_owned(),
        title: "index".to_owned(),
        icon: None,
        children: Vec::new(),
    }
}

fn content() -> DocumentContent {
    DocumentContent {
        title: "index".to_owned(),
        text: "# Hello\n\nSee [notes](https://outline.example.com/doc/index-abc).".to_owned(),
        icon: Some("🔥".to_owned()),
        updated_at: "2024-05-01T12:00:00.000Z".to_owned(),
    }
}

async fn get(app: axum::Router, path: &str) -> (StatusCode, String, String) {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|value| value.to_str().unwrap().to_owned())
        .unwrap_or_default();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_root_renders_index_document() {
    let app = app(StubSource {
        tree: Ok(vec![index_doc()]),
        content: Some(content()),
    });

    let (status, content_type, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/html; charset=utf-8");
    assert!(body.contains("<title>leo/index</title>"));
    assert!(body.contains("<h1>Hello</h1>"));
    // The absolute upstream link was rewritten to the public site.
    assert!(body.contains("https://wiki.example.com/index"));
    assert!(!body.contains("outline.example.com/doc/index-abc"));
    // The document's emoji icon became the favicon.
    assert!(body.contains("data:image/svg+xml"));
    assert!(body.contains("🔥"));
}

#[tokio::test]
async fn test_unknown_path_without_404_document() {
    let app = app(StubSource {
        tree: Ok(vec![index_doc()]),
        content: Some(content()),
    });

    let (status, content_type, body) = get(app, "/missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(content_type, "text/html; charset=utf-8");
    assert!(body.contains("<title>leo/404</title>"));
    assert!(body.contains("<p>Page not found.</p>"));
}

#[tokio::test]
async fn test_unknown_path_with_404_document() {
    let mut not_found = index_doc();
    not_found.id = "9".to_owned();
    not_found.title = "404".to_owned();
    not_found.url = "/doc/404-xyz".to_owned();
    let app = app(StubSource {
        tree: Ok(vec![index_doc(), not_found]),
        content: Some(DocumentContent {
            title: "404".to_owned(),
            text: "you are lost".to_owned(),
            icon: None,
            updated_at: "2024-05-01T12:00:00.000Z".to_owned(),
        }),
    });

    let (status, _, body) = get(app, "/missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("<title>leo/missing</title>"));
    assert!(body.contains("you are lost"));
}

#[tokio::test]
async fn test_upstream_failure_renders_500_page() {
    let app = app(StubSource {
        tree: Err(503),
        content: None,
    });

    let (status, content_type, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type, "text/html; charset=utf-8");
    assert!(body.contains("<title>leo/500</title>"));
    assert!(body.contains("the server failed to render the page"));
}

#[tokio::test]
async fn test_nested_document_resolves_by_title_chain() {
    let tree = vec![DocumentNode {
        id: "1".to_owned(),
        url: "/doc/guides-1".to_owned(),
        title: "guides".to_owned(),
        icon: None,
        children: vec![DocumentNode {
            id: "2".to_owned(),
            url: "/doc/setup-2".to_owned(),
            title: "setup".to_owned(),
            icon: None,
            children: Vec::new(),
        }],
    }];
    let app = app(StubSource {
        tree: Ok(tree),
        content: Some(content()),
    });

    let (status, _, body) = get(app, "/guides/setup").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>leo/guides/setup</title>"));
}
