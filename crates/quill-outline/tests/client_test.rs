//! Integration tests for [`OutlineClient`] against a local mock upstream.
//!
//! Each test spins up a one-shot HTTP server on a loopback port, points the
//! client at it, and asserts both the parsed result and the request the
//! client actually sent.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;

use quill_core::DocumentSource;
use quill_outline::{OutlineClient, OutlineError};
use url::Url;

/// Start a mock upstream that answers one request with the given status line
/// and JSON body. Returns the base URL and a receiver for the raw request
/// (head and body) the server saw.
fn spawn_upstream(status_line: &'static str, body: &'static str) -> (Url, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock upstream");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            let request = handle_request(stream, status_line, body);
            let _ = tx.send(request);
        }
    });

    let base = Url::parse(&format!("http://{addr}")).expect("mock upstream url");
    (base, rx)
}

fn handle_request(stream: TcpStream, status_line: &str, body: &str) -> String {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
    let mut request = String::new();
    let mut content_length = 0usize;

    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
            content_length = value.trim().parse().unwrap_or(0);
        }
        let done = line == "\r\n";
        request.push_str(&line);
        if done {
            break;
        }
    }

    let mut payload = vec![0u8; content_length];
    if reader.read_exact(&mut payload).is_ok() {
        request.push_str(&String::from_utf8_lossy(&payload));
    }

    let mut stream = stream;
    let _ = write!(
        stream,
        "HTTP/1.1 {status_line}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\r\n{body}",
        body.len()
    );
    request
}

#[test]
fn test_collection_documents_parses_tree() {
    let (base, rx) = spawn_upstream(
        "200 OK",
        r#"{"data": [
            {"id": "a1", "url": "/doc/index-a1", "title": "index", "children": [
                {"id": "b2", "url": "/doc/notes-b2", "title": "notes", "children": []}
            ]}
        ]}"#,
    );
    let client = OutlineClient::new(&base, "secret-key", "col-9");

    let tree = client.collection_documents().expect("fetch tree");

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].title, "index");
    assert_eq!(tree[0].children[0].id, "b2");

    let request = rx.recv().expect("captured request");
    assert!(request.starts_with("POST /api/collections.documents"));
    assert!(
        request
            .to_ascii_lowercase()
            .contains("authorization: bearer secret-key")
    );
    assert!(request.contains(r#""id":"col-9""#) || request.contains(r#""id": "col-9""#));
}

#[test]
fn test_document_info_parses_content() {
    let (base, rx) = spawn_upstream(
        "200 OK",
        r##"{"data": {
            "title": "index",
            "text": "# Hello",
            "icon": "🔥",
            "updatedAt": "2024-05-01T12:00:00.000Z"
        }}"##,
    );
    let client = OutlineClient::new(&base, "secret-key", "col-9");

    let content = client.document_info("a1").expect("fetch content");

    assert_eq!(content.title, "index");
    assert_eq!(content.text, "# Hello");
    assert_eq!(content.icon.as_deref(), Some("🔥"));
    assert_eq!(content.updated_at, "2024-05-01T12:00:00.000Z");

    let request = rx.recv().expect("captured request");
    assert!(request.starts_with("POST /api/documents.info"));
    assert!(request.contains(r#""id":"a1""#) || request.contains(r#""id": "a1""#));
}

#[test]
fn test_error_status_surfaces_status_and_body() {
    let (base, _rx) = spawn_upstream("401 Unauthorized", r#"{"error": "authentication_required"}"#);
    let client = OutlineClient::new(&base, "bad-key", "col-9");

    let err = client.collection_documents().unwrap_err();

    match err {
        OutlineError::HttpResponse { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("authentication_required"));
        }
        other => panic!("expected HttpResponse, got {other:?}"),
    }
}

#[test]
fn test_document_source_maps_errors() {
    let (base, _rx) = spawn_upstream("500 Internal Server Error", "{}");
    let client = OutlineClient::new(&base, "key", "col-9");

    let err = client.fetch_document_tree().unwrap_err();

    assert!(matches!(
        err,
        quill_core::SourceError::HttpResponse { status: 500, .. }
    ));
}
