//! Outline REST API client for Quill.
//!
//! Provides a sync HTTP client for the two Outline endpoints the wiki needs:
//!
//! - `POST /api/collections.documents` — nested document tree for one
//!   collection
//! - `POST /api/documents.info` — full content for one document
//!
//! Both calls authenticate with a Bearer API key and unwrap Outline's
//! `{"data": ...}` response envelope. The client implements
//! [`quill_core::DocumentSource`], so the server can swap it for a stub in
//! tests.

mod client;
mod error;

pub use client::OutlineClient;
pub use error::OutlineError;
