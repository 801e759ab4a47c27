//! Core domain logic for the Quill wiki engine.
//!
//! This crate is pure: it never performs I/O. It provides:
//!
//! - The document model ([`DocumentNode`], [`DocumentContent`]) deserialized
//!   from the upstream Outline API payloads
//! - [`build_path_index`] for flattening a nested document tree into a
//!   [`PathIndex`] keyed by public site paths
//! - [`rewrite_links`] for converting cross-document links from the upstream
//!   URL scheme to the public site's URL scheme
//! - [`classify_icon`] for turning an opaque icon token into a display emoji
//!   and a favicon fragment
//! - The [`DocumentSource`] trait, the seam between this core and whatever
//!   backend actually fetches documents
//!
//! # Example
//!
//! ```
//! use quill_core::{DocumentNode, build_path_index};
//!
//! let roots = vec![DocumentNode {
//!     id: "1".to_owned(),
//!     url: "/doc/welcome-abc123".to_owned(),
//!     title: "index".to_owned(),
//!     icon: None,
//!     children: Vec::new(),
//! }];
//!
//! let index = build_path_index(&roots).unwrap();
//! assert!(index.get("/index").is_some());
//! ```

mod document;
mod icon;
mod index;
mod links;
mod source;

pub use document::{DocumentContent, DocumentNode, PathIndexEntry};
pub use icon::{DEFAULT_FAVICON, IconSet, classify_icon};
pub use index::{IndexError, PathIndex, build_path_index};
pub use links::rewrite_links;
pub use source::{DocumentSource, SourceError};
