//! Document model for the upstream Outline API.
//!
//! Field names follow the upstream JSON payloads (camelCase), so these types
//! deserialize directly from `collections.documents` and `documents.info`
//! responses.

use serde::Deserialize;

/// One node in a collection's nested document tree.
///
/// Returned by the `collections.documents` endpoint. `children` is ordered
/// and forms a tree rooted at the collection (no cycles).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocumentNode {
    /// Opaque unique identifier.
    pub id: String,
    /// Upstream-relative URL for this document (e.g. `/doc/welcome-abc123`).
    pub url: String,
    /// Display title; derives the public path segment.
    pub title: String,
    /// Opaque icon token. May be an emoji, a named icon, or absent.
    #[serde(default)]
    pub icon: Option<String>,
    /// Ordered child documents.
    #[serde(default)]
    pub children: Vec<DocumentNode>,
}

/// Flattened, public-facing record derived from a [`DocumentNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathIndexEntry {
    /// Opaque unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Opaque icon token, if the source carried one.
    pub icon: Option<String>,
    /// Upstream-relative URL.
    pub url: String,
}

impl From<&DocumentNode> for PathIndexEntry {
    fn from(node: &DocumentNode) -> Self {
        Self {
            id: node.id.clone(),
            title: node.title.clone(),
            icon: node.icon.clone(),
            url: node.url.clone(),
        }
    }
}

/// Full document content, fetched per request from `documents.info`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentContent {
    /// Display title.
    pub title: String,
    /// Raw Markdown text.
    pub text: String,
    /// Opaque icon token, if set on the document.
    #[serde(default)]
    pub icon: Option<String>,
    /// Last update timestamp, as reported upstream.
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_document_node_deserializes_nested_tree() {
        let json = r#"{
            "id": "a1",
            "url": "/doc/parent-a1",
            "title": "Parent",
            "children": [
                {"id": "b2", "url": "/doc/child-b2", "title": "Child", "children": []}
            ]
        }"#;

        let node: DocumentNode = serde_json::from_str(json).unwrap();

        assert_eq!(node.id, "a1");
        assert_eq!(node.icon, None);
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].title, "Child");
        assert!(node.children[0].children.is_empty());
    }

    #[test]
    fn test_document_node_missing_children_defaults_empty() {
        let json = r#"{"id": "a1", "url": "/doc/a1", "title": "Leaf", "icon": "📌"}"#;

        let node: DocumentNode = serde_json::from_str(json).unwrap();

        assert_eq!(node.icon.as_deref(), Some("📌"));
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_document_content_uses_camel_case() {
        let json = r##"{
            "title": "Welcome",
            "text": "# Hello",
            "updatedAt": "2024-05-01T12:00:00.000Z"
        }"##;

        let content: DocumentContent = serde_json::from_str(json).unwrap();

        assert_eq!(content.title, "Welcome");
        assert_eq!(content.updated_at, "2024-05-01T12:00:00.000Z");
        assert_eq!(content.icon, None);
    }

    #[test]
    fn test_path_index_entry_from_node_drops_children() {
        let node: DocumentNode = serde_json::from_str(
            r#"{
                "id": "a1",
                "url": "/doc/a1",
                "title": "Parent",
                "children": [{"id": "b2", "url": "/doc/b2", "title": "Child"}]
            }"#,
        )
        .unwrap();

        let entry = PathIndexEntry::from(&node);

        assert_eq!(entry.id, "a1");
        assert_eq!(entry.title, "Parent");
        assert_eq!(entry.url, "/doc/a1");
        assert_eq!(entry.icon, None);
    }
}
