//! Path index construction.
//!
//! Flattens a collection's nested document tree into an ordered mapping from
//! public site path to document metadata. Paths are `/`-joined ancestor title
//! chains, always starting with `/`.

use crate::document::{DocumentNode, PathIndexEntry};

/// Error from [`build_path_index`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum IndexError {
    /// A node carried no usable title, so no path segment can be derived.
    #[error("document {id} has an empty title")]
    EmptyTitle {
        /// Identifier of the offending node.
        id: String,
    },
}

/// Insertion-ordered mapping from public path to [`PathIndexEntry`].
///
/// Iteration order is the traversal order of [`build_path_index`], which is
/// what makes link rewriting deterministic. Inserting a duplicate path
/// overwrites the value but keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathIndex {
    entries: Vec<(String, PathIndexEntry)>,
}

impl PathIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, overwriting any existing entry at the same path.
    pub fn insert(&mut self, path: String, entry: PathIndexEntry) {
        if let Some(existing) = self.entries.iter_mut().find(|(p, _)| *p == path) {
            existing.1 = entry;
        } else {
            self.entries.push((path, entry));
        }
    }

    /// Look up the entry for a public path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&PathIndexEntry> {
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, entry)| entry)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PathIndexEntry)> {
        self.entries
            .iter()
            .map(|(path, entry)| (path.as_str(), entry))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the index holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Flatten a document tree into a [`PathIndex`].
///
/// Walks depth-first from `roots` at prefix `/`, registering each visited
/// node at `prefix + title` and descending into children at
/// `prefix + title + "/"`.
///
/// Traversal order is part of the contract: within one level, siblings are
/// registered in order until the first one that has children; the walk
/// descends into that subtree and does not return to the remaining siblings
/// at that level. Which documents are resolvable depends on this order.
///
/// # Errors
///
/// Returns [`IndexError::EmptyTitle`] if a visited node has an empty title.
pub fn build_path_index(roots: &[DocumentNode]) -> Result<PathIndex, IndexError> {
    let mut index = PathIndex::new();
    visit(roots, "/", &mut index)?;
    Ok(index)
}

fn visit(nodes: &[DocumentNode], prefix: &str, index: &mut PathIndex) -> Result<(), IndexError> {
    for node in nodes {
        if node.title.is_empty() {
            return Err(IndexError::EmptyTitle {
                id: node.id.clone(),
            });
        }

        index.insert(
            format!("{prefix}{}", node.title),
            PathIndexEntry::from(node),
        );

        if !node.children.is_empty() {
            // Stops scanning the rest of this level once a subtree is entered.
            return visit(&node.children, &format!("{prefix}{}/", node.title), index);
        }
    }

    Ok(())
}
