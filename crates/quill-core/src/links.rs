//! Wiki link rewriting.
//!
//! Converts document-to-document links authored in the upstream URL scheme
//! (`https://app.getoutline.example/doc/welcome-abc123` or `/doc/welcome-abc123`)
//! into the public site's scheme (`https://wiki.example/index` or `/index`).
//!
//! Replacement is literal substring substitution, not URL-aware parsing. It
//! matches anywhere in the HTML, attribute values and text alike. That keeps
//! the behavior predictable for the well-formed links Outline emits, at the
//! cost of over-matching if a document's raw URL appears in unrelated prose.

use url::Url;

use crate::index::PathIndex;

/// Rewrite every upstream document link in `html` to its public site path.
///
/// Entries are processed in index iteration order. For each entry, all
/// occurrences of the absolute upstream URL (`source_base` joined with the
/// entry's URL) are replaced with the absolute site URL (`site_base` joined
/// with the entry's path), then all remaining occurrences of the raw
/// relative URL are replaced with the path. Both replacements for one entry
/// complete before the next entry is processed.
///
/// The result is stable: once no upstream URLs remain, further applications
/// return the input unchanged.
#[must_use]
pub fn rewrite_links(index: &PathIndex, html: &str, source_base: &Url, site_base: &Url) -> String {
    let mut content = html.to_owned();

    for (path, entry) in index.iter() {
        if let (Ok(old_url), Ok(new_url)) = (source_base.join(&entry.url), site_base.join(path)) {
            content = content.replace(old_url.as_str(), new_url.as_str());
        }
        content = content.replace(&entry.url, path);
    }

    content
}
