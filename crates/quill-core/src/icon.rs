//! Icon classification.
//!
//! Outline stores document icons as opaque tokens: either a literal emoji or
//! a named icon like `"collection"`. Only emoji can be shown inline and
//! embedded into a generated favicon; named icons fall back to the static
//! site favicon.

use std::sync::LazyLock;

use regex::Regex;

/// Favicon link tag used when the icon token is not a usable emoji.
pub const DEFAULT_FAVICON: &str = r#"<link rel="icon" href="/favicon.ico">"#;

static EMOJI_CHAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Regional_Indicator}\p{Extended_Pictographic}]").unwrap()
});

/// Display icon derived from an opaque icon token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSet {
    /// The token itself, when it is a usable emoji.
    pub emoji: Option<String>,
    /// Favicon `<link>` tag for the page head.
    pub favicon: String,
}

/// Classify an opaque icon token.
///
/// A token is emoji-like if it contains a character from the Unicode
/// `Regional_Indicator` or `Extended_Pictographic` classes (flags are pairs
/// of regional indicators, so a single-class check would miss them).
/// Emoji-like tokens become both the display emoji and a data-URI SVG
/// favicon embedding the literal character; anything else, including the
/// empty token, gets the static default favicon.
#[must_use]
pub fn classify_icon(token: &str) -> IconSet {
    if EMOJI_CHAR.is_match(token) {
        IconSet {
            emoji: Some(token.to_owned()),
            favicon: emoji_favicon(token),
        }
    } else {
        IconSet {
            emoji: None,
            favicon: DEFAULT_FAVICON.to_owned(),
        }
    }
}

fn emoji_favicon(token: &str) -> String {
    format!(
        "<link rel=\"icon\" href=\"data:image/svg+xml,\
         <svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22>\
         <text y=%22.9em%22 font-size=%2290%22>{token}</text></svg>\">"
    )
}
