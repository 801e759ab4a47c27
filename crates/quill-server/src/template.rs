//! Page template.
//!
//! One HTML template, loaded from `TEMPLATE_PATH` and compiled once at
//! startup, renders every page (content, 404 and 500 alike). The context
//! mirrors what the template sees: `title`, `html`, `updatedAt`,
//! `renderTime`, `emoji`, `favicon`.

use std::path::{Path, PathBuf};

use minijinja::{AutoEscape, Environment};
use serde::Serialize;

const TEMPLATE_NAME: &str = "page";

/// Template error.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TemplateError {
    /// Template file could not be read.
    #[error("Failed to read template {}: {source}", path.display())]
    Read {
        /// Template file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Template source failed to compile.
    #[error("Template compile error: {0}")]
    Compile(#[from] minijinja::Error),
}

/// Context substituted into the page template.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TemplateContext {
    /// Page title (site name + path).
    pub(crate) title: String,
    /// Pre-rendered page body HTML.
    pub(crate) html: String,
    /// Last update timestamp; absent on fallback error pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) updated_at: Option<String>,
    /// Server-side render time in milliseconds.
    pub(crate) render_time: u64,
    /// Display emoji, when the document icon is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) emoji: Option<String>,
    /// Favicon `<link>` tag for the page head.
    pub(crate) favicon: String,
}

/// Compiled page template.
#[derive(Debug)]
pub struct PageTemplate {
    env: Environment<'static>,
}

impl PageTemplate {
    /// Load and compile the template from a file.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if the file cannot be read or the source
    /// does not compile.
    pub fn from_file(path: &Path) -> Result<Self, TemplateError> {
        let source = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_source(source)
    }

    /// Compile a template from source text.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Compile`] if the source does not compile.
    pub fn from_source(source: String) -> Result<Self, TemplateError> {
        let mut env = Environment::new();
        // The context's `html` field is already rendered HTML; the template
        // owns its own escaping.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_template_owned(TEMPLATE_NAME, source)?;
        Ok(Self { env })
    }

    /// Render the template with the given context.
    pub(crate) fn render(&self, context: &TemplateContext) -> Result<String, minijinja::Error> {
        self.env.get_template(TEMPLATE_NAME)?.render(context)
    }
}
