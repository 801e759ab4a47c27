//! Environment-derived server configuration.
//!
//! Configuration is read from the environment once at startup into an
//! explicit [`Config`] value; nothing downstream consults the environment
//! ambiently. The CLI loads a `.env` file first (without overriding values
//! already present in the process environment).
//!
//! Required variables: `OUTLINE_API_KEY`, `OUTLINE_COLLECTION_ID`,
//! `OUTLINE_API_HOST`, `WEBSITE_URL`, `TEMPLATE_PATH`. Missing values are
//! reported together in one startup error.

use std::path::PathBuf;

use url::Url;

/// Default port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind host when `HOST` is unset.
const DEFAULT_HOST: &str = "0.0.0.0";

const ENV_API_KEY: &str = "OUTLINE_API_KEY";
const ENV_COLLECTION_ID: &str = "OUTLINE_COLLECTION_ID";
const ENV_API_HOST: &str = "OUTLINE_API_HOST";
const ENV_WEBSITE_URL: &str = "WEBSITE_URL";
const ENV_TEMPLATE_PATH: &str = "TEMPLATE_PATH";
const ENV_PORT: &str = "PORT";
const ENV_HOST: &str = "HOST";
const ENV_SITE_NAME: &str = "SITE_NAME";

const REQUIRED: [&str; 5] = [
    ENV_API_KEY,
    ENV_COLLECTION_ID,
    ENV_API_HOST,
    ENV_WEBSITE_URL,
    ENV_TEMPLATE_PATH,
];

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Outline API key, sent as a Bearer token.
    pub api_key: String,
    /// Outline collection whose documents are served.
    pub collection_id: String,
    /// Outline instance base URL.
    pub api_host: Url,
    /// Public site base URL; link targets are rewritten against it.
    pub site_url: Url,
    /// Path to the HTML page template.
    pub template_path: PathBuf,
    /// Prefix for page titles (e.g. the site's name).
    pub site_name: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// One or more required environment variables are unset or empty.
    #[error("Missing required environment variable(s): {}", .0.join(", "))]
    MissingEnv(Vec<String>),

    /// A URL-valued variable failed to parse.
    #[error("Invalid URL in {name}: {message}")]
    InvalidUrl {
        /// Variable name.
        name: String,
        /// Parse error message.
        message: String,
    },

    /// A variable held a value of the wrong shape (e.g. a non-numeric port).
    #[error("Invalid value in {name}: {message}")]
    InvalidValue {
        /// Variable name.
        name: String,
        /// Parse error message.
        message: String,
    },
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] naming every unset required
    /// variable, or a parse error for malformed URL/port values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an injected lookup function.
    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let missing: Vec<String> = REQUIRED
            .into_iter()
            .filter(|name| lookup(name).is_none_or(|value| value.is_empty()))
            .map(str::to_owned)
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingEnv(missing));
        }

        let port = match lookup(ENV_PORT) {
            Some(value) => value.parse().map_err(|err: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    name: ENV_PORT.to_owned(),
                    message: err.to_string(),
                }
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
            api_key: lookup(ENV_API_KEY).unwrap_or_default(),
            collection_id: lookup(ENV_COLLECTION_ID).unwrap_or_default(),
            api_host: parse_url(ENV_API_HOST, &lookup(ENV_API_HOST).unwrap_or_default())?,
            site_url: parse_url(ENV_WEBSITE_URL, &lookup(ENV_WEBSITE_URL).unwrap_or_default())?,
            template_path: PathBuf::from(lookup(ENV_TEMPLATE_PATH).unwrap_or_default()),
            site_name: lookup(ENV_SITE_NAME).unwrap_or_default(),
        })
    }
}

fn parse_url(name: &str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|err| ConfigError::InvalidUrl {
        name: name.to_owned(),
        message: err.to_string(),
    })
}
