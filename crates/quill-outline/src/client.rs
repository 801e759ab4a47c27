//! Outline REST API client.

use std::time::Duration;

use quill_core::{DocumentContent, DocumentNode, DocumentSource, SourceError};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use ureq::Agent;
use url::Url;

use crate::error::OutlineError;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Outline's response envelope.
#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Outline REST API client for one collection.
pub struct OutlineClient {
    agent: Agent,
    api_host: String,
    api_key: String,
    collection_id: String,
}

impl OutlineClient {
    /// Create a client from config values.
    ///
    /// # Arguments
    /// * `api_host` - Outline instance base URL
    /// * `api_key` - API key for the `Authorization: Bearer` header
    /// * `collection_id` - Collection whose documents are served
    #[must_use]
    pub fn new(api_host: &Url, api_key: impl Into<String>, collection_id: impl Into<String>) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            api_host: api_host.as_str().trim_end_matches('/').to_owned(),
            api_key: api_key.into(),
            collection_id: collection_id.into(),
        }
    }

    /// Fetch the nested document tree for the configured collection.
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError`] on transport failure or a non-success status.
    pub fn collection_documents(&self) -> Result<Vec<DocumentNode>, OutlineError> {
        self.post_json(
            "/api/collections.documents",
            &serde_json::json!({ "id": self.collection_id }),
        )
    }

    /// Fetch full content for one document.
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError`] on transport failure or a non-success status.
    pub fn document_info(&self, id: &str) -> Result<DocumentContent, OutlineError> {
        self.post_json("/api/documents.info", &serde_json::json!({ "id": id }))
    }

    fn post_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> Result<T, OutlineError> {
        let url = format!("{}{endpoint}", self.api_host);

        debug!(%url, "Calling Outline API");

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .send_json(body)?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(OutlineError::HttpResponse {
                status,
                body: error_body,
            });
        }

        let envelope: DataEnvelope<T> = body_reader.read_json()?;
        Ok(envelope.data)
    }
}

impl DocumentSource for OutlineClient {
    fn fetch_document_tree(&self) -> Result<Vec<DocumentNode>, SourceError> {
        self.collection_documents().map_err(SourceError::from)
    }

    fn fetch_content(&self, id: &str) -> Result<DocumentContent, SourceError> {
        self.document_info(id).map_err(SourceError::from)
    }
}
