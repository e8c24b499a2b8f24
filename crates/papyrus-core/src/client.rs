//! HTTP gateway to the search backend.
//!
//! Three operations: `search`, `autocomplete`, `get_document`. All failures
//! are classified into [`ApiError`] at this boundary; callers surface
//! [`ApiError::user_message`] and never see a raw transport error.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::{DocumentRecord, SearchResponse, Suggestions};

/// Default request timeout applied to every call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP 503 on search: the backend's index is not built yet.
    #[error("search engine not initialized (HTTP 503)")]
    NotReady,
    /// HTTP 404 on the search endpoint: the route itself is missing.
    #[error("search endpoint not found (HTTP 404)")]
    Unreachable,
    #[error("document {0} not found (HTTP 404)")]
    DocumentNotFound(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// User-visible message for the status line. 503, 404 and everything
    /// else produce three distinct, deterministic messages.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::NotReady => {
                "search engine not initialized — build the index and restart the backend"
                    .to_string()
            }
            ApiError::Unreachable => "backend unreachable — is the API server running?".to_string(),
            ApiError::DocumentNotFound(_) => "document not found".to_string(),
            ApiError::Status(_) | ApiError::Http(_) => {
                "request failed — see log for details".to_string()
            }
        }
    }
}

/// Classify a non-success status from the search endpoint.
fn search_error(status: u16) -> ApiError {
    match status {
        503 => ApiError::NotReady,
        404 => ApiError::Unreachable,
        other => ApiError::Status(other),
    }
}

/// Classify a non-success status from the document endpoint.
fn document_error(status: u16, doc_id: &str) -> ApiError {
    match status {
        404 => ApiError::DocumentNotFound(doc_id.to_string()),
        other => ApiError::Status(other),
    }
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    limit: usize,
    alpha: f64,
}

/// Thin transport adapter over the backend's three HTTP operations.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. `http://127.0.0.1:8000/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `/search` with the backend's hybrid-ranking weight `alpha`
    /// passed through unchanged.
    pub async fn search(
        &self,
        query: &str,
        limit: usize,
        alpha: f64,
    ) -> Result<SearchResponse, ApiError> {
        let url = format!("{}/search", self.base_url);
        debug!(%query, limit, alpha, "search request");
        let resp = self
            .client
            .post(&url)
            .json(&SearchRequest { query, limit, alpha })
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(search_error(status.as_u16()));
        }
        Ok(resp.json().await?)
    }

    /// GET `/autocomplete?prefix=&limit=`.
    pub async fn autocomplete(&self, prefix: &str, limit: usize) -> Result<Suggestions, ApiError> {
        let url = format!("{}/autocomplete", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[("prefix", prefix), ("limit", &limit.to_string())])
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(resp.json().await?)
    }

    /// GET `/document/{id}`.
    pub async fn get_document(&self, doc_id: &str) -> Result<DocumentRecord, ApiError> {
        let url = format!("{}/document/{}", self.base_url, urlencoding::encode(doc_id));
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(document_error(status.as_u16(), doc_id));
        }
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_503_maps_to_not_ready() {
        assert!(matches!(search_error(503), ApiError::NotReady));
    }

    #[test]
    fn search_404_maps_to_unreachable() {
        assert!(matches!(search_error(404), ApiError::Unreachable));
    }

    #[test]
    fn search_other_status_is_generic() {
        assert!(matches!(search_error(500), ApiError::Status(500)));
    }

    #[test]
    fn document_404_maps_to_not_found() {
        match document_error(404, "abc123") {
            ApiError::DocumentNotFound(id) => assert_eq!(id, "abc123"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn three_distinct_user_messages_for_search_failures() {
        let not_ready = search_error(503).user_message();
        let unreachable = search_error(404).user_message();
        let generic = search_error(500).user_message();
        assert_ne!(not_ready, unreachable);
        assert_ne!(not_ready, generic);
        assert_ne!(unreachable, generic);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
    }
}
