use serde::{Deserialize, Serialize};

pub mod client;
pub mod format;
pub mod segment;

// Re-export for convenience
pub use client::{ApiClient, ApiError};
pub use format::{format_abstract, format_authors};
pub use segment::{segment_body, Segment};

/// A single ranked search result.
///
/// Order within a [`SearchResponse`] is the backend's rank order and is
/// never re-sorted client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub doc_id: String,
    pub score: f64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Option<String>,
    #[serde(default)]
    pub journal: Option<String>,
    #[serde(default)]
    pub publish_time: Option<String>,
    /// Abstract snippet for the result list (may be truncated server-side).
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
}

/// Response to a search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
    /// Total matching documents; may exceed `results.len()` (one page returned).
    pub total: usize,
    /// Query string as normalized by the backend.
    pub query: String,
}

/// Autocomplete suggestions for a prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestions {
    pub suggestions: Vec<String>,
    /// The prefix that produced these suggestions (echoed by the backend).
    #[serde(default)]
    pub prefix: String,
}

/// Document metadata bag. The backend sends a free-form dict; unknown
/// keys are ignored and every known key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Option<String>,
    #[serde(default)]
    pub journal: Option<String>,
    #[serde(default)]
    pub publish_time: Option<String>,
}

/// A bibliography entry of a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reference {
    #[serde(default)]
    pub ref_id: Option<String>,
    pub bibref_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub volume: Option<String>,
    #[serde(default)]
    pub pages: Option<String>,
    #[serde(default)]
    pub issn: Option<String>,
}

/// A full document as returned by the `/document/{id}` operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub paper_id: String,
    #[serde(default)]
    pub metadata: DocMetadata,
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
    /// Flat section-name listing, if the corpus entry carries one.
    #[serde(default)]
    pub sections: Option<String>,
    /// Full body text with inline section markers (see [`segment`]).
    #[serde(default)]
    pub text: Option<String>,
    /// Bibliography in the backend's bibref order.
    #[serde(default)]
    pub references: Option<Vec<Reference>>,
}

impl DocumentRecord {
    /// Display title, falling back to the document id.
    pub fn display_title(&self) -> &str {
        match self.metadata.title.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => &self.paper_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_hit_reads_the_abstract_field() {
        let hit: SearchHit = serde_json::from_str(
            r#"{"doc_id": "abc", "score": 0.91, "abstract": "Background: snippet"}"#,
        )
        .unwrap();
        assert_eq!(hit.abstract_text.as_deref(), Some("Background: snippet"));
        assert_eq!(hit.title, None);
    }

    #[test]
    fn suggestions_tolerate_a_missing_prefix_echo() {
        let s: Suggestions = serde_json::from_str(r#"{"suggestions": ["corona"]}"#).unwrap();
        assert_eq!(s.suggestions, vec!["corona"]);
        assert_eq!(s.prefix, "");
    }

    #[test]
    fn document_record_tolerates_sparse_payloads() {
        let record: DocumentRecord = serde_json::from_str(r#"{"paper_id": "p1"}"#).unwrap();
        assert_eq!(record.paper_id, "p1");
        assert!(record.text.is_none());
        assert!(record.references.is_none());
        assert_eq!(record.display_title(), "p1");
    }

    #[test]
    fn display_title_prefers_a_non_blank_title() {
        let record: DocumentRecord = serde_json::from_str(
            r#"{"paper_id": "p1", "metadata": {"title": "Viral dynamics"}}"#,
        )
        .unwrap();
        assert_eq!(record.display_title(), "Viral dynamics");

        let blank: DocumentRecord =
            serde_json::from_str(r#"{"paper_id": "p2", "metadata": {"title": "  "}}"#).unwrap();
        assert_eq!(blank.display_title(), "p2");
    }
}
