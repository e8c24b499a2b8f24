use papyrus_core::{DocumentRecord, SearchResponse};

/// Commands sent from the TUI to the gateway task.
///
/// Every command carries the generation counter of the controller that
/// issued it; the matching event echoes it back so stale completions can
/// be discarded (logical cancellation; in-flight calls are never aborted).
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    Search { query: String, generation: u64 },
    Autocomplete { prefix: String, generation: u64 },
    FetchDocument { doc_id: String, generation: u64 },
}

/// Events flowing from the gateway task back to the TUI.
#[derive(Debug, Clone)]
pub enum BackendEvent {
    SearchLoaded {
        generation: u64,
        response: SearchResponse,
    },
    SearchFailed {
        generation: u64,
        message: String,
    },
    Suggestions {
        generation: u64,
        /// Prefix that produced this set, compared against the current
        /// input before the set is applied.
        prefix: String,
        items: Vec<String>,
    },
    /// Autocomplete failure, never surfaced to the user.
    SuggestFailed {
        generation: u64,
    },
    DocumentLoaded {
        generation: u64,
        record: Box<DocumentRecord>,
    },
    DocumentFailed {
        generation: u64,
        message: String,
    },
}
