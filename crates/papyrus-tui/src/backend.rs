use tokio::sync::mpsc;
use tracing::{debug, warn};

use papyrus_core::ApiClient;

use crate::tui_event::{BackendCommand, BackendEvent};

/// Fixed request parameters the client passes through to the backend.
#[derive(Debug, Clone, Copy)]
pub struct RequestParams {
    /// Result cap for a search request.
    pub search_limit: usize,
    /// Hybrid-ranking weight; backend tuning constant, passed through unchanged.
    pub alpha: f64,
    /// Suggestion cap for an autocomplete request.
    pub suggest_limit: usize,
}

impl Default for RequestParams {
    fn default() -> Self {
        Self {
            search_limit: 20,
            alpha: 0.6,
            suggest_limit: 8,
        }
    }
}

/// Gateway task: receive commands from the app, run each as its own task,
/// and report completions tagged with the originating generation.
///
/// In-flight requests are never aborted; the app discards completions whose
/// generation is no longer current.
pub async fn run_gateway(
    client: ApiClient,
    params: RequestParams,
    mut cmd_rx: mpsc::UnboundedReceiver<BackendCommand>,
    tx: mpsc::UnboundedSender<BackendEvent>,
) {
    while let Some(cmd) = cmd_rx.recv().await {
        let client = client.clone();
        let tx = tx.clone();
        match cmd {
            BackendCommand::Search { query, generation } => {
                tokio::spawn(async move {
                    let event = match client.search(&query, params.search_limit, params.alpha).await
                    {
                        Ok(response) => BackendEvent::SearchLoaded {
                            generation,
                            response,
                        },
                        Err(e) => {
                            warn!(%query, error = %e, "search failed");
                            BackendEvent::SearchFailed {
                                generation,
                                message: e.user_message(),
                            }
                        }
                    };
                    let _ = tx.send(event);
                });
            }
            BackendCommand::Autocomplete { prefix, generation } => {
                tokio::spawn(async move {
                    let event = match client.autocomplete(&prefix, params.suggest_limit).await {
                        Ok(s) => BackendEvent::Suggestions {
                            generation,
                            // Prefer the backend's echoed prefix; fall back to
                            // the one we sent when the echo is absent.
                            prefix: if s.prefix.is_empty() { prefix } else { s.prefix },
                            items: s.suggestions,
                        },
                        Err(e) => {
                            // Suggestions are best-effort; log and move on.
                            debug!(%prefix, error = %e, "autocomplete failed");
                            BackendEvent::SuggestFailed { generation }
                        }
                    };
                    let _ = tx.send(event);
                });
            }
            BackendCommand::FetchDocument { doc_id, generation } => {
                tokio::spawn(async move {
                    let event = match client.get_document(&doc_id).await {
                        Ok(record) => BackendEvent::DocumentLoaded {
                            generation,
                            record: Box::new(record),
                        },
                        Err(e) => {
                            warn!(%doc_id, error = %e, "document fetch failed");
                            BackendEvent::DocumentFailed {
                                generation,
                                message: e.user_message(),
                            }
                        }
                    };
                    let _ = tx.send(event);
                });
            }
        }
    }
}
