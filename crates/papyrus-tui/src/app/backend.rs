use super::{App, DocumentView, InputMode, Mode, StatusLine};
use crate::tui_event::BackendEvent;

impl App {
    /// Process a gateway completion and update state.
    ///
    /// Every event carries the generation of the request that produced it;
    /// a response to a superseded request is dropped without touching state.
    /// Loading flags are reset on success and failure alike.
    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::Suggestions {
                generation,
                prefix,
                items,
            } => {
                if generation != self.suggest_generation {
                    return; // superseded by a newer keystroke
                }
                if prefix != self.query_input.trim() {
                    return; // input changed while the request was in flight
                }
                self.suggestions = items;
                self.suggest_prefix = prefix;
                self.suggest_cursor = None;
                self.suggestions_visible =
                    !self.suggestions.is_empty() && self.input_mode == InputMode::Editing;
            }
            BackendEvent::SuggestFailed { generation } => {
                if generation != self.suggest_generation {
                    return;
                }
                // Best-effort enhancement: clear silently, never surface.
                self.dismiss_suggestions();
            }
            BackendEvent::SearchLoaded {
                generation,
                response,
            } => {
                if generation != self.search_generation {
                    return;
                }
                self.loading = false;
                self.results = response.results;
                self.total = response.total;
                self.result_cursor = 0;
                // Backend may have normalized case/whitespace; display its form.
                if !response.query.is_empty() {
                    self.active_query = Some(response.query);
                }
                self.status = if self.results.is_empty() {
                    Some(StatusLine::info("no results"))
                } else {
                    None
                };
            }
            BackendEvent::SearchFailed {
                generation,
                message,
            } => {
                if generation != self.search_generation {
                    return;
                }
                self.loading = false;
                self.results.clear();
                self.total = 0;
                self.result_cursor = 0;
                self.status = Some(StatusLine::error(message));
            }
            BackendEvent::DocumentLoaded { generation, record } => {
                if generation != self.doc_generation {
                    return;
                }
                self.doc_loading = false;
                self.mode = Mode::Reading(Box::new(DocumentView::new(*record)));
            }
            BackendEvent::DocumentFailed {
                generation,
                message,
            } => {
                if generation != self.doc_generation {
                    return;
                }
                // Stay in results mode; the list is unchanged.
                self.doc_loading = false;
                self.status = Some(StatusLine::error(message));
            }
        }
    }
}
