mod backend;
mod update;

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tokio::sync::mpsc;

use papyrus_core::{DocumentRecord, SearchHit, Segment};

use crate::theme::Theme;
use crate::tui_event::BackendCommand;

/// Quiet period after the last keystroke before an autocomplete request fires.
pub const SUGGEST_DEBOUNCE: Duration = Duration::from_millis(300);
/// Minimum trimmed input length for autocomplete; shorter input clears the panel.
pub const MIN_SUGGEST_PREFIX: usize = 2;

/// Which view is active. A document and the result list are never shown
/// at the same time; the variant makes the illegal state unrepresentable.
#[derive(Debug)]
pub enum Mode {
    /// Result list (possibly empty; no search performed yet).
    Browsing,
    /// A single opened document.
    Reading(Box<DocumentView>),
}

/// Input mode determines how keyboard input is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// The search box has focus.
    Editing,
}

/// An opened document plus its decoded body, held only while reading.
#[derive(Debug)]
pub struct DocumentView {
    pub record: DocumentRecord,
    /// Body segments decoded once on load.
    pub segments: Vec<Segment>,
    pub scroll: u16,
}

impl DocumentView {
    pub fn new(record: DocumentRecord) -> Self {
        let segments = papyrus_core::segment_body(record.text.as_deref().unwrap_or_default());
        Self {
            record,
            segments,
            scroll: 0,
        }
    }
}

/// A one-line status message shown above the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Main application state.
pub struct App {
    pub mode: Mode,
    pub input_mode: InputMode,
    pub theme: Theme,
    pub tick: usize,
    pub should_quit: bool,
    pub confirm_quit: bool,
    pub show_help: bool,
    /// Height of the visible result rows (set on resize, used for paging).
    pub visible_rows: usize,

    // Search box
    pub query_input: String,

    // Suggestion controller
    pub suggestions: Vec<String>,
    pub suggestions_visible: bool,
    pub suggest_cursor: Option<usize>,
    /// Prefix that produced the current suggestion list.
    pub suggest_prefix: String,
    /// Monotonic counter; a suggestion response applies only if its
    /// generation is still current.
    pub suggest_generation: u64,
    /// Debounce deadline; consumed (set to None) when it fires.
    pub suggest_deadline: Option<Instant>,

    // Search session
    pub results: Vec<SearchHit>,
    pub total: usize,
    /// The query the current results answer (backend-normalized).
    pub active_query: Option<String>,
    pub loading: bool,
    pub search_generation: u64,
    pub result_cursor: usize,

    // Document session
    pub doc_loading: bool,
    pub doc_generation: u64,

    pub status: Option<StatusLine>,
    /// Channel to the gateway task.
    pub backend_cmd_tx: Option<mpsc::UnboundedSender<BackendCommand>>,

    /// Last rendered result-table area (mouse click → row mapping).
    pub last_table_area: Option<Rect>,
    /// Last rendered suggestion popup area (click-outside dismissal).
    pub last_suggest_area: Option<Rect>,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            mode: Mode::Browsing,
            input_mode: InputMode::Editing,
            theme,
            tick: 0,
            should_quit: false,
            confirm_quit: false,
            show_help: false,
            visible_rows: 20,
            query_input: String::new(),
            suggestions: Vec::new(),
            suggestions_visible: false,
            suggest_cursor: None,
            suggest_prefix: String::new(),
            suggest_generation: 0,
            suggest_deadline: None,
            results: Vec::new(),
            total: 0,
            active_query: None,
            loading: false,
            search_generation: 0,
            result_cursor: 0,
            doc_loading: false,
            doc_generation: 0,
            status: None,
            backend_cmd_tx: None,
            last_table_area: None,
            last_suggest_area: None,
        }
    }

    /// Send a command to the gateway task (no-op when detached, e.g. in tests
    /// that only exercise state transitions).
    pub(crate) fn send(&self, cmd: BackendCommand) {
        if let Some(tx) = &self.backend_cmd_tx {
            let _ = tx.send(cmd);
        }
    }

    /// Whether any request is in flight (footer spinner).
    pub fn busy(&self) -> bool {
        self.loading || self.doc_loading
    }

    /// Submit the current input as a search.
    ///
    /// An empty or whitespace-only input clears the session (results, total,
    /// active query) and issues no request; a valid terminal state, not an
    /// error. The loading flag is left false on that path and reset by the
    /// completion event on every other path.
    pub fn submit_query(&mut self) {
        self.dismiss_suggestions();
        self.suggest_deadline = None;
        // An in-flight autocomplete would still pass the prefix guard
        // (the input is unchanged), so invalidate it by generation.
        self.suggest_generation += 1;
        self.input_mode = InputMode::Normal;
        self.status = None;

        let trimmed = self.query_input.trim();
        if trimmed.is_empty() {
            self.results.clear();
            self.total = 0;
            self.active_query = None;
            self.result_cursor = 0;
            self.loading = false;
            // A previous search may still be in flight; its completion
            // must not repopulate the session the user just cleared.
            self.search_generation += 1;
            return;
        }

        let query = trimmed.to_string();
        self.loading = true;
        self.active_query = Some(query.clone());
        self.search_generation += 1;
        self.send(BackendCommand::Search {
            query,
            generation: self.search_generation,
        });
    }

    /// Open the document under the result cursor.
    pub(crate) fn open_selected(&mut self) {
        let Some(hit) = self.results.get(self.result_cursor) else {
            return;
        };
        self.status = None;
        self.doc_loading = true;
        self.doc_generation += 1;
        self.send(BackendCommand::FetchDocument {
            doc_id: hit.doc_id.clone(),
            generation: self.doc_generation,
        });
    }

    /// Hide the suggestion panel without touching the query text.
    pub(crate) fn dismiss_suggestions(&mut self) {
        self.suggestions.clear();
        self.suggestions_visible = false;
        self.suggest_cursor = None;
        self.suggest_prefix.clear();
    }

    /// Record an input edit: restart the debounce window and invalidate any
    /// in-flight suggestion request. The request itself fires from `Tick`
    /// once the window elapses.
    pub(crate) fn on_input_edited(&mut self) {
        self.suggest_generation += 1;
        self.suggest_deadline = Some(Instant::now() + SUGGEST_DEBOUNCE);
        // A stale set must not stay on screen once the prefix changed.
        if self.suggest_prefix != self.query_input.trim() {
            self.dismiss_suggestions();
        }
    }

    /// Fire the debounced autocomplete request if the quiet window elapsed.
    /// Called on every tick; consumes the deadline so at most one request is
    /// issued per window.
    pub(crate) fn poll_suggest_deadline(&mut self) {
        let due = self
            .suggest_deadline
            .is_some_and(|deadline| Instant::now() >= deadline);
        if !due {
            return;
        }
        self.suggest_deadline = None;

        let trimmed = self.query_input.trim();
        if trimmed.chars().count() < MIN_SUGGEST_PREFIX {
            self.dismiss_suggestions();
            return;
        }
        self.send(BackendCommand::Autocomplete {
            prefix: trimmed.to_string(),
            generation: self.suggest_generation,
        });
    }

    /// Render the current screen.
    pub fn view(&mut self, f: &mut ratatui::Frame) {
        let area = f.area();

        if matches!(self.mode, Mode::Reading(_)) {
            crate::view::document::render_in(f, self, area);
        } else {
            crate::view::results::render_in(f, self, area);
        }

        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }

        if self.confirm_quit {
            crate::view::quit_confirm::render(f, &self.theme);
        }
    }
}
