use super::{App, InputMode, Mode};
use crate::action::Action;

impl App {
    /// Process a user action and update state. Returns true if the app
    /// should quit.
    pub fn update(&mut self, action: Action) -> bool {
        // Quit confirmation modal: q confirms, Esc cancels
        if self.confirm_quit {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::NavigateBack => {
                    self.confirm_quit = false;
                }
                Action::Tick => self.on_tick(),
                Action::Resize(_w, h) => self.on_resize(h),
                _ => {}
            }
            return false;
        }

        // Help overlay
        if self.show_help {
            match action {
                Action::Quit => {
                    self.confirm_quit = true;
                }
                Action::ToggleHelp | Action::NavigateBack => {
                    self.show_help = false;
                }
                Action::Tick => self.on_tick(),
                Action::Resize(_w, h) => self.on_resize(h),
                _ => {}
            }
            return false;
        }

        match action {
            Action::Quit => {
                self.confirm_quit = true;
            }
            Action::ToggleHelp => {
                self.show_help = true;
            }
            Action::StartSearch => {
                if matches!(self.mode, Mode::Browsing) {
                    self.input_mode = InputMode::Editing;
                }
            }
            Action::SearchInput(c) => {
                if self.input_mode != InputMode::Editing {
                    return false;
                }
                if c == '\x08' {
                    if self.query_input.pop().is_none() {
                        return false;
                    }
                } else {
                    self.query_input.push(c);
                }
                self.on_input_edited();
            }
            Action::SearchConfirm => {
                if self.input_mode != InputMode::Editing {
                    return false;
                }
                // Enter on a highlighted suggestion searches for it.
                if let Some(i) = self.suggest_cursor {
                    if let Some(s) = self.suggestions.get(i) {
                        self.query_input = s.clone();
                    }
                }
                self.submit_query();
            }
            Action::SearchCancel => {
                // Unfocus without clearing the query text.
                self.input_mode = InputMode::Normal;
                self.suggestions_visible = false;
                self.suggest_cursor = None;
                self.suggest_deadline = None;
            }
            Action::AcceptSuggestion => {
                let pick = self
                    .suggest_cursor
                    .or(if self.suggestions.is_empty() { None } else { Some(0) });
                if let Some(i) = pick {
                    if let Some(s) = self.suggestions.get(i).cloned() {
                        self.query_input = s;
                        self.on_input_edited();
                    }
                }
            }
            Action::MoveDown => self.move_down(1),
            Action::MoveUp => self.move_up(1),
            Action::PageDown => self.move_down(self.visible_rows.max(1)),
            Action::PageUp => self.move_up(self.visible_rows.max(1)),
            Action::GoTop => match &mut self.mode {
                Mode::Browsing => self.result_cursor = 0,
                Mode::Reading(view) => view.scroll = 0,
            },
            Action::GoBottom => match &mut self.mode {
                Mode::Browsing => {
                    self.result_cursor = self.results.len().saturating_sub(1);
                }
                Mode::Reading(view) => view.scroll = u16::MAX,
            },
            Action::DrillIn => {
                if matches!(self.mode, Mode::Browsing) {
                    self.open_selected();
                }
            }
            Action::NavigateBack => match &mut self.mode {
                // Back to results: drop the document, the result list and
                // total were never touched by the round trip.
                Mode::Reading(_) => {
                    self.mode = Mode::Browsing;
                    self.status = None;
                }
                Mode::Browsing => {
                    if self.suggestions_visible {
                        self.suggestions_visible = false;
                        self.suggest_cursor = None;
                    } else {
                        self.status = None;
                    }
                }
            },
            Action::ClickAt(x, y) => self.handle_click(x, y),
            Action::Tick => self.on_tick(),
            Action::Resize(_w, h) => self.on_resize(h),
            Action::None => {}
        }
        false
    }

    fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.poll_suggest_deadline();
    }

    fn on_resize(&mut self, height: u16) {
        self.visible_rows = (height as usize).saturating_sub(8);
    }

    fn move_down(&mut self, step: usize) {
        // While editing, Down walks the suggestion list.
        if self.input_mode == InputMode::Editing && self.suggestions_visible {
            let len = self.suggestions.len();
            if len > 0 {
                self.suggest_cursor = Some(match self.suggest_cursor {
                    None => 0,
                    Some(i) => (i + 1).min(len - 1),
                });
            }
            return;
        }
        match &mut self.mode {
            Mode::Browsing => {
                let max = self.results.len().saturating_sub(1);
                self.result_cursor = (self.result_cursor + step).min(max);
            }
            Mode::Reading(view) => {
                view.scroll = view.scroll.saturating_add(step as u16);
            }
        }
    }

    fn move_up(&mut self, step: usize) {
        if self.input_mode == InputMode::Editing && self.suggestions_visible {
            self.suggest_cursor = match self.suggest_cursor {
                None | Some(0) => None,
                Some(i) => Some(i - 1),
            };
            return;
        }
        match &mut self.mode {
            Mode::Browsing => {
                self.result_cursor = self.result_cursor.saturating_sub(step);
            }
            Mode::Reading(view) => {
                view.scroll = view.scroll.saturating_sub(step as u16);
            }
        }
    }

    /// Mouse click: a click outside the suggestion popup dismisses it
    /// (query text untouched); a click on a result row moves the cursor.
    fn handle_click(&mut self, x: u16, y: u16) {
        if self.suggestions_visible {
            let inside = self
                .last_suggest_area
                .is_some_and(|r| r.contains(ratatui::layout::Position { x, y }));
            if inside {
                // Row 0 is the popup border.
                let idx = (y.saturating_sub(self.last_suggest_area.map_or(0, |r| r.y) + 1)) as usize;
                if idx < self.suggestions.len() {
                    self.suggest_cursor = Some(idx);
                }
                return;
            }
            self.suggestions_visible = false;
            self.suggest_cursor = None;
            return;
        }

        if let (Mode::Browsing, Some(area)) = (&self.mode, self.last_table_area) {
            if area.contains(ratatui::layout::Position { x, y }) {
                // First row inside the area is the table header.
                let row = (y - area.y) as usize;
                if row >= 1 {
                    let idx = row - 1;
                    if idx < self.results.len() {
                        self.result_cursor = idx;
                    }
                }
            }
        }
    }
}
