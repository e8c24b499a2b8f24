/// User intent decoded from a terminal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    NavigateBack,
    DrillIn,
    MoveDown,
    MoveUp,
    PageDown,
    PageUp,
    GoTop,
    GoBottom,
    /// Focus the search input.
    StartSearch,
    /// A character typed into the search input ('\x08' = backspace).
    SearchInput(char),
    /// Submit the search input (Enter while editing).
    SearchConfirm,
    /// Leave the search input without submitting.
    SearchCancel,
    /// Fill the input with the highlighted suggestion.
    AcceptSuggestion,
    ToggleHelp,
    ClickAt(u16, u16),
    Resize(u16, u16),
    Tick,
    None,
}
