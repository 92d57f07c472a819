//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged or replayed.

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by `handlers::dispatch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,
    /// Open help popup
    OpenHelp,
    /// Close help popup
    CloseHelp,
    /// Show or hide the change log panel
    ToggleChangeLog,

    // === Level focus ===
    /// Focus the next level selector
    FocusNext,
    /// Focus the previous level selector
    FocusPrev,
    /// Reset the focused level to "no selection"
    ClearFocused,

    // === Option list ===
    /// Open the option list of the focused level
    OpenList,
    /// Focus a level by hierarchy index and open its option list
    OpenListAt(usize),
    /// Close the option list without changing anything
    CloseList,
    /// Move the highlight up
    ListUp,
    /// Move the highlight down
    ListDown,
    /// Select the highlighted entry
    ListConfirm,
    /// Select an entry by index
    ListSelect(usize),

    // === No-op ===
    /// No action to take
    None,
}

impl Action {
    /// Whether applying this action can change the dropdown selection.
    pub fn changes_selection(&self) -> bool {
        matches!(
            self,
            Action::ClearFocused | Action::ListConfirm | Action::ListSelect(_)
        )
    }
}
