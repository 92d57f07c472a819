use chrono::{DateTime, Local};

use crate::cascade::{CascadingDropdown, ControlDescriptor, ControlEntry, SelectionState};
use crate::log;
use crate::picker::Picker;
use crate::tui::interaction::InteractionRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,     // Moving focus between level selectors
    OptionList, // A level's option list is open
    Help,       // Help popup showing all hotkeys
}

/// Screen rectangle used for mouse hit testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

/// State for an open option list
#[derive(Debug, Clone)]
pub struct OptionListState {
    pub level: String,
    pub level_idx: usize,
    pub entries: Vec<ControlEntry>,
    pub selected: usize,
}

impl OptionListState {
    /// Open on a control, highlighting its bound entry.
    pub fn from_control(control: &ControlDescriptor) -> Self {
        Self {
            level: control.level.clone(),
            level_idx: control.index,
            entries: control.entries.clone(),
            selected: control.selected_entry(),
        }
    }
}

impl Picker for OptionListState {
    type Item = ControlEntry;

    fn items(&self) -> &[ControlEntry] {
        &self.entries
    }

    fn selected_index(&self) -> usize {
        self.selected
    }

    fn set_selected_index(&mut self, index: usize) {
        self.selected = index;
    }
}

/// A notification received from the dropdown
#[derive(Debug, Clone)]
pub struct ChangeRecord {
    pub received_at: DateTime<Local>,
    pub selection: SelectionState,
}

pub struct App {
    pub dropdown: CascadingDropdown,
    /// Text of the "no selection" entry
    pub placeholder: String,
    /// Where the options came from, shown in the title
    pub source: String,
    pub input_mode: InputMode,
    /// Hierarchy index of the focused selector
    pub focused: usize,
    pub option_list: Option<OptionListState>,
    pub change_log: Vec<ChangeRecord>,
    pub show_change_log: bool,
    /// Last error, shown in the hotkey bar until the next action
    pub status: Option<String>,
    pub interactions: InteractionRegistry,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        dropdown: CascadingDropdown,
        placeholder: String,
        source: String,
        show_change_log: bool,
    ) -> Self {
        Self {
            dropdown,
            placeholder,
            source,
            input_mode: InputMode::Browse,
            focused: 0,
            option_list: None,
            change_log: vec![],
            show_change_log,
            status: None,
            interactions: InteractionRegistry::new(),
            should_quit: false,
        }
    }

    /// Control descriptors for the current selection
    pub fn controls(&self) -> Vec<ControlDescriptor> {
        self.dropdown.controls(&self.placeholder)
    }

    pub fn level_count(&self) -> usize {
        self.dropdown.hierarchy().len()
    }

    pub fn focused_level(&self) -> Option<&str> {
        self.dropdown.hierarchy().get(self.focused).map(String::as_str)
    }

    // === Focus ===

    pub fn focus_next(&mut self) {
        let count = self.level_count();
        if count > 0 {
            self.focused = (self.focused + 1) % count;
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.level_count();
        if count > 0 {
            self.focused = self.focused.checked_sub(1).unwrap_or(count - 1);
        }
    }

    pub fn focus_level(&mut self, idx: usize) {
        if idx < self.level_count() {
            self.focused = idx;
        }
    }

    // === Option list ===

    pub fn open_option_list(&mut self) {
        let controls = self.controls();
        if let Some(control) = controls.get(self.focused) {
            log::log(&format!("Opening {}", control.id));
            self.option_list = Some(OptionListState::from_control(control));
            self.input_mode = InputMode::OptionList;
        }
    }

    pub fn close_option_list(&mut self) {
        self.option_list = None;
        self.input_mode = InputMode::Browse;
    }

    pub fn option_list_up(&mut self) {
        if let Some(list) = &mut self.option_list {
            list.select_prev();
        }
    }

    pub fn option_list_down(&mut self) {
        if let Some(list) = &mut self.option_list {
            list.select_next();
        }
    }

    /// Apply the highlighted entry and close the list.
    pub fn confirm_option_list(&mut self) {
        let Some(list) = self.option_list.take() else {
            return;
        };
        self.input_mode = InputMode::Browse;

        if let Some(entry) = list.selected_item() {
            self.select(&list.level, &entry.value);
        }
    }

    pub fn select_list_entry(&mut self, idx: usize) {
        if let Some(list) = &mut self.option_list {
            list.select_index(idx);
        }
        self.confirm_option_list();
    }

    /// Reset the focused level to "no selection".
    pub fn clear_focused(&mut self) {
        if let Some(level) = self.focused_level().map(str::to_string) {
            self.select(&level, "");
        }
    }

    /// Route a change through the dropdown.
    pub fn select(&mut self, level: &str, value: &str) {
        match self.dropdown.apply_change(level, value) {
            Ok(()) => {
                log::log_event(&format!("{} -> {:?}", level, value));
                log::log_selection("selection now", self.dropdown.current_selection());
            }
            Err(e) => {
                log::log(&format!("Rejected change: {}", e));
                self.status = Some(e.to_string());
            }
        }
    }

    // === Notifications ===

    /// Store a notification emitted by the dropdown callback.
    pub fn record_change(&mut self, selection: SelectionState) {
        log::log_selection("notified", &selection);
        self.change_log.push(ChangeRecord {
            received_at: Local::now(),
            selection,
        });
    }

    pub fn toggle_change_log(&mut self) {
        self.show_change_log = !self.show_change_log;
    }

    // === Help ===

    pub fn open_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn close_help(&mut self) {
        self.input_mode = if self.option_list.is_some() {
            InputMode::OptionList
        } else {
            InputMode::Browse
        };
    }

    pub fn final_selection(&self) -> &SelectionState {
        self.dropdown.current_selection()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tokio::sync::mpsc;

    use crate::dataset::Dataset;

    /// App over the demo dataset; notifications arrive on the returned receiver.
    pub fn demo_app() -> (App, mpsc::UnboundedReceiver<SelectionState>) {
        let dataset = Dataset::demo();
        let (tx, rx) = mpsc::unbounded_channel();
        let dropdown = CascadingDropdown::new(
            dataset.options,
            dataset.hierarchy,
            dataset.selection,
            Box::new(move |previous| {
                let _ = tx.send(previous);
            }),
        );
        let app = App::new(dropdown, "-- Select --".to_string(), "demo".to_string(), true);
        (app, rx)
    }

    #[test]
    fn test_click_region_contains() {
        let region = ClickRegion::new(2, 3, 4, 1);
        assert!(region.contains(2, 3));
        assert!(region.contains(5, 3));
        assert!(!region.contains(6, 3));
        assert!(!region.contains(2, 4));
    }

    #[test]
    fn test_focus_wraps_over_levels() {
        let (mut app, _rx) = demo_app();

        app.focus_prev();
        assert_eq!(app.focused_level(), Some("city"));
        app.focus_next();
        assert_eq!(app.focused_level(), Some("country"));

        app.focus_level(7);
        assert_eq!(app.focused, 0);
    }

    #[test]
    fn test_open_list_highlights_current_value() {
        let (mut app, _rx) = demo_app();
        app.select("country", "canada");

        app.open_option_list();

        let list = app.option_list.as_ref().unwrap();
        assert_eq!(app.input_mode, InputMode::OptionList);
        assert_eq!(list.level, "country");
        assert_eq!(list.selected, 2);
        assert!(list.entries[0].is_placeholder());
    }

    #[test]
    fn test_confirm_applies_highlighted_entry() {
        let (mut app, mut rx) = demo_app();

        app.open_option_list();
        app.option_list_down();
        app.confirm_option_list();

        assert_eq!(app.input_mode, InputMode::Browse);
        assert!(app.option_list.is_none());
        assert_eq!(app.dropdown.selected_value("country"), Some("usa"));
        assert!(rx.try_recv().unwrap().is_empty());
    }

    #[test]
    fn test_changing_parent_clears_children_and_notifies_previous() {
        let (mut app, mut rx) = demo_app();
        app.select("country", "usa");
        app.select("state", "texas");
        app.select("city", "austin");
        while rx.try_recv().is_ok() {}

        app.focus_level(0);
        app.open_option_list();
        app.select_list_entry(2);

        assert_eq!(app.final_selection().len(), 1);
        assert_eq!(app.dropdown.selected_value("country"), Some("canada"));

        let notified = rx.try_recv().unwrap();
        assert_eq!(notified.len(), 3);
        assert_eq!(notified["city"], "austin");
    }

    #[test]
    fn test_clear_focused_resets_level() {
        let (mut app, _rx) = demo_app();
        app.select("country", "usa");
        app.select("state", "texas");

        app.focus_level(0);
        app.clear_focused();

        assert_eq!(app.dropdown.selected_value("country"), None);
        assert!(!app.final_selection().contains_key("state"));
    }

    #[test]
    fn test_close_list_changes_nothing() {
        let (mut app, mut rx) = demo_app();

        app.open_option_list();
        app.option_list_down();
        app.close_option_list();

        assert!(app.final_selection().is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_unknown_level_sets_status() {
        let (mut app, mut rx) = demo_app();

        app.select("planet", "earth");

        assert!(app.status.as_deref().unwrap().contains("planet"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_record_change_appends_to_log() {
        let (mut app, _rx) = demo_app();
        let mut selection = SelectionState::new();
        selection.insert("country".to_string(), "usa".to_string());

        app.record_change(SelectionState::new());
        app.record_change(selection.clone());

        assert_eq!(app.change_log.len(), 2);
        assert_eq!(app.change_log[1].selection, selection);
    }

    #[test]
    fn test_help_returns_to_previous_mode() {
        let (mut app, _rx) = demo_app();

        app.open_option_list();
        app.open_help();
        assert_eq!(app.input_mode, InputMode::Help);
        app.close_help();
        assert_eq!(app.input_mode, InputMode::OptionList);
    }
}
