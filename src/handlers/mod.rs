//! Action handling
//!
//! Applies `Action`s produced by `crate::events` to the `App`.

use crate::app::App;
use crate::events::Action;
use crate::log;

/// Apply an action to the app.
pub fn dispatch(app: &mut App, action: Action) {
    if action != Action::None {
        app.status = None;
    }
    if action.changes_selection() {
        log::log(&format!("Dispatching {:?}", action));
    }

    match action {
        Action::Quit => app.should_quit = true,
        Action::OpenHelp => app.open_help(),
        Action::CloseHelp => app.close_help(),
        Action::ToggleChangeLog => app.toggle_change_log(),

        Action::FocusNext => app.focus_next(),
        Action::FocusPrev => app.focus_prev(),
        Action::ClearFocused => app.clear_focused(),

        Action::OpenList => app.open_option_list(),
        Action::OpenListAt(idx) => {
            app.focus_level(idx);
            app.open_option_list();
        }
        Action::CloseList => app.close_option_list(),
        Action::ListUp => app.option_list_up(),
        Action::ListDown => app.option_list_down(),
        Action::ListConfirm => app.confirm_option_list(),
        Action::ListSelect(idx) => app.select_list_entry(idx),

        Action::None => {}
    }
}
