//! Keyboard event handling by input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match app.input_mode {
        InputMode::Browse => handle_browse_mode(key),
        InputMode::OptionList => handle_option_list_mode(key),
        InputMode::Help => handle_help_mode(key),
    }
}

fn handle_browse_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,
        KeyCode::Char('l') => Action::ToggleChangeLog,

        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => Action::FocusNext,
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => Action::FocusPrev,

        KeyCode::Enter | KeyCode::Char(' ') => Action::OpenList,
        KeyCode::Backspace | KeyCode::Delete => Action::ClearFocused,

        _ => Action::None,
    }
}

fn handle_option_list_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Action::CloseList,
        KeyCode::Char('j') | KeyCode::Down => Action::ListDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ListUp,
        KeyCode::Enter | KeyCode::Char(' ') => Action::ListConfirm,
        _ => Action::None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::CloseHelp,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::demo_app;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_browse_mode_keys() {
        let (app, _rx) = demo_app();

        assert_eq!(handle_key_event(&app, press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_key_event(&app, press(KeyCode::Down)), Action::FocusNext);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('k'))), Action::FocusPrev);
        assert_eq!(handle_key_event(&app, press(KeyCode::Enter)), Action::OpenList);
        assert_eq!(handle_key_event(&app, press(KeyCode::Backspace)), Action::ClearFocused);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('z'))), Action::None);
    }

    #[test]
    fn test_option_list_mode_keys() {
        let (mut app, _rx) = demo_app();
        app.open_option_list();

        assert_eq!(handle_key_event(&app, press(KeyCode::Esc)), Action::CloseList);
        assert_eq!(handle_key_event(&app, press(KeyCode::Char('j'))), Action::ListDown);
        assert_eq!(handle_key_event(&app, press(KeyCode::Up)), Action::ListUp);
        assert_eq!(handle_key_event(&app, press(KeyCode::Enter)), Action::ListConfirm);
    }

    #[test]
    fn test_help_mode_keys() {
        let (mut app, _rx) = demo_app();
        app.input_mode = InputMode::Help;

        assert_eq!(handle_key_event(&app, press(KeyCode::Esc)), Action::CloseHelp);
        assert_eq!(handle_key_event(&app, press(KeyCode::Enter)), Action::None);
    }

    #[test]
    fn test_ctrl_c_quits_in_every_mode() {
        let (mut app, _rx) = demo_app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        assert_eq!(handle_key_event(&app, ctrl_c), Action::Quit);
        app.open_option_list();
        assert_eq!(handle_key_event(&app, ctrl_c), Action::Quit);
    }
}
