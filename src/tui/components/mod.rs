//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `level_selectors` - one labelled selector per hierarchy level
//! - `option_list` - popup list of the level being edited
//! - `change_log` - notifications received from the dropdown
//! - `help_popup` - Help overlay with keybindings

mod change_log;
mod help_popup;
mod level_selectors;
mod option_list;

pub use change_log::render_change_log;
pub use help_popup::render_help_popup;
pub use level_selectors::{level_layout, render_level_selectors};
pub use option_list::render_option_list;

/// Pad or cut `text` to exactly `width` characters.
pub fn fit_width(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        format!("{}{}", text, " ".repeat(width - count))
    } else if width == 0 {
        String::new()
    } else {
        let mut cut: String = text.chars().take(width - 1).collect();
        cut.push('…');
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_width_pads_short_text() {
        assert_eq!(fit_width("USA", 6), "USA   ");
    }

    #[test]
    fn test_fit_width_cuts_long_text() {
        assert_eq!(fit_width("San Francisco", 6), "San F…");
        assert_eq!(fit_width("abc", 0), "");
        assert_eq!(fit_width("Québec", 6), "Québec");
    }
}
