//! Level selector component.
//!
//! Each level takes three rows: its caption, the selector itself and a
//! blank spacer.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, ClickRegion, InputMode};
use crate::tui::theme::*;

use super::fit_width;

const ROWS_PER_LEVEL: u16 = 3;
const MAX_SELECTOR_WIDTH: u16 = 40;

/// Selector rows for the visible levels as `(level index, selector row)`.
///
/// Levels scroll so the focused one stays on screen.
pub fn level_layout(area: Rect, level_count: usize, focused: usize) -> Vec<(usize, Rect)> {
    let visible = (area.height / ROWS_PER_LEVEL).max(1) as usize;
    let first = focused.saturating_sub(visible - 1);
    let width = area.width.min(MAX_SELECTOR_WIDTH);

    (first..level_count)
        .take(visible)
        .enumerate()
        .filter_map(|(slot, idx)| {
            let y = area.y + slot as u16 * ROWS_PER_LEVEL + 1;
            (y < area.y + area.height).then(|| (idx, Rect::new(area.x, y, width, 1)))
        })
        .collect()
}

/// Render every visible level selector and register their click regions.
pub fn render_level_selectors(frame: &mut Frame, area: Rect, app: &mut App) {
    let controls = app.controls();

    if controls.is_empty() {
        let lines = vec![
            Line::styled("No levels configured", Style::new().fg(TEXT_DIM)),
            Line::styled("Add a hierarchy to the data file", Style::new().fg(TEXT_DIM)),
        ];
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    let browsing = app.input_mode == InputMode::Browse;

    for (idx, row) in level_layout(area, controls.len(), app.focused) {
        let control = &controls[idx];
        let is_focused = idx == app.focused;
        let accent = level_accent(idx);

        let caption_style = if is_focused {
            Style::new().fg(accent).bold()
        } else {
            Style::new().fg(accent)
        };
        let caption = Line::from(vec![Span::raw("  "), Span::styled(&control.label, caption_style)]);
        frame.render_widget(Paragraph::new(caption), Rect::new(row.x, row.y - 1, row.width, 1));

        // "> [ " + text + " ▾ ]"
        let text_width = row.width.saturating_sub(8) as usize;
        let selected = control.selected_entry();
        let text_style = if selected == 0 {
            Style::new().fg(TEXT_DIM)
        } else if is_focused {
            Style::new().fg(TEXT_WHITE).bold()
        } else {
            Style::new().fg(TEXT_WHITE)
        };
        let frame_style = if is_focused {
            Style::new().fg(ACCENT_MINT)
        } else {
            Style::new().fg(TEXT_DIM)
        };

        let selector = Line::from(vec![
            Span::styled(if is_focused { "> " } else { "  " }, frame_style),
            Span::styled("[ ", frame_style),
            Span::styled(fit_width(control.display_text(), text_width), text_style),
            Span::styled(" ▾ ]", frame_style),
        ]);
        frame.render_widget(Paragraph::new(selector), row);

        if browsing {
            app.interactions.register_level(
                idx,
                ClickRegion::new(row.x, row.y - 1, row.width, 2),
            );
        }
    }
}
