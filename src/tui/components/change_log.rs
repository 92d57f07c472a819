//! Change log panel: notifications the dropdown has sent to the host.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, ChangeRecord};
use crate::tui::theme::*;

/// One line per notification: time, then `level=value` pairs in hierarchy order.
fn format_record<'a>(record: &'a ChangeRecord, hierarchy: &[String]) -> Line<'a> {
    let mut spans = vec![Span::styled(
        record.received_at.format("%H:%M:%S ").to_string(),
        Style::new().fg(TEXT_DIM),
    )];

    let mut any = false;
    for (depth, level) in hierarchy.iter().enumerate() {
        if let Some(value) = record.selection.get(level) {
            if any {
                spans.push(Span::styled(" › ", Style::new().fg(TEXT_DIM)));
            }
            let shown = if value.is_empty() { "∅" } else { value.as_str() };
            spans.push(Span::styled(format!("{}=", level), Style::new().fg(level_accent(depth))));
            spans.push(Span::styled(shown, Style::new().fg(TEXT_WHITE)));
            any = true;
        }
    }

    if !any {
        spans.push(Span::styled("(empty)", Style::new().fg(TEXT_DIM)));
    }

    Line::from(spans)
}

/// Render the most recent notifications, newest at the bottom.
pub fn render_change_log(frame: &mut Frame, area: Rect, app: &App) {
    let inner_height = area.height.saturating_sub(2) as usize;
    let hierarchy = app.dropdown.hierarchy();

    let mut lines: Vec<Line> = app
        .change_log
        .iter()
        .rev()
        .take(inner_height)
        .map(|record| format_record(record, hierarchy))
        .collect();
    lines.reverse();

    if lines.is_empty() {
        lines.push(Line::styled("No changes yet", Style::new().fg(TEXT_DIM)));
    }

    let block = Block::default()
        .title(format!(" onChange ({}) ", app.change_log.len()))
        .title_style(Style::new().fg(ACCENT_GOLD).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(TEXT_DIM));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
