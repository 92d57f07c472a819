//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::tui::theme::*;

const SELECTOR_KEYS: &[(&str, &str)] = &[
    ("j/k ↑/↓  ", "Move between levels"),
    ("Tab      ", "Next level"),
    ("Enter    ", "Open option list"),
    ("Bksp/Del ", "Reset level to no selection"),
    ("l        ", "Toggle change log"),
    ("q        ", "Quit and print selection"),
];

const LIST_KEYS: &[(&str, &str)] = &[
    ("j/k ↑/↓  ", "Move highlight"),
    ("Enter    ", "Select highlighted option"),
    ("Esc      ", "Close without changing"),
];

fn section<'a>(title: &'a str, color: Color, keys: &'a [(&'a str, &'a str)], lines: &mut Vec<Line<'a>>) {
    lines.push(Line::styled(title, Style::new().fg(color).bold()));
    for (key, description) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", key), Style::new().fg(TEXT_WHITE)),
            Span::styled(*description, Style::new().fg(TEXT_DIM)),
        ]));
    }
    lines.push(Line::raw(""));
}

/// Render the help popup with keyboard shortcuts.
pub fn render_help_popup(frame: &mut Frame, area: Rect) {
    let popup_width = 46u16;
    let popup_height = 18u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![
        Line::styled("Keyboard Shortcuts", Style::new().fg(TEXT_WHITE).bold()),
        Line::raw(""),
    ];
    section("Selectors", ACCENT_LIGHT_BLUE, SELECTOR_KEYS, &mut lines);
    section("Option List", ACCENT_MINT, LIST_KEYS, &mut lines);

    lines.push(Line::from(vec![
        Span::styled("Press ", Style::new().fg(TEXT_DIM)),
        Span::styled("?", Style::new().fg(TEXT_WHITE)),
        Span::styled(" or ", Style::new().fg(TEXT_DIM)),
        Span::styled("Esc", Style::new().fg(TEXT_WHITE)),
        Span::styled(" to close", Style::new().fg(TEXT_DIM)),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(ACCENT_LIGHT_BLUE))
        .style(Style::new().bg(Color::Black));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
