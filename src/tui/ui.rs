use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, ClickRegion, InputMode};
use crate::events::Action;
use super::components::{
    render_change_log, render_help_popup, render_level_selectors, render_option_list,
};
use super::theme::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    // Regions are rebuilt every frame
    app.interactions.clear();

    let area = frame.area();

    // Main vertical layout: title, content, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2), // Title + spacing
        Constraint::Min(0),    // Content
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_title(frame, main_layout[0], app);

    // Horizontal split: selectors | gap | change log
    let (selectors_area, log_area) = if app.show_change_log {
        let content = Layout::horizontal([
            Constraint::Percentage(55),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(main_layout[1]);
        (content[0], Some(content[2]))
    } else {
        (main_layout[1], None)
    };

    render_level_selectors(frame, selectors_area, app);
    if let Some(log_area) = log_area {
        render_change_log(frame, log_area, app);
    }

    render_hotkeys(frame, main_layout[2], app);

    // Overlays
    if app.option_list.is_some() {
        render_option_list(frame, selectors_area, app);
    }
    if app.input_mode == InputMode::Help {
        // Help is modal: nothing underneath stays clickable
        app.interactions.clear();
        app.interactions.register_click(
            "help_backdrop",
            ClickRegion::new(area.x, area.y, area.width, area.height),
            Action::CloseHelp,
        );
        render_help_popup(frame, area);
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let levels = app.dropdown.hierarchy();
    let mut spans = vec![
        Span::styled("cascader", Style::new().fg(ACCENT_MINT).bold()),
        Span::styled("  ", Style::new()),
        Span::styled(app.source.as_str(), Style::new().fg(TEXT_DIM)),
    ];

    if !levels.is_empty() {
        spans.push(Span::styled("  ", Style::new()));
        for (depth, level) in levels.iter().enumerate() {
            if depth > 0 {
                spans.push(Span::styled(" › ", Style::new().fg(TEXT_DIM)));
            }
            spans.push(Span::styled(level.as_str(), Style::new().fg(level_accent(depth))));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(status) = &app.status {
        let line = Line::styled(status.as_str(), Style::new().fg(ACCENT_CORAL));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let keys: &[(&str, &str)] = match app.input_mode {
        InputMode::Browse => &[
            ("[↑/↓]", " level · "),
            ("[Enter]", " open · "),
            ("[Bksp]", " reset · "),
            ("[l]", " log · "),
            ("[?]", " help · "),
            ("[q]", " quit"),
        ],
        InputMode::OptionList => &[
            ("[↑/↓]", " navigate · "),
            ("[Enter]", " select · "),
            ("[Esc]", " cancel"),
        ],
        InputMode::Help => &[("[Esc]", " close")],
    };

    let spans: Vec<Span> = keys
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, Style::new().fg(TEXT_WHITE)),
                Span::styled(*label, Style::new().fg(TEXT_DIM)),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
