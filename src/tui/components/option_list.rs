//! Option list popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{App, ClickRegion};
use crate::events::Action;
use crate::tui::theme::*;

use super::{fit_width, level_layout};

/// Popup rectangle below (or, when there is no room, above) the selector row.
fn popup_area(bounds: Rect, anchor: Rect, entry_count: usize, widest: usize) -> Rect {
    let width = clamp_u16(widest)
        .saturating_add(6)
        .max(anchor.width.saturating_sub(2))
        .min(bounds.width);
    let wanted = clamp_u16(entry_count).saturating_add(2);
    let bottom = bounds.y.saturating_add(bounds.height);

    let below = bottom.saturating_sub(anchor.y.saturating_add(1));
    let above = anchor.y.saturating_sub(bounds.y);
    let (y, height) = if wanted <= below || below >= above {
        (anchor.y.saturating_add(1), wanted.min(below))
    } else {
        let height = wanted.min(above);
        (anchor.y - height, height)
    };

    let x = anchor
        .x
        .saturating_add(2)
        .min(bounds.x.saturating_add(bounds.width).saturating_sub(width));
    Rect::new(x, y, width, height)
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// First entry shown so the highlighted one stays visible.
fn scroll_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        0
    } else {
        selected.saturating_sub(visible - 1)
    }
}

/// Render the open option list and register its click/scroll regions.
pub fn render_option_list(frame: &mut Frame, selectors_area: Rect, app: &mut App) {
    let Some(list) = app.option_list.clone() else {
        return;
    };

    let Some((_, anchor)) = level_layout(selectors_area, app.level_count(), app.focused)
        .into_iter()
        .find(|(idx, _)| *idx == list.level_idx)
    else {
        return;
    };

    let widest = list
        .entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0);
    let area = popup_area(frame.area(), anchor, list.entries.len(), widest);
    if area.height < 3 {
        return;
    }

    // Clicking anywhere outside the list closes it
    app.interactions.register_click(
        "option_list_backdrop",
        ClickRegion::new(0, 0, u16::MAX, u16::MAX),
        Action::CloseList,
    );

    frame.render_widget(Clear, area);

    let visible = area.height.saturating_sub(2) as usize;
    let offset = scroll_offset(list.selected, visible);
    let text_width = area.width.saturating_sub(4) as usize;
    let accent = level_accent(list.level_idx);

    let mut lines: Vec<Line> = vec![];
    for (i, entry) in list.entries.iter().enumerate().skip(offset).take(visible) {
        let is_highlighted = i == list.selected;
        let cursor = if is_highlighted { "> " } else { "  " };

        let text_style = if entry.is_placeholder() {
            Style::new().fg(TEXT_DIM)
        } else if is_highlighted {
            Style::new().fg(TEXT_WHITE).bold()
        } else {
            Style::new().fg(TEXT_WHITE)
        };
        let row_style = if is_highlighted {
            Style::new().bg(HIGHLIGHT_BG)
        } else {
            Style::new()
        };

        lines.push(
            Line::from(vec![
                Span::styled(cursor, Style::new().fg(accent)),
                Span::styled(fit_width(&entry.label, text_width), text_style),
            ])
            .style(row_style),
        );

        let row_y = area.y + 1 + (i - offset) as u16;
        app.interactions
            .register_list_entry(i, ClickRegion::new(area.x + 1, row_y, area.width.saturating_sub(2), 1));
    }

    app.interactions.register_scroll(
        "option_list",
        ClickRegion::new(area.x, area.y, area.width, area.height),
        Action::ListUp,
        Action::ListDown,
    );

    let block = Block::default()
        .title(format!(" {} ", list.level))
        .title_style(Style::new().fg(accent).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(accent))
        .style(Style::new().bg(Color::Black));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_opens_below_selector() {
        let bounds = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(0, 4, 40, 1);

        let area = popup_area(bounds, anchor, 3, 10);

        assert_eq!(area, Rect::new(2, 5, 38, 5));
    }

    #[test]
    fn test_popup_flips_above_near_bottom() {
        let bounds = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(0, 21, 40, 1);

        let area = popup_area(bounds, anchor, 6, 10);

        assert_eq!(area.y + area.height, 21);
        assert_eq!(area.height, 8);
    }

    #[test]
    fn test_popup_stays_inside_bounds() {
        let bounds = Rect::new(0, 0, 20, 10);
        let anchor = Rect::new(0, 1, 20, 1);

        let area = popup_area(bounds, anchor, 30, 40);

        assert!(area.x + area.width <= 20);
        assert!(area.y + area.height <= 10);
    }

    #[test]
    fn test_huge_option_count_fills_available_space() {
        let bounds = Rect::new(0, 0, 80, 24);
        let anchor = Rect::new(0, 4, 40, 1);

        for count in [65_534, 65_536, 1_000_000] {
            let area = popup_area(bounds, anchor, count, 10);
            assert_eq!(area, Rect::new(2, 5, 38, 19), "{} options", count);
        }

        let area = popup_area(bounds, anchor, 3, usize::MAX);
        assert_eq!(area.width, 80);
    }

    #[test]
    fn test_scroll_offset_keeps_highlight_visible() {
        assert_eq!(scroll_offset(0, 4), 0);
        assert_eq!(scroll_offset(3, 4), 0);
        assert_eq!(scroll_offset(6, 4), 3);
        assert_eq!(scroll_offset(6, 0), 0);
    }
}
