//! Help popup with the full keymap.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::style::{Styles, Theme};

const KEYMAP: &[(&str, &str)] = &[
    ("j / k, Down / Up", "select activity card"),
    ("h / l, Left / Right", "select participant in card"),
    ("d, Delete", "unregister selected participant"),
    ("a", "open signup form"),
    ("/", "edit search text (Enter keeps, Esc clears)"),
    ("c", "cycle category filter"),
    ("s", "toggle sort (name / time)"),
    ("R, F5", "refresh from server"),
    ("Esc", "clear status message / search"),
    ("?", "toggle this help"),
    ("q, Ctrl-C", "quit"),
];

/// Renders the centered help popup.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: usize) {
    let popup_width = (area.width * 60 / 100).clamp(48, 70).min(area.width);
    let popup_height = ((KEYMAP.len() + 4) as u16).min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(ratatui::style::Style::default().fg(Theme::TITLE));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut content = vec![Line::from("")];
    for (keys, description) in KEYMAP {
        content.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{keys:<20}"), Styles::help_key()),
            Span::styled(*description, Styles::help()),
        ]));
    }

    let paragraph = Paragraph::new(content).scroll((scroll as u16, 0));
    frame.render_widget(paragraph, inner);
}
