//! Signup form popup.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::state::{SignupFocus, SignupForm};
use crate::tui::style::{Styles, Theme};

/// Renders the centered signup popup. The activity selector walks the full
/// snapshot name list, unfiltered.
pub fn render_signup(frame: &mut Frame, area: Rect, form: &SignupForm, all_names: &[String]) {
    let popup_width = (area.width * 60 / 100).clamp(44, 64).min(area.width);
    let popup_height = 9u16.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Sign up for an activity ")
        .borders(Borders::ALL)
        .border_style(ratatui::style::Style::default().fg(Theme::TITLE));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let activity = all_names
        .get(form.activity_index)
        .map(String::as_str)
        .unwrap_or("-- no activities --");
    let activity_style = if form.focus == SignupFocus::Activity {
        Styles::selected()
    } else {
        Styles::default()
    };
    let email_text = if form.focus == SignupFocus::Email {
        format!("{}█", form.email)
    } else if form.email.is_empty() {
        "-".to_string()
    } else {
        form.email.clone()
    };
    let email_style = if form.focus == SignupFocus::Email {
        Styles::filter_input()
    } else {
        Styles::default()
    };

    let mut content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Activity: ", Styles::dim()),
            Span::styled(format!("< {activity} >"), activity_style),
        ]),
        Line::from(vec![
            Span::styled("Email:    ", Styles::dim()),
            Span::styled(email_text, email_style),
        ]),
        Line::from(""),
    ];
    if let Some(err) = &form.error {
        content.push(Line::styled(err.clone(), Styles::error()));
    } else {
        content.push(Line::from(""));
    }
    content.push(Line::from(vec![
        Span::styled("Tab", Styles::help_key()),
        Span::styled(" field  ", Styles::help()),
        Span::styled("Up/Down", Styles::help_key()),
        Span::styled(" activity  ", Styles::help()),
        Span::styled("Enter", Styles::help_key()),
        Span::styled(" submit  ", Styles::help()),
        Span::styled("Esc", Styles::help_key()),
        Span::styled(" cancel", Styles::help()),
    ]));

    let paragraph = Paragraph::new(content).alignment(Alignment::Left);
    frame.render_widget(paragraph, inner);
}
