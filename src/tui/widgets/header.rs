//! Header bar, filter bar, and footer hints.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::store::SnapshotStore;
use crate::tui::state::{AppState, InputMode};
use crate::tui::style::Styles;

/// Renders the header bar: title, last refresh time, status/error.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState, store: &SnapshotStore) {
    let chunks = Layout::horizontal([
        Constraint::Length(13), // Title
        Constraint::Length(18), // Last refresh
        Constraint::Min(20),    // Status / error
    ])
    .split(area);

    let title = Paragraph::new(" rosterview ").style(Styles::header());
    frame.render_widget(title, chunks[0]);

    let refreshed = store
        .last_refresh()
        .map(|t| format!("updated {}", t.format("%H:%M:%S")))
        .unwrap_or_else(|| "not loaded".to_string());
    frame.render_widget(Paragraph::new(refreshed).style(Styles::header()), chunks[1]);

    // Status message wins; otherwise a refresh failure over a stale
    // snapshot is surfaced here (the initial-load failure is rendered in
    // the list region instead).
    let (text, style) = if let Some(msg) = &state.status_message {
        (msg.clone(), Styles::status())
    } else if let Some(err) = store.last_error() {
        if store.current().is_some() {
            (format!("refresh failed: {err}"), Styles::error())
        } else {
            (String::new(), Styles::header())
        }
    } else {
        (String::new(), Styles::header())
    };
    frame.render_widget(Paragraph::new(text).style(style), chunks[2]);
}

/// Renders the filter bar: category options, search input, sort key.
///
/// The option list comes from the snapshot via `state.categories`, never
/// from the filtered list, so filtering cannot hide options.
pub fn render_filter_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(" Category: ", Styles::dim())];
    let active = state.filter.category.as_deref();
    spans.push(Span::styled(
        "All",
        if active.is_none() {
            Styles::card_title()
        } else {
            Styles::dim()
        },
    ));
    for cat in &state.categories {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            cat.clone(),
            if active == Some(cat.as_str()) {
                Styles::card_title()
            } else {
                Styles::dim()
            },
        ));
    }
    spans.push(Span::styled("  Search: ", Styles::dim()));
    if state.input_mode == InputMode::Search {
        spans.push(Span::styled(
            format!("{}█", state.filter.search),
            Styles::filter_input(),
        ));
    } else if state.filter.search.is_empty() {
        spans.push(Span::styled("-", Styles::dim()));
    } else {
        spans.push(Span::styled(
            format!("/{}", state.filter.search),
            Styles::default(),
        ));
    }
    spans.push(Span::styled("  Sort: ", Styles::dim()));
    spans.push(Span::styled(state.filter.sort.label(), Styles::default()));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the one-line key hints footer.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = [
        ("j/k", "card"),
        ("h/l", "participant"),
        ("d", "remove"),
        ("a", "signup"),
        ("/", "search"),
        ("c", "category"),
        ("s", "sort"),
        ("R", "refresh"),
        ("?", "help"),
        ("q", "quit"),
    ];
    let mut spans = vec![Span::raw(" ")];
    for (key, label) in hints {
        spans.push(Span::styled(key, Styles::help_key()));
        spans.push(Span::styled(format!(" {label}  "), Styles::help()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
