//! Activity card list.
//!
//! Every frame rebuilds the whole region from the derived list, so the
//! rendered cards and their removal targets can never go stale.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::model::Activity;
use crate::store::SnapshotStore;
use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::view::derive;

/// Renders the card list region.
pub fn render_cards(frame: &mut Frame, area: Rect, state: &mut AppState, store: &SnapshotStore) {
    let Some(snapshot) = store.current() else {
        // Nothing ever loaded: distinct from an empty derivation.
        let lines = if let Some(err) = store.last_error() {
            vec![
                Line::styled(
                    "Failed to load activities. Please try again later.",
                    Styles::error(),
                ),
                Line::styled(err.to_string(), Styles::dim()),
            ]
        } else {
            vec![Line::styled("Loading activities...", Styles::placeholder())]
        };
        frame.render_widget(Paragraph::new(lines), area);
        return;
    };

    let rows = derive(snapshot, &state.filter);
    if rows.is_empty() {
        let placeholder = Paragraph::new("No activities found.").style(Styles::placeholder());
        frame.render_widget(placeholder, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    let mut selected_range = (0usize, 0usize);

    for (i, activity) in rows.iter().enumerate() {
        let selected = i == state.selected_card;
        let start = lines.len();
        push_card(&mut lines, activity, selected, state.selected_participant);
        if selected {
            selected_range = (start, lines.len());
        }
    }

    adjust_scroll(state, selected_range, lines.len(), area.height as usize);

    let paragraph = Paragraph::new(lines).scroll((state.scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

fn push_card(lines: &mut Vec<Line>, activity: &Activity, selected: bool, participant: usize) {
    let marker = if selected { "▶ " } else { "  " };
    let title_style = if selected {
        Styles::card_title().patch(Styles::selected())
    } else {
        Styles::card_title()
    };
    lines.push(Line::from(vec![
        Span::styled(marker, title_style),
        Span::styled(activity.name.clone(), title_style),
    ]));

    if let Some(desc) = &activity.description {
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(desc.clone(), Styles::default()),
        ]));
    }

    lines.push(detail_line(
        "Schedule",
        activity.schedule.as_deref().unwrap_or("-"),
        Styles::default(),
    ));
    lines.push(detail_line("Category", activity.category_label(), Styles::default()));

    let spots = activity.spots_left();
    let spots_style = if spots <= 0 {
        Styles::error()
    } else {
        Styles::default()
    };
    lines.push(detail_line(
        "Availability",
        &format!("{spots} spots left"),
        spots_style,
    ));

    if activity.participants.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled("No participants yet", Styles::placeholder()),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled("Participants:", Styles::dim()),
        ]));
        for (j, email) in activity.participants.iter().enumerate() {
            let style = if selected && j == participant {
                Styles::selected()
            } else {
                Styles::default()
            };
            lines.push(Line::from(vec![
                Span::raw("      "),
                Span::styled(format!("✗ {email}"), style),
            ]));
        }
    }

    lines.push(Line::raw(""));
}

fn detail_line(label: &str, value: &str, value_style: ratatui::style::Style) -> Line<'static> {
    Line::from(vec![
        Span::raw("    "),
        Span::styled(format!("{label}: "), Styles::dim()),
        Span::styled(value.to_string(), value_style),
    ])
}

/// Keeps the selected card inside the viewport.
fn adjust_scroll(
    state: &mut AppState,
    (start, end): (usize, usize),
    total_lines: usize,
    viewport: usize,
) {
    if viewport == 0 {
        return;
    }
    if start < state.scroll {
        state.scroll = start;
    } else if end > state.scroll + viewport {
        state.scroll = end.saturating_sub(viewport);
    }
    state.scroll = state.scroll.min(total_lines.saturating_sub(viewport));
}
