//! Main rendering logic for the TUI.

use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use crate::store::SnapshotStore;

use super::state::{AppState, Popup};
use super::widgets::{
    render_cards, render_filter_bar, render_footer, render_header, render_help, render_signup,
};

/// Main render function: header, filter bar, card list, footer, popups.
pub fn render(frame: &mut Frame, state: &mut AppState, store: &SnapshotStore) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Length(1), // Filter bar
        Constraint::Min(5),    // Card list
        Constraint::Length(1), // Footer hints
    ])
    .split(area);

    render_header(frame, chunks[0], state, store);
    render_filter_bar(frame, chunks[1], state);
    render_cards(frame, chunks[2], state, store);
    render_footer(frame, chunks[3]);

    // Popups overlay everything.
    match &state.popup {
        Popup::Help { scroll } => render_help(frame, area, *scroll),
        Popup::Signup(form) => render_signup(frame, area, form, &state.all_names),
        Popup::None => {}
    }
}
