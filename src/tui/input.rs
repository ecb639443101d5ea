//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, InputMode, Popup, SignupFocus};

/// Result of handling a key event. Side effects that need the server (or
/// the store) are returned to the app loop instead of being run here.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Refetch the roster.
    Refresh,
    /// Submit the signup form (popup must be open).
    SubmitSignup,
    /// Unregister the selected participant of the selected card.
    UnregisterSelected,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    // A fresh keystroke supersedes the last status message.
    state.status_message = None;

    match &state.popup {
        Popup::Help { .. } => return handle_help(state, key),
        Popup::Signup(_) => return handle_signup(state, key),
        Popup::None => {}
    }

    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Search => handle_search_mode(state, key),
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let Popup::Help { scroll } = &mut state.popup else {
        return KeyAction::None;
    };
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            state.popup = Popup::None;
        }
        KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1),
        _ => {}
    }
    KeyAction::None
}

fn handle_signup(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let activity_count = state.all_names.len();
    let Popup::Signup(form) = &mut state.popup else {
        return KeyAction::None;
    };
    match key.code {
        KeyCode::Esc => {
            state.popup = Popup::None;
            KeyAction::None
        }
        KeyCode::Enter => KeyAction::SubmitSignup,
        KeyCode::Tab | KeyCode::BackTab => {
            form.focus = match form.focus {
                SignupFocus::Activity => SignupFocus::Email,
                SignupFocus::Email => SignupFocus::Activity,
            };
            KeyAction::None
        }
        KeyCode::Up | KeyCode::Left if form.focus == SignupFocus::Activity => {
            form.activity_index = form.activity_index.saturating_sub(1);
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Right if form.focus == SignupFocus::Activity => {
            if form.activity_index + 1 < activity_count {
                form.activity_index += 1;
            }
            KeyAction::None
        }
        KeyCode::Backspace if form.focus == SignupFocus::Email => {
            form.email.pop();
            KeyAction::None
        }
        KeyCode::Char(c) if form.focus == SignupFocus::Email => {
            form.email.push(c);
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        KeyCode::Char('?') => {
            state.popup = Popup::Help { scroll: 0 };
            KeyAction::None
        }
        KeyCode::Char('/') => {
            state.input_mode = InputMode::Search;
            KeyAction::None
        }
        KeyCode::Char('c') => {
            state.cycle_category();
            KeyAction::None
        }
        KeyCode::Char('s') => {
            state.filter.sort = state.filter.sort.toggle();
            KeyAction::None
        }

        // Card selection
        KeyCode::Up | KeyCode::Char('k') => {
            if state.selected_card > 0 {
                state.selected_card -= 1;
                state.selected_participant = 0;
            }
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.selected_card + 1 < state.visible.len() {
                state.selected_card += 1;
                state.selected_participant = 0;
            }
            KeyAction::None
        }

        // Participant selection inside the selected card
        KeyCode::Left | KeyCode::Char('h') => {
            state.selected_participant = state.selected_participant.saturating_sub(1);
            KeyAction::None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if state.selected_participant + 1 < state.selected_participants.len() {
                state.selected_participant += 1;
            }
            KeyAction::None
        }

        KeyCode::Char('d') | KeyCode::Delete => KeyAction::UnregisterSelected,
        KeyCode::Char('a') => {
            state.open_signup();
            KeyAction::None
        }
        KeyCode::Char('R') | KeyCode::F(5) => KeyAction::Refresh,

        KeyCode::Esc => {
            // Status already cleared above; Esc also drops the search text.
            state.filter.search.clear();
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

/// Handles keys while the search text is being edited. The list recomputes
/// on every keystroke, locally, against the held snapshot.
fn handle_search_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            state.input_mode = InputMode::Normal;
            state.filter.search.clear();
        }
        KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            state.filter.search.pop();
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        KeyCode::Char(c) => {
            state.filter.search.push(c);
        }
        _ => {}
    }
    KeyAction::None
}
