//! Application state for the TUI.

use crate::model::Snapshot;
use crate::view::{derive, FilterState};

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Search text is being edited; every keystroke recomputes the list.
    Search,
}

/// Which signup form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupFocus {
    #[default]
    Activity,
    Email,
}

/// State of the signup form popup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    /// Index into the unfiltered activity name list.
    pub activity_index: usize,
    pub email: String,
    pub focus: SignupFocus,
    /// Validation or server error shown inside the popup.
    pub error: Option<String>,
}

/// Active popup. Only one can be open at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Popup {
    #[default]
    None,
    Help {
        scroll: usize,
    },
    Signup(SignupForm),
}

impl Popup {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Main application state.
///
/// The derived row names, category options, and participant list of the
/// selected card are cached here by `sync` so key handling can clamp
/// selection without re-deriving; `sync` runs once per loop iteration,
/// before input and rendering, against the current snapshot.
#[derive(Debug, Default)]
pub struct AppState {
    pub input_mode: InputMode,
    pub filter: FilterState,
    pub popup: Popup,
    /// Selected card, index into `visible`.
    pub selected_card: usize,
    /// Selected participant inside the selected card.
    pub selected_participant: usize,
    /// Content scroll offset in lines.
    pub scroll: usize,
    /// Transient status line (success or error), cleared with Esc.
    pub status_message: Option<String>,
    /// Names of the derived (visible) cards, in display order.
    pub visible: Vec<String>,
    /// All activity names in snapshot order (signup selector, unfiltered).
    pub all_names: Vec<String>,
    /// Category options derived from the snapshot (never from the filtered
    /// list, so filtering cannot hide options).
    pub categories: Vec<String>,
    /// Participants of the selected card, in roster order.
    pub selected_participants: Vec<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes cached derivation results and clamps selection against
    /// them. Called once per loop iteration with the current snapshot.
    pub fn sync(&mut self, snapshot: Option<&Snapshot>) {
        let Some(snapshot) = snapshot else {
            self.visible.clear();
            self.all_names.clear();
            self.categories.clear();
            self.selected_participants.clear();
            self.selected_card = 0;
            self.selected_participant = 0;
            return;
        };

        self.categories = snapshot
            .categories()
            .into_iter()
            .map(str::to_string)
            .collect();

        // A category removed server-side must not linger as a filter.
        if let Some(cat) = self.filter.category.as_deref() {
            if !self.categories.iter().any(|c| c == cat) {
                self.filter.category = None;
            }
        }

        self.all_names = snapshot.names().into_iter().map(str::to_string).collect();
        self.visible = derive(snapshot, &self.filter)
            .into_iter()
            .map(|a| a.name.clone())
            .collect();

        if self.selected_card >= self.visible.len() {
            self.selected_card = self.visible.len().saturating_sub(1);
        }

        self.selected_participants = self
            .visible
            .get(self.selected_card)
            .and_then(|name| snapshot.get(name))
            .map(|a| a.participants.clone())
            .unwrap_or_default();

        if self.selected_participant >= self.selected_participants.len() {
            self.selected_participant = self.selected_participants.len().saturating_sub(1);
        }
    }

    /// Name of the currently selected card, if any.
    pub fn selected_activity(&self) -> Option<&str> {
        self.visible.get(self.selected_card).map(String::as_str)
    }

    /// (activity, email) pair for the removal action, carried as exact
    /// parameters rather than free text.
    pub fn unregister_target(&self) -> Option<(String, String)> {
        let activity = self.selected_activity()?.to_string();
        let email = self
            .selected_participants
            .get(self.selected_participant)?
            .clone();
        Some((activity, email))
    }

    /// Cycles the category filter: All -> each category in order -> All.
    pub fn cycle_category(&mut self) {
        let next = match self.filter.category.as_deref() {
            None => self.categories.first().cloned(),
            Some(current) => {
                match self.categories.iter().position(|c| c == current) {
                    Some(i) => self.categories.get(i + 1).cloned(),
                    // Stale selection; restart the cycle.
                    None => self.categories.first().cloned(),
                }
            }
        };
        self.filter.category = next;
        self.selected_card = 0;
        self.selected_participant = 0;
    }

    /// Opens the signup form, preselecting the currently selected card.
    pub fn open_signup(&mut self) {
        let activity_index = self
            .selected_activity()
            .and_then(|name| self.all_names.iter().position(|n| n == name))
            .unwrap_or(0);
        self.popup = Popup::Signup(SignupForm {
            activity_index,
            ..SignupForm::default()
        });
    }
}
