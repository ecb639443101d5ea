//! Main TUI application.

use std::io;
use std::time::{Duration, Instant};

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::actions::MutationController;
use crate::store::SnapshotStore;

use super::event::{Event, EventHandler};
use super::input::{handle_key, KeyAction};
use super::render::render;
use super::state::{AppState, Popup};

/// Main TUI application: owns the store, the mutation controller, and the
/// UI state, and runs the event loop.
///
/// All server calls are blocking and run on this thread, so a refresh
/// always completes (fetch, decode, replace, repaint) before the next user
/// event is processed. Filter keystrokes never touch the network; they just
/// change state the next frame derives from.
pub struct App {
    store: SnapshotStore,
    controller: MutationController,
    state: AppState,
    auto_refresh: Option<Duration>,
    last_refresh_attempt: Instant,
    should_quit: bool,
}

impl App {
    pub fn new(store: SnapshotStore, auto_refresh: Option<Duration>) -> Self {
        Self {
            store,
            controller: MutationController::new(),
            state: AppState::new(),
            auto_refresh,
            last_refresh_attempt: Instant::now(),
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);

        // Initial load; a failure shows up in the list region.
        self.refresh();

        loop {
            self.state.sync(self.store.current());
            terminal.draw(|frame| render(frame, &mut self.state, &self.store))?;

            match events.next() {
                Ok(Event::Tick) => {
                    if let Some(every) = self.auto_refresh {
                        if self.last_refresh_attempt.elapsed() >= every {
                            self.refresh();
                        }
                    }
                }
                Ok(Event::Key(key)) => match handle_key(&mut self.state, key) {
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::Refresh => self.refresh(),
                    KeyAction::SubmitSignup => self.submit_signup(),
                    KeyAction::UnregisterSelected => self.unregister_selected(),
                    KeyAction::None => {}
                },
                Ok(Event::Resize) => {}
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn refresh(&mut self) {
        self.last_refresh_attempt = Instant::now();
        self.store.refresh();
    }

    /// Submits the signup form. On success the popup closes, the server's
    /// message becomes the status line, and the roster is refetched; on any
    /// failure the popup stays open with the message and the snapshot is
    /// left alone.
    fn submit_signup(&mut self) {
        let Popup::Signup(form) = &self.state.popup else {
            return;
        };
        let activity = self
            .state
            .all_names
            .get(form.activity_index)
            .cloned()
            .unwrap_or_default();
        let email = form.email.trim().to_string();

        match self.controller.signup(self.store.api(), &activity, &email) {
            Ok(message) => {
                self.state.popup = Popup::None;
                self.state.status_message = Some(message);
                self.refresh();
            }
            Err(err) => {
                if let Popup::Signup(form) = &mut self.state.popup {
                    form.error = Some(err.to_string());
                }
            }
        }
    }

    /// Unregisters the selected participant. No optimistic removal: the
    /// roster only changes through the refetch after server confirmation.
    fn unregister_selected(&mut self) {
        let Some((activity, email)) = self.state.unregister_target() else {
            self.state.status_message = Some("No participant selected".to_string());
            return;
        };

        match self.controller.unregister(self.store.api(), &activity, &email) {
            Ok(message) => {
                self.state.status_message = Some(message);
                self.refresh();
            }
            Err(err) => {
                self.state.status_message = Some(err.to_string());
            }
        }
    }
}
