//! Terminal User Interface for the activity roster.
//!
//! Interactive viewer over the snapshot store: filter, search and sort the
//! roster locally, sign participants up, and remove them.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use state::{AppState, InputMode, Popup};
