//! TUI widgets.

mod cards;
mod header;
mod help;
mod signup;

pub use cards::render_cards;
pub use header::{render_filter_bar, render_footer, render_header};
pub use help::render_help;
pub use signup::render_signup;
