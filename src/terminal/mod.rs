//! Terminal presentation layer: lifecycle, rendering, and the
//! announcement line.

mod announcer;
mod rendering;
mod status_bar;
mod tui;

pub use announcer::{Announcer, ANNOUNCEMENT_TTL};
pub use rendering::{render_app, stage_rect};
pub use status_bar::StatusBar;
pub use tui::Tui;
