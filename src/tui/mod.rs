//! Interactive terminal dashboard built on ratatui.
//!
//! [`DashboardApp`] owns the navigation state; [`run_tui`] drives the
//! crossterm event loop and [`render`] draws one frame from that state.
//! The only global is the active color [`Theme`].

mod app;
mod events;
pub mod theme;
mod ui;
pub(crate) mod views;
pub(crate) mod widgets;

pub use app::DashboardApp;
pub use events::{handle_key_event, handle_mouse_event, Event, EventHandler};
pub use theme::{
    colors, current_theme_name, set_theme, toggle_theme, ColorScheme, FooterHints, Styles, Theme,
};
pub use ui::{render, run_tui};
pub use widgets::{MIN_HEIGHT, MIN_WIDTH};
