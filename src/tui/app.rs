//! `DashboardApp` - application state for the dashboard TUI.

use crate::config::TuiConfig;
use crate::navigation::{PageId, ViewSelector};
use ratatui::layout::Rect;

/// Ticks a status message stays visible before it is cleared.
const STATUS_MESSAGE_TICKS: u64 = 12;

/// Main application state for the dashboard.
#[derive(Debug)]
pub struct DashboardApp {
    /// Which page is visible
    pub(crate) selector: ViewSelector,

    /// Show help overlay
    pub(crate) show_help: bool,

    /// Status message to display temporarily
    pub(crate) status_message: Option<String>,

    /// Tick at which the status message was set
    status_set_at: u64,

    /// Should quit
    pub(crate) should_quit: bool,

    /// Tick counter
    pub(crate) tick: u64,

    /// Whether mouse clicks are handled
    pub(crate) mouse_enabled: bool,

    /// Where the sidebar navigation rows were last drawn, for mouse hit testing
    pub(crate) nav_area: Rect,
}

impl Default for DashboardApp {
    fn default() -> Self {
        Self::new(PageId::Dashboard)
    }
}

impl DashboardApp {
    /// Create a new app showing `initial_page`.
    #[must_use]
    pub fn new(initial_page: PageId) -> Self {
        Self {
            selector: ViewSelector::starting_at(initial_page),
            show_help: false,
            status_message: None,
            status_set_at: 0,
            should_quit: false,
            tick: 0,
            mouse_enabled: true,
            nav_area: Rect::default(),
        }
    }

    /// Create an app from the TUI section of the configuration.
    #[must_use]
    pub fn from_config(config: &TuiConfig) -> Self {
        let mut app = Self::new(config.initial_page);
        app.mouse_enabled = config.mouse_enabled;
        app
    }

    /// Read-only access to the navigation state.
    #[must_use]
    pub const fn selector(&self) -> &ViewSelector {
        &self.selector
    }

    /// The visible page.
    #[must_use]
    pub const fn current_page(&self) -> PageId {
        self.selector.current_page()
    }

    /// Header title for the visible page.
    #[must_use]
    pub const fn current_title(&self) -> &'static str {
        self.selector.current_title()
    }

    /// Switch to `page`.
    pub fn select_page(&mut self, page: PageId) {
        self.selector.select(page);
    }

    /// Switch to the next page.
    pub fn next_page(&mut self) {
        self.selector.next();
    }

    /// Switch to the previous page.
    pub fn prev_page(&mut self) {
        self.selector.prev();
    }

    /// Whether the app has been asked to exit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    #[must_use]
    pub const fn has_overlay(&self) -> bool {
        self.show_help
    }

    pub fn close_overlays(&mut self) {
        self.show_help = false;
    }

    /// Show a message in the footer for a few ticks.
    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_set_at = self.tick;
    }

    /// Advance the tick counter and expire stale status messages.
    pub fn on_tick(&mut self) {
        self.tick += 1;
        if self.status_message.is_some()
            && self.tick.saturating_sub(self.status_set_at) >= STATUS_MESSAGE_TICKS
        {
            self.status_message = None;
        }
    }

    /// Page whose sidebar row contains the terminal cell (`column`, `row`).
    ///
    /// Each navigation entry occupies one row starting at the top of
    /// `nav_area`.
    #[must_use]
    pub fn nav_hit(&self, column: u16, row: u16) -> Option<PageId> {
        let area = self.nav_area;
        if column < area.x
            || column >= area.x.saturating_add(area.width)
            || row < area.y
            || row >= area.y.saturating_add(area.height)
        {
            return None;
        }
        PageId::from_index(usize::from(row - area.y))
    }
}
