//! Active page tracking.

use super::page::PageId;
use crate::error::Result;

/// Tracks which page is currently visible.
///
/// The selector is plain owned state: the TUI keeps one inside its app
/// struct and hands it to renderers by reference, so it can be driven and
/// inspected without a terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewSelector {
    active: PageId,
}

impl ViewSelector {
    /// Create a selector showing the dashboard.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: PageId::Dashboard,
        }
    }

    /// Create a selector starting on `page`.
    #[must_use]
    pub const fn starting_at(page: PageId) -> Self {
        Self { active: page }
    }

    /// Make `page` the active page. Selecting the active page is a no-op.
    pub fn select(&mut self, page: PageId) {
        if self.active != page {
            tracing::debug!(from = %self.active, to = %page, "page selected");
            self.active = page;
        }
    }

    /// Select a page by identifier.
    ///
    /// Unknown identifiers are rejected and the active page is left as it was.
    pub fn select_id(&mut self, id: &str) -> Result<PageId> {
        let page = id.parse::<PageId>()?;
        self.select(page);
        Ok(page)
    }

    /// Advance to the next page in navigation order.
    pub fn next(&mut self) {
        self.select(self.active.next());
    }

    /// Go back to the previous page in navigation order.
    pub fn prev(&mut self) {
        self.select(self.active.prev());
    }

    /// The active page.
    #[must_use]
    pub const fn current_page(&self) -> PageId {
        self.active
    }

    /// Header title for the active page.
    #[must_use]
    pub const fn current_title(&self) -> &'static str {
        self.active.label()
    }

    /// Whether `page` is the active page.
    #[must_use]
    pub fn is_active(&self, page: PageId) -> bool {
        self.active == page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;

    #[test]
    fn test_starts_on_dashboard() {
        let selector = ViewSelector::new();
        assert_eq!(selector.current_page(), PageId::Dashboard);
        assert_eq!(selector.current_title(), "Dashboard");
        assert_eq!(selector, ViewSelector::default());
    }

    #[test]
    fn test_select_every_page() {
        let mut selector = ViewSelector::new();
        for page in PageId::ALL {
            selector.select(page);
            assert_eq!(selector.current_page(), page);
            assert_eq!(selector.current_title(), page.label());
            assert!(selector.is_active(page));
        }
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut once = ViewSelector::new();
        once.select(PageId::Optimize);

        let mut twice = ViewSelector::new();
        twice.select(PageId::Optimize);
        twice.select(PageId::Optimize);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_select_unknown_id_keeps_state() {
        let mut selector = ViewSelector::starting_at(PageId::Query);
        let err = selector.select_id("reports").unwrap_err();
        assert!(matches!(err, DashboardError::UnknownPage { .. }));
        assert_eq!(selector.current_page(), PageId::Query);
    }

    #[test]
    fn test_select_id() {
        let mut selector = ViewSelector::new();
        assert_eq!(selector.select_id("settings").unwrap(), PageId::Settings);
        assert_eq!(selector.current_title(), "Settings");
    }

    #[test]
    fn test_cycle_wraps() {
        let mut selector = ViewSelector::new();
        selector.prev();
        assert_eq!(selector.current_page(), PageId::Settings);
        selector.next();
        assert_eq!(selector.current_page(), PageId::Dashboard);
        selector.next();
        assert_eq!(selector.current_page(), PageId::Optimize);
    }
}
