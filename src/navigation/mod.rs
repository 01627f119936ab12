//! Navigation model: the fixed set of pages and the active-page selector.
//!
//! This is the only stateful piece of the dashboard. Everything the TUI
//! draws is derived from [`ViewSelector::current_page`] plus the static
//! tables in [`crate::data`].

mod page;
mod selector;

pub use page::{NavItem, PageId, NAV_ITEMS};
pub use selector::ViewSelector;
