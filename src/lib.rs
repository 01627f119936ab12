//! **A terminal dashboard for an AWS cost and carbon agent system.**
//!
//! `agent-dashboard` renders a single-screen navigation shell with four
//! pages (Dashboard, Optimize, Query, Settings) filled with static data
//! about cloud spend, carbon posture, a chat transcript with the agent
//! network and a list of optimization playbooks.
//!
//! ## Core Concepts & Modules
//!
//! - **[`navigation`]**: the closed set of pages ([`PageId`]) and the
//!   [`ViewSelector`] tracking which one is visible. This is the only
//!   mutable state in the crate.
//! - **[`data`]**: the literal tables each page displays.
//! - **[`tui`]**: the ratatui shell, page renderers and event handling.
//! - **[`config`]**: YAML configuration discovery, validation and the
//!   persisted theme preference.
//! - **[`cli`]**: handlers behind the `agent-dashboard` binary.
//!
//! ## Switching pages
//!
//! ```
//! use agent_dashboard::{PageId, ViewSelector};
//!
//! let mut selector = ViewSelector::new();
//! assert_eq!(selector.current_title(), "Dashboard");
//!
//! selector.select(PageId::Settings);
//! assert_eq!(selector.current_page(), PageId::Settings);
//!
//! // Unknown identifiers are rejected and leave the selection alone
//! assert!(selector.select_id("billing").is_err());
//! assert_eq!(selector.current_title(), "Settings");
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod navigation;
pub mod tui;

pub use config::{AppConfig, TuiConfig};
pub use data::{page_content, PageContent};
pub use error::{DashboardError, Result};
pub use navigation::{NavItem, PageId, ViewSelector, NAV_ITEMS};
