//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs. The non-interactive commands
//! write to any `io::Write` so their output can be asserted on directly.

mod dashboard;
mod inspect;

pub use dashboard::{resolve_theme, run_tui_command, TuiCommandConfig};
pub use inspect::{run_pages, run_show, OutputFormat};
