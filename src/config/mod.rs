//! Configuration module for agent-dashboard.
//!
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - Persisted TUI preferences (last selected theme)
//!
//! # Configuration File
//!
//! Place a `.agent-dashboard.yaml` file in your project root or
//! `~/.config/agent-dashboard/`:
//!
//! ```yaml
//! tui:
//!   theme: light
//!   initial_page: optimize
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{AppConfig, AppConfigBuilder, TuiConfig, TuiPreferences, DEFAULT_TICK_RATE_MS};
pub use validation::{is_valid_theme, ConfigError, Validatable, VALID_THEMES};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the configuration file format.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
