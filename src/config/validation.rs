//! Configuration validation for agent-dashboard.

use super::types::{AppConfig, TuiConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Theme names accepted by the TUI.
pub const VALID_THEMES: [&str; 3] = ["dark", "light", "high-contrast"];

/// Whether `name` is one of [`VALID_THEMES`], ignoring case.
#[must_use]
pub fn is_valid_theme(name: &str) -> bool {
    VALID_THEMES.iter().any(|t| t.eq_ignore_ascii_case(name))
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        self.tui.validate()
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !is_valid_theme(&self.theme) {
            errors.push(ConfigError {
                field: "tui.theme".to_string(),
                message: format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    VALID_THEMES.join(", ")
                ),
            });
        }

        if !(16..=5000).contains(&self.tick_rate_ms) {
            errors.push(ConfigError {
                field: "tui.tick_rate_ms".to_string(),
                message: format!(
                    "Tick rate must be between 16 and 5000 ms, got {}",
                    self.tick_rate_ms
                ),
            });
        }

        errors
    }
}
