//! Configuration types for agent-dashboard.

use crate::error::{DashboardError, Result};
use crate::navigation::PageId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default event poll interval in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

// ============================================================================
// Top-level configuration
// ============================================================================

/// Root of the `.agent-dashboard.yaml` configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Terminal UI settings
    pub tui: TuiConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the theme name.
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.config.tui.theme = theme.into();
        self
    }

    /// Enable or disable mouse support.
    pub const fn mouse_enabled(mut self, enabled: bool) -> Self {
        self.config.tui.mouse_enabled = enabled;
        self
    }

    /// Set the event poll interval.
    pub const fn tick_rate_ms(mut self, ms: u64) -> Self {
        self.config.tui.tick_rate_ms = ms;
        self
    }

    /// Set the page shown at startup.
    pub const fn initial_page(mut self, page: PageId) -> Self {
        self.config.tui.initial_page = page;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Enable mouse support (click sidebar entries to switch pages)
    pub mouse_enabled: bool,
    /// Event poll interval in milliseconds
    #[schemars(range(min = 16, max = 5000))]
    pub tick_rate_ms: u64,
    /// Page shown at startup
    pub initial_page: PageId,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            mouse_enabled: true,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            initial_page: PageId::Dashboard,
        }
    }
}

// ============================================================================
// TUI Preferences (persisted)
// ============================================================================

/// TUI preferences that persist across sessions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TuiPreferences {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

impl TuiPreferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("agent-dashboard").join("preferences.json"))
    }

    /// Load preferences from disk, or `None` if absent or unreadable.
    #[must_use]
    pub fn load() -> Option<Self> {
        Self::config_path().and_then(|p| Self::load_from(&p))
    }

    /// Load preferences from `path`, or `None` if absent or unreadable.
    #[must_use]
    pub fn load_from(path: &Path) -> Option<Self> {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
    }

    /// Save preferences to disk.
    pub fn save(&self) -> Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    /// Save preferences to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DashboardError::io(Some(parent.to_path_buf()), e))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DashboardError::config(format!("cannot encode preferences: {e}")))?;
        std::fs::write(path, json).map_err(|e| DashboardError::io(Some(path.to_path_buf()), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.tui.theme, "dark");
        assert!(config.tui.mouse_enabled);
        assert_eq!(config.tui.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert_eq!(config.tui.initial_page, PageId::Dashboard);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .theme("light")
            .mouse_enabled(false)
            .tick_rate_ms(100)
            .initial_page(PageId::Query)
            .build();
        assert_eq!(config.tui.theme, "light");
        assert!(!config.tui.mouse_enabled);
        assert_eq!(config.tui.tick_rate_ms, 100);
        assert_eq!(config.tui.initial_page, PageId::Query);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: AppConfig = serde_yaml::from_str("tui:\n  initial_page: optimize\n").unwrap();
        assert_eq!(config.tui.initial_page, PageId::Optimize);
        assert_eq!(config.tui.theme, "dark");
    }

    #[test]
    fn test_initial_page_accepts_labels_and_shortcuts() {
        let config: AppConfig = serde_yaml::from_str("tui:\n  initial_page: Settings\n").unwrap();
        assert_eq!(config.tui.initial_page, PageId::Settings);
        let config: AppConfig = serde_yaml::from_str("tui:\n  initial_page: 2\n").unwrap();
        assert_eq!(config.tui.initial_page, PageId::Optimize);
    }

    #[test]
    fn test_unknown_initial_page_is_rejected() {
        let result: std::result::Result<AppConfig, _> = serde_yaml::from_str("tui:\n  initial_page: billing\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_preferences_round_trip_through_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("preferences.json");
        let prefs = TuiPreferences {
            theme: "light".to_string(),
        };
        prefs.save_to(&path).unwrap();

        let loaded = TuiPreferences::load_from(&path).unwrap();
        assert_eq!(loaded.theme, "light");
    }

    #[test]
    fn test_preferences_save_error_names_the_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        let blocker = tmp.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        let err = TuiPreferences::default()
            .save_to(&blocker.join("preferences.json"))
            .unwrap_err();
        assert!(matches!(err, DashboardError::Io { .. }));
        assert!(err.to_string().contains("file"));
    }
}
