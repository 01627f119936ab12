//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::error::{DashboardError, Result};
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".agent-dashboard.yaml",
    ".agent-dashboard.yml",
    "agent-dashboard.yaml",
    "agent-dashboard.yml",
];

/// Discover a config file by searching standard locations.
///
/// An explicit path is returned as-is, even when it does not exist, so the
/// caller can report it instead of silently picking up another file.
///
/// Search order otherwise:
/// 1. Current directory
/// 2. Git repository root (if in a repo)
/// 3. User config directory (~/.config/agent-dashboard/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    if let Some(path) = find_git_root().and_then(|root| find_config_in_dir(&root)) {
        return Some(path);
    }

    if let Some(path) =
        dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join("agent-dashboard")))
    {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> std::result::Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load the configuration.
///
/// An explicit path must exist and parse; any failure is returned. A
/// discovered file that cannot be loaded is logged and defaults are used.
pub fn load_or_default(explicit_path: Option<&Path>) -> Result<(AppConfig, Option<PathBuf>)> {
    if let Some(path) = explicit_path {
        let config =
            load_config_file(path).map_err(|e| config_file_error(e, path.to_path_buf()))?;
        return Ok((config, Some(path.to_path_buf())));
    }

    let loaded = discover_config_file(None).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    );
    Ok(loaded)
}

fn config_file_error(err: ConfigFileError, path: PathBuf) -> DashboardError {
    match err {
        ConfigFileError::Io(source) => DashboardError::io(Some(path), source),
        other => DashboardError::config(other.to_string()),
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file from the defaults.
#[must_use]
pub fn generate_example_config() -> String {
    format!(
        "# agent-dashboard configuration\n\
         # Place this file at .agent-dashboard.yaml or ~/.config/agent-dashboard/\n\n{}",
        serde_yaml::to_string(&AppConfig::default()).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# agent-dashboard configuration file
# ==================================
#
# Searched in order: --config path, current directory, git root,
# ~/.config/agent-dashboard/, home directory.
#
# Command-line flags always override file settings.

tui:
  # Theme: dark, light, high-contrast
  theme: dark
  # Click sidebar entries to switch pages
  mouse_enabled: true
  # Event poll interval in milliseconds (16-5000)
  tick_rate_ms: 250
  # Page shown at startup: dashboard, optimize, query, settings (or 1-4)
  initial_page: dashboard
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::PageId;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".agent-dashboard.yaml");
        std::fs::write(&config_path, "tui:\n  theme: light\n").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_explicit_path_wins() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.yaml");
        std::fs::write(&path, "tui:\n  theme: light\n").unwrap();

        assert_eq!(discover_config_file(Some(&path)), Some(path));
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(
            &path,
            "tui:\n  theme: high-contrast\n  initial_page: settings\n",
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.tui.theme, "high-contrast");
        assert_eq!(config.tui.initial_page, PageId::Settings);
        assert!(config.tui.mouse_enabled);
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = load_config_file(&tmp.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigFileError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.yaml");
        std::fs::write(&path, "tui: [not, a, map").unwrap();

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, ConfigFileError::Parse(_)));
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("not-here.yaml");

        assert_eq!(discover_config_file(Some(&path)), Some(path.clone()));
        let err = load_or_default(Some(&path)).unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
        assert!(err.to_string().contains("not-here.yaml"));
    }

    #[test]
    fn test_explicit_unparsable_path_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.yaml");
        std::fs::write(&path, "tui:\n  initial_page: nowhere\n").unwrap();

        let err = load_or_default(Some(&path)).unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn test_explicit_path_loads() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.yaml");
        std::fs::write(&path, "tui:\n  theme: light\n").unwrap();

        let (config, loaded_from) = load_or_default(Some(&path)).unwrap();
        assert_eq!(config.tui.theme, "light");
        assert_eq!(loaded_from, Some(path));
    }

    #[test]
    fn test_unreadable_explicit_path_keeps_the_path() {
        let tmp = TempDir::new().unwrap();
        // A directory exists but cannot be read as a file
        let err = load_or_default(Some(tmp.path())).unwrap_err();
        match err {
            DashboardError::Io { path, .. } => assert_eq!(path.as_deref(), Some(tmp.path())),
            other => panic!("expected Io error, got {other}"),
        }
    }

    #[test]
    fn test_example_configs_parse() {
        let full = generate_full_example_config();
        let config: AppConfig = serde_yaml::from_str(&full).unwrap();
        assert_eq!(config, AppConfig::default());

        let short = generate_example_config();
        let config: AppConfig = serde_yaml::from_str(&short).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
