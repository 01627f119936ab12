//! Interactive dashboard command.

use crate::config::{is_valid_theme, AppConfig, TuiPreferences, Validatable, VALID_THEMES};
use crate::navigation::PageId;
use crate::tui::{run_tui, set_theme, DashboardApp, Theme};
use anyhow::{bail, Context, Result};
use std::time::Duration;

/// Everything the `tui` command needs after CLI flags and the config file
/// have been merged.
#[derive(Debug, Clone)]
pub struct TuiCommandConfig {
    pub app: AppConfig,
    /// `--page` override for the configured initial page
    pub page: Option<PageId>,
    /// `--theme` override
    pub theme: Option<String>,
}

/// Pick the startup theme.
///
/// An explicit `--theme` wins, then the theme saved by the last `T` press,
/// then the configured `tui.theme`. An unknown `--theme` is an error; an
/// unknown saved theme is skipped.
pub fn resolve_theme(
    cli_theme: Option<&str>,
    prefs: Option<&TuiPreferences>,
    config_theme: &str,
) -> Result<Theme> {
    if let Some(name) = cli_theme {
        if !is_valid_theme(name) {
            bail!(
                "invalid --theme '{name}'. Valid options: {}",
                VALID_THEMES.join(", ")
            );
        }
        return Ok(Theme::from_name(name));
    }

    let saved = prefs.map(|p| p.theme.as_str()).filter(|name| {
        let valid = is_valid_theme(name);
        if !valid {
            tracing::warn!("Ignoring unknown saved theme '{name}'");
        }
        valid
    });
    Ok(Theme::from_name(saved.unwrap_or(config_theme)))
}

/// Run the `tui` command.
pub fn run_tui_command(config: TuiCommandConfig) -> Result<()> {
    let errors = config.app.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("invalid configuration: {}", details.join("; "));
    }

    let mut tui = config.app.tui;
    if let Some(page) = config.page {
        tui.initial_page = page;
    }

    let prefs = TuiPreferences::load();
    let theme = resolve_theme(config.theme.as_deref(), prefs.as_ref(), &tui.theme)?;
    tracing::debug!(theme = theme.name, page = %tui.initial_page, "launching dashboard");
    set_theme(theme);

    let mut app = DashboardApp::from_config(&tui);
    run_tui(&mut app, Duration::from_millis(tui.tick_rate_ms))
        .context("terminal UI failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_theme_wins() {
        let prefs = TuiPreferences {
            theme: "light".to_string(),
        };
        let theme = resolve_theme(Some("high-contrast"), Some(&prefs), "dark").unwrap();
        assert_eq!(theme.name, "high-contrast");
    }

    #[test]
    fn test_saved_preference_beats_config() {
        let prefs = TuiPreferences {
            theme: "light".to_string(),
        };
        assert_eq!(resolve_theme(None, Some(&prefs), "dark").unwrap().name, "light");
        assert_eq!(resolve_theme(None, None, "light").unwrap().name, "light");
    }

    #[test]
    fn test_unknown_cli_theme_is_rejected() {
        let err = resolve_theme(Some("solarized"), None, "dark").unwrap_err();
        assert!(err.to_string().contains("solarized"));
        assert!(err.to_string().contains("high-contrast"));
    }

    #[test]
    fn test_unknown_saved_theme_falls_back_to_config() {
        let prefs = TuiPreferences {
            theme: "solarized".to_string(),
        };
        assert_eq!(resolve_theme(None, Some(&prefs), "light").unwrap().name, "light");
    }

    #[test]
    fn test_unknown_cli_theme_fails_the_command() {
        let err = run_tui_command(TuiCommandConfig {
            app: AppConfig::default(),
            page: None,
            theme: Some("solarized".to_string()),
        })
        .unwrap_err();
        assert!(err.to_string().contains("--theme"));
    }

    #[test]
    fn test_invalid_config_is_rejected_before_terminal_setup() {
        let app = AppConfig::builder().tick_rate_ms(1).build();
        let err = run_tui_command(TuiCommandConfig {
            app,
            page: None,
            theme: None,
        })
        .unwrap_err();
        assert!(err.to_string().contains("tick_rate_ms"));
    }
}
