//! Centralized theme and color scheme for the dashboard.
//!
//! All views read colors through [`colors()`], so switching the theme at
//! runtime restyles the next frame without touching view code.

use crate::data::CarbonStatus;
use crate::navigation::PageId;
use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Semantic colors for dashboard elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Carbon status colors
    pub optimized: Color,
    pub overprovisioned: Color,
    pub high_carbon: Color,

    // UI element colors
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub text: Color,
    pub text_muted: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,

    // Chat bubbles
    pub chat_user: Color,
    pub chat_ai: Color,

    // Chart series
    pub cost_series: Color,
    pub carbon_series: Color,

    // Badge foreground for text on colored backgrounds
    pub badge_fg_dark: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Const dark theme for static initialization
    const fn dark_const() -> Self {
        Self {
            optimized: Color::Rgb(52, 211, 153),
            overprovisioned: Color::Rgb(251, 191, 36),
            high_carbon: Color::Rgb(251, 113, 133),

            primary: Color::Rgb(52, 211, 153),
            secondary: Color::Rgb(56, 189, 248),
            accent: Color::Rgb(110, 231, 183),
            muted: Color::Rgb(100, 116, 139),
            border: Color::Rgb(30, 41, 59),
            border_focused: Color::Rgb(52, 211, 153),
            text: Color::Rgb(226, 232, 240),
            text_muted: Color::Rgb(148, 163, 184),

            success: Color::Rgb(52, 211, 153),
            warning: Color::Rgb(251, 191, 36),

            chat_user: Color::Rgb(226, 232, 240),
            chat_ai: Color::Rgb(209, 250, 229),

            cost_series: Color::Rgb(56, 189, 248),
            carbon_series: Color::Rgb(52, 211, 153),

            badge_fg_dark: Color::Black,
        }
    }

    /// Dark theme (default)
    pub const fn dark() -> Self {
        Self::dark_const()
    }

    /// Light theme
    pub const fn light() -> Self {
        Self {
            optimized: Color::Rgb(4, 120, 87),
            overprovisioned: Color::Rgb(180, 83, 9),
            high_carbon: Color::Rgb(190, 18, 60),

            primary: Color::Rgb(4, 120, 87),
            secondary: Color::Rgb(3, 105, 161),
            accent: Color::Rgb(6, 95, 70),
            muted: Color::Rgb(148, 163, 184),
            border: Color::Rgb(203, 213, 225),
            border_focused: Color::Rgb(4, 120, 87),
            text: Color::Rgb(15, 23, 42),
            text_muted: Color::Rgb(71, 85, 105),

            success: Color::Rgb(4, 120, 87),
            warning: Color::Rgb(180, 83, 9),

            chat_user: Color::Rgb(15, 23, 42),
            chat_ai: Color::Rgb(6, 95, 70),

            cost_series: Color::Rgb(3, 105, 161),
            carbon_series: Color::Rgb(4, 120, 87),

            badge_fg_dark: Color::White,
        }
    }

    /// High contrast theme (accessibility)
    pub const fn high_contrast() -> Self {
        Self {
            optimized: Color::LightGreen,
            overprovisioned: Color::LightYellow,
            high_carbon: Color::LightRed,

            primary: Color::LightCyan,
            secondary: Color::LightBlue,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::LightCyan,
            text: Color::White,
            text_muted: Color::Gray,

            success: Color::LightGreen,
            warning: Color::LightYellow,

            chat_user: Color::White,
            chat_ai: Color::LightGreen,

            cost_series: Color::LightCyan,
            carbon_series: Color::LightGreen,

            badge_fg_dark: Color::Black,
        }
    }

    /// Color for a carbon status pill
    pub const fn status_color(&self, status: CarbonStatus) -> Color {
        match status {
            CarbonStatus::Optimized => self.optimized,
            CarbonStatus::Overprovisioned => self.overprovisioned,
            CarbonStatus::HighCarbon => self.high_carbon,
        }
    }

    /// Palette for the carbon summary breakdown
    pub fn chart_palette(&self) -> [Color; 4] {
        [
            self.carbon_series,
            self.secondary,
            self.overprovisioned,
            Color::Rgb(168, 85, 247),
        ]
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark_const());

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Const dark theme for static initialization
    const fn dark_const() -> Self {
        Self {
            colors: ColorScheme::dark_const(),
            name: "dark",
        }
    }

    pub const fn dark() -> Self {
        Self::dark_const()
    }

    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    THEME.read().unwrap_or_else(PoisonError::into_inner).name
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    /// Panel title style
    pub fn section_title() -> Style {
        Style::default().fg(colors().text).bold()
    }

    /// Muted/secondary text style
    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Small uppercase label style
    pub fn label() -> Style {
        Style::default().fg(colors().muted)
    }

    /// Value text style (for data values)
    pub fn value() -> Style {
        Style::default().fg(colors().text).bold()
    }

    /// Border style (unfocused)
    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    /// Keyboard shortcut style
    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    /// Shortcut description style
    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Page-specific footer hints
pub struct FooterHints;

impl FooterHints {
    /// Get hints for a specific page
    pub fn for_page(page: PageId) -> Vec<(&'static str, &'static str)> {
        let mut hints = Self::global();

        match page {
            PageId::Dashboard => hints.insert(0, ("1-4", "jump")),
            PageId::Optimize => hints.insert(0, ("Shift+Tab", "back")),
            PageId::Query => hints.insert(0, ("h/l", "prev/next")),
            PageId::Settings => hints.insert(0, ("1", "dashboard")),
        }

        hints
    }

    /// Global hints (always shown)
    pub fn global() -> Vec<(&'static str, &'static str)> {
        vec![("Tab", "switch"), ("T", "theme"), ("?", "help"), ("q", "quit")]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        assert_eq!(Theme::from_name("light").name, "light");
        assert_eq!(Theme::from_name("HC").name, "high-contrast");
        assert_eq!(Theme::from_name("whatever").name, "dark");
    }

    #[test]
    fn test_theme_rotation() {
        let theme = Theme::dark();
        let theme = theme.next();
        assert_eq!(theme.name, "light");
        let theme = theme.next();
        assert_eq!(theme.name, "high-contrast");
        assert_eq!(theme.next().name, "dark");
    }

    #[test]
    fn test_status_colors_are_distinct() {
        let scheme = ColorScheme::dark();
        let optimized = scheme.status_color(CarbonStatus::Optimized);
        assert_ne!(optimized, scheme.status_color(CarbonStatus::Overprovisioned));
        assert_ne!(optimized, scheme.status_color(CarbonStatus::HighCarbon));
    }

    #[test]
    fn test_footer_hints_lead_with_page_hint() {
        let hints = FooterHints::for_page(PageId::Settings);
        assert_eq!(hints[0], ("1", "dashboard"));
        assert_eq!(hints.len(), FooterHints::global().len() + 1);

        let spans = render_footer_hints(&hints);
        assert_eq!(spans[0].content, "[1]");
    }

    #[test]
    fn test_footer_hints_never_repeat_a_key() {
        for page in PageId::ALL {
            let hints = FooterHints::for_page(page);
            for (i, (key, _)) in hints.iter().enumerate() {
                assert!(
                    hints[i + 1..].iter().all(|(other, _)| other != key),
                    "{page}: key {key} listed twice"
                );
            }
        }
    }
}
