//! Horizontal bar widget for percentage breakdowns.

use crate::tui::theme::colors;
use ratatui::{prelude::*, widgets::Widget};

/// A labelled horizontal bar filled in proportion to `value / max_value`.
pub struct HorizontalBar {
    label: String,
    value: u64,
    max_value: u64,
    color: Color,
    suffix: &'static str,
}

impl HorizontalBar {
    pub fn new(label: impl Into<String>, value: u64, max_value: u64) -> Self {
        Self {
            label: label.into(),
            value,
            max_value,
            color: colors().primary,
            suffix: "",
        }
    }

    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Unit appended to the value, e.g. `"%"`.
    pub const fn suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = suffix;
        self
    }

    /// Number of filled cells for a bar `width` cells wide.
    fn filled(&self, width: usize) -> usize {
        if self.max_value == 0 {
            return 0;
        }
        let filled = (self.value.min(self.max_value) as u128 * width as u128)
            / u128::from(self.max_value);
        filled as usize
    }
}

impl Widget for HorizontalBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 16 || area.height < 1 {
            return;
        }

        let label_width = 12.min(area.width as usize / 3);
        let count_width = 6;
        let bar_width = area.width as usize - label_width - count_width - 2;
        let filled = self.filled(bar_width);
        let scheme = colors();

        let label = super::truncate_str(&self.label, label_width);
        let line = Line::from(vec![
            Span::styled(
                format!("{label:<label_width$} "),
                Style::default().fg(scheme.text_muted),
            ),
            Span::styled("█".repeat(filled), Style::default().fg(self.color)),
            Span::styled(
                "░".repeat(bar_width - filled),
                Style::default().fg(scheme.muted),
            ),
            Span::styled(
                format!(" {:>4}{}", self.value, self.suffix),
                Style::default().fg(scheme.text).bold(),
            ),
        ]);

        buf.set_line(area.x, area.y, &line, area.width);
    }
}
