//! Reusable widgets and layout helpers for the dashboard views.

mod bars;

pub use bars::HorizontalBar;

use crate::data::CarbonStatus;
use crate::tui::theme::{colors, Styles};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

/// Rounded, titled panel used by every card on every page.
pub fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(format!(" {title} "), Styles::section_title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::border())
}

/// Colored pill showing a carbon status, e.g. `● High Carbon`.
pub fn status_pill(status: CarbonStatus) -> Span<'static> {
    let color = colors().status_color(status);
    Span::styled(format!("● {}", status.label()), Style::default().fg(color))
}

/// Rounded badge with accent text.
pub fn badge(text: &str, color: Color) -> Span<'static> {
    Span::styled(format!("( {text} )"), Style::default().fg(color))
}

/// Helper function to create a centered rectangle.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Truncate a string with ellipsis, using Unicode display width for accuracy.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;
    use unicode_width::UnicodeWidthStr;

    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut width = 0;
    let mut truncated: String = s
        .chars()
        .take_while(|ch| {
            let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
            if width + w > max_width - 3 {
                return false;
            }
            width += w;
            true
        })
        .collect();
    truncated.push_str("...");
    truncated
}

/// Check if terminal meets minimum size requirements.
pub const fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let lines = vec![
        Line::styled("Terminal too small", Style::default().fg(scheme.warning).bold()),
        Line::from(""),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(
                format!("{}x{}", area.width, area.height),
                Style::default().fg(scheme.text),
            ),
        ]),
        Line::from(vec![
            Span::raw("Required: "),
            Span::styled(
                format!("{MIN_WIDTH}x{MIN_HEIGHT}"),
                Style::default().fg(scheme.success),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("agentcore-observer", 40), "agentcore-observer");
        assert_eq!(truncate_str("arn:aws:kinesis:us-west-2", 10), "arn:aws...");
        assert_eq!(truncate_str("abcdef", 3), "...");
    }

    #[test]
    fn test_check_terminal_size() {
        assert!(check_terminal_size(80, 24).is_ok());
        assert_eq!(check_terminal_size(79, 24), Err((MIN_WIDTH, MIN_HEIGHT)));
        assert!(check_terminal_size(120, 10).is_err());
    }

    #[test]
    fn test_status_pill_label() {
        assert_eq!(status_pill(CarbonStatus::HighCarbon).content, "● High Carbon");
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 50, outer);
        assert!(inner.width <= 60 && inner.height <= 20);
        assert!(outer.contains(inner.as_position()));
    }
}
