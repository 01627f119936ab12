//! Settings page - connection profile and operational policies.
//!
//! Every value here is a display string; nothing connects anywhere.

use crate::data::{CONNECTION_PROFILE, OPERATIONAL_POLICIES};
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::{panel, truncate_str};
use ratatui::{prelude::*, widgets::Paragraph};

pub fn render_settings(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_connection_profile(frame, columns[0]);
    render_policies(frame, columns[1]);
}

fn render_connection_profile(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let value_colors = [scheme.primary, scheme.secondary, scheme.accent];
    let block = panel("Connection Profile");
    let inner = block.inner(area);
    let label_width = 15;
    let value_width = usize::from(inner.width).saturating_sub(label_width);

    let mut lines = vec![
        Line::styled(
            "Secure federation to AWS services and chat endpoints.",
            Styles::text_muted(),
        ),
        Line::from(""),
    ];

    for (setting, color) in CONNECTION_PROFILE.iter().zip(value_colors) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<label_width$}", setting.label),
                Style::default().fg(scheme.text),
            ),
            Span::styled(
                truncate_str(setting.value, value_width),
                Style::default().fg(color),
            ),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_policies(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::styled(
            "Guardrails governing the autonomous agent network.",
            Styles::text_muted(),
        ),
        Line::from(""),
    ];

    for policy in &OPERATIONAL_POLICIES {
        lines.push(Line::styled(policy.heading.to_uppercase(), Styles::label()));
        lines.push(Line::styled(policy.summary, Styles::value()));
        lines.push(Line::styled(policy.note, Styles::text_muted()));
        lines.push(Line::from(""));
    }

    let para = Paragraph::new(lines)
        .block(panel("Operational Policies"))
        .wrap(ratatui::widgets::Wrap { trim: true });
    frame.render_widget(para, area);
}
