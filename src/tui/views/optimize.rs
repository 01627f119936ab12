//! Optimize page - cost and carbon playbooks.

use crate::data::{Recommendation, OPTIMIZE_RECOMMENDATIONS};
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::panel;
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

pub fn render_optimize(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(8)])
        .split(area);

    let intro = vec![
        Line::styled("Optimization Playbooks", Styles::section_title()),
        Line::styled(
            "Cost and carbon opportunities prioritized by the Optimize agent.",
            Styles::text_muted(),
        ),
    ];
    frame.render_widget(Paragraph::new(intro), chunks[0]);

    // Two cards per row
    let grid_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(chunks[1]);

    for (row_area, pair) in grid_rows.iter().zip(OPTIMIZE_RECOMMENDATIONS.chunks(2)) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row_area);

        for (item, cell) in pair.iter().zip(cells.iter()) {
            render_card(frame, *cell, item);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, item: &Recommendation) {
    let scheme = colors();
    let lines = vec![
        Line::styled(item.description, Styles::text_muted()),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" Cost ↓ {} ", item.savings),
                Style::default().fg(scheme.primary).bold(),
            ),
            Span::raw("  "),
            Span::styled(
                format!(" Carbon ↓ {} ", item.carbon),
                Style::default().fg(scheme.secondary).bold(),
            ),
        ]),
    ];

    let card = Paragraph::new(lines)
        .block(panel(item.title))
        .wrap(Wrap { trim: true });
    frame.render_widget(card, area);
}
