//! Dashboard page - agents, account signals, services and chat at a glance.

use super::render_chat_lines;
use crate::data::{
    ACCOUNT_STATS, ACTIVE_AGENTS, CARBON_SUMMARY, CHAT_FOOTER, CHAT_HISTORY, SAVINGS_SPARK,
    SERVICE_INSIGHTS,
};
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::{badge, panel, status_pill, HorizontalBar};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Paragraph, Row, Table, Wrap},
};

pub fn render_dashboard(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(38),
            Constraint::Percentage(32),
        ])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Active agents
            Constraint::Length(5), // Account overview
            Constraint::Length(6), // Carbon summary
        ])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(9)])
        .split(columns[2]);

    render_active_agents(frame, left[0]);
    render_account_overview(frame, left[1]);
    render_carbon_summary(frame, left[2]);
    render_service_insights(frame, columns[1]);
    render_agent_chat(frame, right[0]);
    render_impact_chart(frame, right[1]);
}

fn render_active_agents(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let mut lines = vec![Line::styled(
        "Real-time status across the automation suite",
        Styles::text_muted(),
    )];

    for agent in &ACTIVE_AGENTS {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(agent.name, Styles::value()),
            Span::raw("  "),
            status_pill(agent.status),
        ]));
        lines.push(Line::styled(agent.detail, Styles::text_muted()));
        lines.push(Line::styled(
            format!("⛁ Response {}", agent.latency),
            Style::default().fg(scheme.muted),
        ));
    }

    let para = Paragraph::new(lines)
        .block(panel("Active Agents"))
        .wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}

fn render_account_overview(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let lines: Vec<Line> = ACCOUNT_STATS
        .iter()
        .map(|stat| {
            Line::from(vec![
                Span::styled(format!("{:<16}", stat.label.to_uppercase()), Styles::label()),
                Span::styled(format!("{:>9} ", stat.value), Styles::value()),
                Span::styled(stat.change, Style::default().fg(scheme.success)),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(panel("Account Overview")),
        area,
    );
}

fn render_carbon_summary(frame: &mut Frame, area: Rect) {
    let block = panel("Carbon Summary");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let palette = colors().chart_palette();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); CARBON_SUMMARY.len()])
        .split(inner);

    for ((segment, row), color) in CARBON_SUMMARY.iter().zip(rows.iter()).zip(palette) {
        let bar = HorizontalBar::new(segment.name, u64::from(segment.value), 100)
            .color(color)
            .suffix("%");
        frame.render_widget(bar, *row);
    }
}

fn render_service_insights(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let header = Row::new(["SERVICE", "INSTANCES", "COST", "CARBON"])
        .style(Styles::label())
        .bottom_margin(1);

    let rows = SERVICE_INSIGHTS.iter().map(|row| {
        Row::new(vec![
            Line::styled(row.service, Style::default().fg(scheme.text)),
            Line::styled(row.instances.to_string(), Styles::text_muted()),
            Line::styled(row.cost, Styles::text_muted()),
            Line::from(status_pill(row.carbon)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(36),
            Constraint::Percentage(16),
            Constraint::Percentage(16),
            Constraint::Percentage(32),
        ],
    )
    .header(header)
    .block(
        panel("Service Insights")
            .title(Line::from(badge("Realtime", scheme.primary)).right_aligned())
            .title_bottom(Line::styled(
                " Live posture across managed services ",
                Styles::text_muted(),
            )),
    )
    .column_spacing(1);

    frame.render_widget(table, area);
}

fn render_agent_chat(frame: &mut Frame, area: Rect) {
    let block = panel("Agent Chat").title_bottom(Line::styled(
        " Secure channel ",
        Styles::text_muted(),
    ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(inner);

    let transcript = Paragraph::new(render_chat_lines(&CHAT_HISTORY)).wrap(Wrap { trim: true });
    frame.render_widget(transcript, chunks[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    for (card, rect) in CHAT_FOOTER.iter().zip(cards.iter()) {
        let lines = vec![
            Line::styled(card.label.to_uppercase(), Styles::label()),
            Line::styled(card.value, Styles::value()),
        ];
        frame.render_widget(Paragraph::new(lines), *rect);
    }
}

fn render_impact_chart(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let block = panel("Carbon vs Cost Impact")
        .title(Line::styled(" Last 5 days ", Styles::text_muted()).right_aligned());

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(2)
        .bar_gap(0)
        .group_gap(2)
        .value_style(Style::default().fg(scheme.badge_fg_dark));

    for point in &SAVINGS_SPARK {
        let group = BarGroup::default()
            .label(Line::from(point.day))
            .bars(&[
                Bar::default()
                    .value(point.cost)
                    .style(Style::default().fg(scheme.cost_series)),
                Bar::default()
                    .value(point.carbon)
                    .style(Style::default().fg(scheme.carbon_series)),
            ]);
        chart = chart.data(group);
    }

    frame.render_widget(chart, area);
}
