//! Query page - the agent chat console.

use super::render_chat_lines;
use crate::data::{CHAT_HISTORY, QUERY_PLACEHOLDER};
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::panel;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

pub fn render_query(frame: &mut Frame, area: Rect) {
    let block = panel("Agent Query Console");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Subtitle
            Constraint::Min(4),    // Transcript
            Constraint::Length(3), // Prompt
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "Ask the Agent System anything about your AWS footprint.",
            Styles::text_muted(),
        )),
        chunks[0],
    );

    let transcript = Paragraph::new(render_chat_lines(&CHAT_HISTORY)).wrap(Wrap { trim: true });
    frame.render_widget(transcript, chunks[1]);

    let scheme = colors();
    let prompt = Paragraph::new(Line::from(vec![
        Span::styled("✉ ", Style::default().fg(scheme.primary)),
        Span::styled(QUERY_PLACEHOLDER, Styles::text_muted()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Styles::border()),
    );
    frame.render_widget(prompt, chunks[2]);
}
