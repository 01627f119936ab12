//! Page renderers, one per [`PageId`].

mod dashboard;
mod optimize;
mod query;
mod settings;

pub use dashboard::render_dashboard;
pub use optimize::render_optimize;
pub use query::render_query;
pub use settings::render_settings;

use crate::data::{ChatMessage, Sender};
use crate::navigation::PageId;
use crate::tui::theme::colors;
use ratatui::prelude::*;

/// Render the body of `page` into `area`.
pub fn render_page(frame: &mut Frame, area: Rect, page: PageId) {
    match page {
        PageId::Dashboard => render_dashboard(frame, area),
        PageId::Optimize => render_optimize(frame, area),
        PageId::Query => render_query(frame, area),
        PageId::Settings => render_settings(frame, area),
    }
}

/// Chat transcript lines: user messages on the left, agent replies on the right.
pub(crate) fn render_chat_lines(messages: &[ChatMessage]) -> Vec<Line<'static>> {
    let scheme = colors();
    let mut lines = Vec::with_capacity(messages.len() * 3);

    for msg in messages {
        let (color, alignment) = match msg.sender {
            Sender::User => (scheme.chat_user, Alignment::Left),
            Sender::Ai => (scheme.chat_ai, Alignment::Right),
        };
        lines.push(Line::styled(msg.message, Style::default().fg(color)).alignment(alignment));
        lines.push(
            Line::styled(
                format!("{} · {}", msg.sender.label(), msg.timestamp),
                Style::default().fg(scheme.muted),
            )
            .alignment(alignment),
        );
        lines.push(Line::from(""));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CHAT_HISTORY;

    #[test]
    fn test_chat_lines_align_by_sender() {
        let lines = render_chat_lines(&CHAT_HISTORY);
        assert_eq!(lines.len(), CHAT_HISTORY.len() * 3);
        assert_eq!(lines[0].alignment, Some(Alignment::Left));
        assert_eq!(lines[3].alignment, Some(Alignment::Right));
        assert_eq!(lines[4].spans[0].content, "Agent · 09:16");
    }
}
