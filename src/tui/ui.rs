//! Shell rendering: sidebar, header, page body, footer and overlays.

use super::app::DashboardApp;
use super::events::{handle_key_event, handle_mouse_event, Event, EventHandler};
use super::theme::{colors, current_theme_name, render_footer_hints, FooterHints, Styles};
use super::views;
use super::widgets::{badge, centered_rect, check_terminal_size, render_size_warning};
use crate::data::{BRAND_EYEBROW, BRAND_NAME, HEADER_BADGES, HEADER_EYEBROW, SYSTEM_HEALTH};
use crate::navigation::NAV_ITEMS;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use std::io::{self, stdout, Stdout};
use std::panic;
use std::sync::Once;
use std::time::Duration;

const SIDEBAR_WIDTH: u16 = 26;

/// Run the dashboard until the user quits.
///
/// The terminal is restored before returning, also when setup or the loop
/// fails and when the process panics.
pub fn run_tui(app: &mut DashboardApp, tick_rate: Duration) -> io::Result<()> {
    install_panic_hook();
    let _guard = TerminalGuard::enter(app.mouse_enabled)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    tracing::debug!(page = %app.current_page(), "starting dashboard");
    event_loop(&mut terminal, app, tick_rate)
}

/// Raw mode and alternate screen, undone on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(mouse_enabled: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on every early return restores through Drop
        let guard = Self;
        let mut out = stdout();
        if mouse_enabled {
            execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(out, EnterAlternateScreen)?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Best-effort terminal reset; safe to call more than once.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
}

/// Restore the terminal before the default panic message is printed.
fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            restore_terminal();
            previous(info);
        }));
    });
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut DashboardApp,
    tick_rate: Duration,
) -> io::Result<()> {
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(_, _) => {}
            Event::Tick => app.on_tick(),
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Draw one frame of the dashboard.
pub fn render(frame: &mut Frame, app: &mut DashboardApp) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
        .split(area);

    render_sidebar(frame, columns[0], app);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Page body
            Constraint::Length(1), // Footer
        ])
        .split(columns[1]);

    render_header(frame, main[0], app);
    views::render_page(frame, main[1], app.current_page());
    render_footer(frame, main[2], app);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_sidebar(frame: &mut Frame, area: Rect, app: &mut DashboardApp) {
    let scheme = colors();
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),                      // Brand
            Constraint::Length(NAV_ITEMS.len() as u16), // Navigation
            Constraint::Min(0),
            Constraint::Length(4), // System health
        ])
        .split(inner);

    let brand = vec![
        Line::from(""),
        Line::styled(format!(" {BRAND_EYEBROW}"), Styles::label()),
        Line::styled(
            format!(" {BRAND_NAME}"),
            Style::default().fg(scheme.text).bold(),
        ),
    ];
    frame.render_widget(Paragraph::new(brand), chunks[0]);

    let nav: Vec<Line> = NAV_ITEMS
        .iter()
        .map(|item| {
            let text = format!(" {} {}  {:<10}", item.shortcut, item.icon, item.label);
            if app.selector().is_active(item.page) {
                Line::styled(
                    text,
                    Style::default()
                        .fg(scheme.badge_fg_dark)
                        .bg(scheme.primary)
                        .bold(),
                )
            } else {
                Line::styled(text, Style::default().fg(scheme.text_muted))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(nav), chunks[1]);
    app.nav_area = chunks[1];

    let health = Paragraph::new(vec![
        Line::styled("SYSTEM HEALTH", Styles::label()),
        Line::from(vec![
            Span::styled(format!("{} ", SYSTEM_HEALTH.label), Styles::text_muted()),
            Span::styled(SYSTEM_HEALTH.value, Style::default().fg(scheme.success).bold()),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Styles::border()),
    );
    frame.render_widget(health, chunks[3]);
}

fn render_header(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let scheme = colors();
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::styled(format!(" {HEADER_EYEBROW}"), Styles::label())),
        rows[0],
    );

    let title = Line::styled(
        format!(" {}", app.current_title()),
        Style::default().fg(scheme.text).bold(),
    );
    frame.render_widget(Paragraph::new(title), rows[1]);

    let badge_colors = [scheme.optimized, scheme.accent];
    let mut badges: Vec<Span> = Vec::new();
    for (text, color) in HEADER_BADGES.iter().zip(badge_colors) {
        badges.push(badge(text, color));
        badges.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(badges)).alignment(Alignment::Right),
        rows[1],
    );
}

fn render_footer(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    if let Some(ref msg) = app.status_message {
        let accent = colors().accent;
        let status_line = Line::from(vec![
            Span::styled("ℹ ", Style::default().fg(accent)),
            Span::styled(msg.as_str(), Style::default().fg(accent).bold()),
        ]);
        frame.render_widget(
            Paragraph::new(status_line).alignment(Alignment::Center),
            area,
        );
        return;
    }

    let hints = FooterHints::for_page(app.current_page());
    let footer = Paragraph::new(Line::from(render_footer_hints(&hints)))
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors().text_muted));
    frame.render_widget(footer, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let popup_area = centered_rect(50, 60, area);
    frame.render_widget(Clear, popup_area);

    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {k:<15}"), Style::default().fg(scheme.accent)),
            Span::styled(desc, Style::default().fg(scheme.text)),
        ])
    };

    let help_text = vec![
        Line::styled(
            "━━━ Keyboard Shortcuts ━━━",
            Style::default().fg(scheme.accent).bold(),
        ),
        Line::from(""),
        key("1-4", "Jump to page"),
        key("Tab/Shift+Tab", "Next / previous page"),
        key("T", "Cycle theme"),
        key("?", "Toggle this help"),
        key("q/Esc", "Quit"),
        key("Ctrl+C", "Quit immediately"),
        Line::from(""),
        Line::styled(
            format!("  Theme: {}", current_theme_name()),
            Styles::text_muted(),
        ),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(scheme.border_focused)),
    );
    frame.render_widget(help, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_is_repeatable_without_a_terminal() {
        restore_terminal();
        restore_terminal();
    }

    #[test]
    fn test_panic_hook_installs_once_and_keeps_unwinding() {
        install_panic_hook();
        install_panic_hook();
        let result = panic::catch_unwind(|| panic!("boom"));
        assert!(result.is_err());
    }
}
