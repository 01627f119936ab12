//! Event handling for the dashboard.

use super::app::DashboardApp;
use super::theme::toggle_theme;
use crate::config::TuiPreferences;
use crate::navigation::PageId;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Terminal events.
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Polls crossterm on a background thread and forwards events over a channel.
///
/// The poller stops on the first terminal read error; [`EventHandler::next`]
/// then returns an error instead of blocking.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// Start polling, emitting `Event::Tick` whenever `tick_rate` passes without input.
    pub fn new(tick_rate: Duration) -> Self {
        Self::with_source(tick_rate, read_crossterm)
    }

    /// Start polling an arbitrary event source.
    ///
    /// `source` waits up to the tick rate and yields `None` when nothing
    /// arrived in time.
    fn with_source<F>(tick_rate: Duration, mut source: F) -> Self
    where
        F: FnMut(Duration) -> io::Result<Option<Event>> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || loop {
            let event = match source(tick_rate) {
                Ok(Some(event)) => event,
                Ok(None) => Event::Tick,
                Err(e) => {
                    tracing::warn!("Terminal event source failed: {e}");
                    break;
                }
            };
            if tx.send(event).is_err() {
                break;
            }
        });

        Self { rx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx
            .recv()
            .map_err(|_| io::Error::other("terminal event source closed"))
    }
}

fn read_crossterm(timeout: Duration) -> io::Result<Option<Event>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let event = match event::read()? {
        CrosstermEvent::Key(key) => Some(Event::Key(key)),
        CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
        CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
        _ => None,
    };
    Ok(event)
}

/// Handle key events for `DashboardApp`.
pub fn handle_key_event(app: &mut DashboardApp, key: KeyEvent) {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.has_overlay() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => app.close_overlays(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('T') => cycle_theme(app),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_page(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.prev_page(),
        KeyCode::Char(c) => {
            if let Some(page) = PageId::from_shortcut(c) {
                app.select_page(page);
            }
        }
        _ => {}
    }
}

/// Handle mouse events for `DashboardApp`.
pub fn handle_mouse_event(app: &mut DashboardApp, mouse: MouseEvent) {
    if !app.mouse_enabled {
        return;
    }

    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if app.has_overlay() {
            app.close_overlays();
            return;
        }
        if let Some(page) = app.nav_hit(mouse.column, mouse.row) {
            app.select_page(page);
        }
    }
}

fn cycle_theme(app: &mut DashboardApp) {
    let name = toggle_theme();
    let prefs = TuiPreferences {
        theme: name.to_string(),
    };
    match prefs.save() {
        Ok(()) => app.set_status_message(format!("Theme: {name}")),
        Err(e) => {
            tracing::warn!("Failed to save theme preference: {e}");
            app.set_status_message(format!("Theme: {name} (not saved)"));
        }
    }
}
