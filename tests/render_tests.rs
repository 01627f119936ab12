//! Rendering tests against ratatui's `TestBackend`.

use agent_dashboard::tui::{handle_key_event, handle_mouse_event, render, DashboardApp};
use agent_dashboard::PageId;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, Terminal};

fn draw(app: &mut DashboardApp, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| render(frame, app)).unwrap();

    let buf = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn draw_page(page: PageId) -> String {
    let mut app = DashboardApp::new(page);
    draw(&mut app, 120, 40)
}

#[test]
fn test_shell_shows_brand_header_and_nav() {
    let text = draw_page(PageId::Dashboard);
    assert!(text.contains("Agent System"));
    assert!(text.contains("AWS Agent System"));
    assert!(text.contains("Carbon Neutral Trajectory"));
    assert!(text.contains("Agent Mesh v2.4"));
    assert!(text.contains("SYSTEM HEALTH"));
    for label in ["Dashboard", "Optimize", "Query", "Settings"] {
        assert!(text.contains(label), "missing nav entry {label}");
    }
}

#[test]
fn test_dashboard_page() {
    let text = draw_page(PageId::Dashboard);
    assert!(text.contains("Active Agents"));
    assert!(text.contains("Compute Optimizer"));
    assert!(text.contains("Account Overview"));
    assert!(text.contains("Carbon Summary"));
    assert!(text.contains("Service Insights"));
    assert!(text.contains("Agent Chat"));
}

#[test]
fn test_optimize_page() {
    let text = draw_page(PageId::Optimize);
    assert!(text.contains("Optimization Playbooks"));
    assert!(text.contains("Rightsize EC2 G5 Instances"));
    assert!(text.contains("Cost ↓"));
    assert!(text.contains("Carbon ↓"));
}

#[test]
fn test_query_page() {
    let text = draw_page(PageId::Query);
    assert!(text.contains("Agent Query Console"));
    assert!(text.contains("Ask the Agent System anything"));
}

#[test]
fn test_settings_page() {
    let text = draw_page(PageId::Settings);
    assert!(text.contains("Connection Profile"));
    assert!(text.contains("agentcore-observer"));
    assert!(text.contains("Operational Policies"));
}

#[test]
fn test_small_terminal_shows_size_warning() {
    let mut app = DashboardApp::default();
    let text = draw(&mut app, 60, 20);
    assert!(text.contains("Terminal too small"));
    assert!(!text.contains("Active Agents"));
}

#[test]
fn test_help_overlay_renders() {
    let mut app = DashboardApp::default();
    handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE));
    let text = draw(&mut app, 120, 40);
    assert!(text.contains("Keyboard Shortcuts"));
}

#[test]
fn test_key_press_changes_rendered_page() {
    let mut app = DashboardApp::default();
    handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE));
    let text = draw(&mut app, 120, 40);
    assert!(text.contains("Connection Profile"));
    assert!(!text.contains("Active Agents"));
}

#[test]
fn test_click_on_drawn_sidebar_row() {
    let mut app = DashboardApp::default();
    draw(&mut app, 120, 40);

    // Rows are laid out in navigation order; the third one is Query
    let nav_top = (0..40)
        .find(|&row| app_hit(&app, row) == Some(PageId::Dashboard))
        .unwrap();
    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 2,
        row: nav_top + 2,
        modifiers: KeyModifiers::NONE,
    };
    handle_mouse_event(&mut app, click);
    assert_eq!(app.current_page(), PageId::Query);
}

fn app_hit(app: &DashboardApp, row: u16) -> Option<PageId> {
    app.nav_hit(2, row)
}
