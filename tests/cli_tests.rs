//! Tests for the non-interactive CLI handlers.

use agent_dashboard::cli::{run_pages, run_show, OutputFormat};

fn capture(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
    let mut buf = Vec::new();
    f(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_pages_json() {
    let out = capture(|w| run_pages(w, OutputFormat::Json));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["page"], "dashboard");
    assert_eq!(items[0]["label"], "Dashboard");
    assert_eq!(items[3]["shortcut"], "4");
}

#[test]
fn test_show_dashboard_json() {
    let out = capture(|w| run_show(w, "dashboard", OutputFormat::Json));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["page"], "dashboard");
    assert_eq!(json["agents"].as_array().unwrap().len(), 3);
    assert_eq!(json["savings"].as_array().unwrap().len(), 5);
}

#[test]
fn test_show_optimize_json() {
    let out = capture(|w| run_show(w, "optimize", OutputFormat::Json));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        json["recommendations"][0]["title"],
        "Rightsize EC2 G5 Instances"
    );
}

#[test]
fn test_show_settings_text() {
    let out = capture(|w| run_show(w, "Settings", OutputFormat::Text));
    assert!(out.starts_with("Settings\n========\n"));
    assert!(out.contains("arn:aws:kinesis:us-west-2:stream/agentcore"));
    assert!(out.contains("Operational Policies"));
}

#[test]
fn test_show_unknown_page_fails() {
    let mut buf = Vec::new();
    let err = run_show(&mut buf, "reports", OutputFormat::Text).unwrap_err();
    assert!(err.to_string().contains("reports"));
}
