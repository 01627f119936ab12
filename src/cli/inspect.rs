//! Non-interactive inspection commands: `pages` and `show`.

use crate::data::{page_content, PageContent};
use crate::navigation::{PageId, NAV_ITEMS};
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::Write;

/// Output format for inspection commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// List the navigation entries.
pub fn run_pages(out: &mut impl Write, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &NAV_ITEMS)
                .context("failed to serialize pages")?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for item in &NAV_ITEMS {
                writeln!(
                    out,
                    "{}  {} {:<10} ({})",
                    item.shortcut,
                    item.icon,
                    item.label,
                    item.page.id()
                )?;
            }
        }
    }
    Ok(())
}

/// Print the static content of one page.
///
/// `page` is parsed like any navigation identifier; an unknown id is an error.
pub fn run_show(out: &mut impl Write, page: &str, format: OutputFormat) -> Result<()> {
    let page: PageId = page.parse()?;
    let content = page_content(page);
    tracing::debug!(page = %page, "showing page content");

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &content)
                .context("failed to serialize page content")?;
            writeln!(out)?;
        }
        OutputFormat::Text => write_text(out, page, &content)?,
    }
    Ok(())
}

fn write_text(out: &mut impl Write, page: PageId, content: &PageContent) -> std::io::Result<()> {
    writeln!(out, "{}", page.label())?;
    writeln!(out, "{}", "=".repeat(page.label().len()))?;

    match content {
        PageContent::Dashboard {
            agents,
            account,
            carbon_summary,
            services,
            chat,
            chat_footer,
            savings,
        } => {
            section(out, "Active Agents")?;
            for a in *agents {
                writeln!(out, "  {:<20} {:<16} {} ({})", a.name, a.status, a.detail, a.latency)?;
            }
            section(out, "Account Overview")?;
            for s in *account {
                writeln!(out, "  {:<16} {:>9}  {}", s.label, s.value, s.change)?;
            }
            section(out, "Carbon Summary")?;
            for c in *carbon_summary {
                writeln!(out, "  {:<12} {:>3}%", c.name, c.value)?;
            }
            section(out, "Service Insights")?;
            for s in *services {
                writeln!(
                    out,
                    "  {:<22} {:>3} instances  {:>6}  {}",
                    s.service, s.instances, s.cost, s.carbon
                )?;
            }
            section(out, "Agent Chat")?;
            for m in *chat {
                writeln!(out, "  [{}] {}: {}", m.timestamp, m.sender.label(), m.message)?;
            }
            for card in *chat_footer {
                writeln!(out, "  {}: {}", card.label, card.value)?;
            }
            section(out, "Carbon vs Cost Impact")?;
            for p in *savings {
                writeln!(out, "  {}  cost {:>3}  carbon {:>3}", p.day, p.cost, p.carbon)?;
            }
        }
        PageContent::Optimize { recommendations } => {
            section(out, "Optimization Playbooks")?;
            for r in *recommendations {
                writeln!(out, "  {}", r.title)?;
                writeln!(out, "    {}", r.description)?;
                writeln!(out, "    Cost ↓ {}  Carbon ↓ {}", r.savings, r.carbon)?;
            }
        }
        PageContent::Query { chat, placeholder } => {
            section(out, "Agent Query Console")?;
            for m in *chat {
                writeln!(out, "  [{}] {}: {}", m.timestamp, m.sender.label(), m.message)?;
            }
            writeln!(out, "  > {placeholder}")?;
        }
        PageContent::Settings {
            connection_profile,
            policies,
        } => {
            section(out, "Connection Profile")?;
            for s in *connection_profile {
                writeln!(out, "  {:<14} {}", s.label, s.value)?;
            }
            section(out, "Operational Policies")?;
            for p in *policies {
                writeln!(out, "  {}: {}", p.heading, p.summary)?;
                writeln!(out, "    {}", p.note)?;
            }
        }
    }
    Ok(())
}

fn section(out: &mut impl Write, title: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{title}")
}
