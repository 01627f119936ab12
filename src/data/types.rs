//! Record types for the static dashboard tables.

use serde::Serialize;
use std::fmt;

/// Carbon posture reported for an agent or a managed service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CarbonStatus {
    Optimized,
    Overprovisioned,
    #[serde(rename = "High Carbon")]
    HighCarbon,
}

impl CarbonStatus {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Optimized => "Optimized",
            Self::Overprovisioned => "Overprovisioned",
            Self::HighCarbon => "High Carbon",
        }
    }
}

impl fmt::Display for CarbonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// An automation agent shown in the "Active Agents" panel.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Agent {
    pub name: &'static str,
    pub status: CarbonStatus,
    pub detail: &'static str,
    pub latency: &'static str,
}

/// A headline account metric.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AccountStat {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

/// Share of the carbon footprint attributed to one category, in percent.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CarbonSegment {
    pub name: &'static str,
    pub value: u8,
}

/// One row of the "Service Insights" table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceInsight {
    pub service: &'static str,
    pub instances: u32,
    pub cost: &'static str,
    pub carbon: CarbonStatus,
}

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Ai => "Agent",
        }
    }
}

/// A line of the agent chat transcript.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub message: &'static str,
    pub timestamp: &'static str,
}

/// An optimization playbook card.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
    pub savings: &'static str,
    pub carbon: &'static str,
}

/// A day of the cost/carbon impact chart.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SavingsPoint {
    pub day: &'static str,
    pub cost: u64,
    pub carbon: u64,
}

/// A labelled value in the connection profile. Display only.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConnectionSetting {
    pub label: &'static str,
    pub value: &'static str,
}

/// An operational policy card.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Policy {
    pub heading: &'static str,
    pub summary: &'static str,
    pub note: &'static str,
}

/// A small labelled card, used under the chat panel.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InfoCard {
    pub label: &'static str,
    pub value: &'static str,
}
