//! Literal dashboard content.

use super::types::{
    AccountStat, Agent, CarbonSegment, CarbonStatus, ChatMessage, ConnectionSetting, InfoCard,
    Policy, Recommendation, SavingsPoint, Sender, ServiceInsight,
};

pub const BRAND_EYEBROW: &str = "AWS";
pub const BRAND_NAME: &str = "Agent System";
pub const HEADER_EYEBROW: &str = "AWS Agent System";
pub const HEADER_BADGES: [&str; 2] = ["Carbon Neutral Trajectory", "Agent Mesh v2.4"];
pub const SYSTEM_HEALTH: InfoCard = InfoCard {
    label: "Signals",
    value: "Stable",
};

pub const ACTIVE_AGENTS: [Agent; 3] = [
    Agent {
        name: "Compute Optimizer",
        status: CarbonStatus::Optimized,
        detail: "Auto rightsizing EC2 fleet",
        latency: "120ms",
    },
    Agent {
        name: "Carbon Sentinel",
        status: CarbonStatus::HighCarbon,
        detail: "Monitoring GPU workloads",
        latency: "210ms",
    },
    Agent {
        name: "Savings Planner",
        status: CarbonStatus::Overprovisioned,
        detail: "Reserved instance coverage",
        latency: "98ms",
    },
];

pub const ACCOUNT_STATS: [AccountStat; 3] = [
    AccountStat {
        label: "Monthly Spend",
        value: "$42.8K",
        change: "-4.2%",
    },
    AccountStat {
        label: "Carbon Score",
        value: "82 / 100",
        change: "+6.0%",
    },
    AccountStat {
        label: "Regions Covered",
        value: "9",
        change: "+2",
    },
];

pub const CARBON_SUMMARY: [CarbonSegment; 4] = [
    CarbonSegment {
        name: "Compute",
        value: 45,
    },
    CarbonSegment {
        name: "Storage",
        value: 23,
    },
    CarbonSegment {
        name: "Networking",
        value: 18,
    },
    CarbonSegment {
        name: "AI Ops",
        value: 14,
    },
];

pub const SERVICE_INSIGHTS: [ServiceInsight; 4] = [
    ServiceInsight {
        service: "EC2 AutoScaler",
        instances: 42,
        cost: "$12.4K",
        carbon: CarbonStatus::Optimized,
    },
    ServiceInsight {
        service: "ECS Batch Workers",
        instances: 18,
        cost: "$6.1K",
        carbon: CarbonStatus::Overprovisioned,
    },
    ServiceInsight {
        service: "SageMaker Training",
        instances: 9,
        cost: "$9.6K",
        carbon: CarbonStatus::HighCarbon,
    },
    ServiceInsight {
        service: "RDS Aurora",
        instances: 12,
        cost: "$3.2K",
        carbon: CarbonStatus::Optimized,
    },
];

pub const CHAT_HISTORY: [ChatMessage; 4] = [
    ChatMessage {
        sender: Sender::User,
        message: "Show the latest carbon trends for GPU workloads.",
        timestamp: "09:15",
    },
    ChatMessage {
        sender: Sender::Ai,
        message: "GPU clusters in us-west-2 are trending +12% carbon this week. I recommend shifting inference jobs to the new Graviton pool.",
        timestamp: "09:16",
    },
    ChatMessage {
        sender: Sender::User,
        message: "Queue the migration playbook for midnight UTC.",
        timestamp: "09:17",
    },
    ChatMessage {
        sender: Sender::Ai,
        message: "Confirmed. I will brief the Optimize agent and report back at 21:00 UTC.",
        timestamp: "09:17",
    },
];

pub const CHAT_FOOTER: [InfoCard; 2] = [
    InfoCard {
        label: "Next Action",
        value: "Migration queued · 21:00 UTC",
    },
    InfoCard {
        label: "Channel",
        value: "Optimize ↔ ChatOps",
    },
];

pub const QUERY_PLACEHOLDER: &str = "Type a prompt or sync logs to query live signals…";

pub const OPTIMIZE_RECOMMENDATIONS: [Recommendation; 4] = [
    Recommendation {
        title: "Rightsize EC2 G5 Instances",
        description: "Switch 12 inference nodes to g5g.4xlarge for 28% carbon savings.",
        savings: "$3,200",
        carbon: "1.2 tCO₂e",
    },
    Recommendation {
        title: "Tiered S3 Storage",
        description: "Move cold analytics data into Glacier Instant Retrieval.",
        savings: "$1,140",
        carbon: "0.7 tCO₂e",
    },
    Recommendation {
        title: "ECS Autoscaling Policy",
        description: "Tighten off-peak scaling window for queue processors.",
        savings: "$2,480",
        carbon: "0.9 tCO₂e",
    },
    Recommendation {
        title: "RDS Snapshot Lifecycle",
        description: "Purge stale snapshots older than 45 days.",
        savings: "$760",
        carbon: "0.4 tCO₂e",
    },
];

pub const SAVINGS_SPARK: [SavingsPoint; 5] = [
    SavingsPoint {
        day: "Mon",
        cost: 9,
        carbon: 4,
    },
    SavingsPoint {
        day: "Tue",
        cost: 11,
        carbon: 5,
    },
    SavingsPoint {
        day: "Wed",
        cost: 8,
        carbon: 6,
    },
    SavingsPoint {
        day: "Thu",
        cost: 12,
        carbon: 7,
    },
    SavingsPoint {
        day: "Fri",
        cost: 10,
        carbon: 6,
    },
];

pub const CONNECTION_PROFILE: [ConnectionSetting; 3] = [
    ConnectionSetting {
        label: "IAM Role",
        value: "agentcore-observer",
    },
    ConnectionSetting {
        label: "EventStream",
        value: "arn:aws:kinesis:us-west-2:stream/agentcore",
    },
    ConnectionSetting {
        label: "ChatOps Relay",
        value: "matrix://ops.aws/internal",
    },
];

pub const OPERATIONAL_POLICIES: [Policy; 3] = [
    Policy {
        heading: "Change Window",
        summary: "Weekdays · 20:00-04:00 UTC",
        note: "Critical mitigations may override with manual approval.",
    },
    Policy {
        heading: "Escalation Matrix",
        summary: "PagerDuty · FinOps · Sustainability Guild",
        note: "24/7 monitoring on all agent-initiated workflows.",
    },
    Policy {
        heading: "Data Residency",
        summary: "US & EU regions · anonymized telemetry",
        note: "PII is redacted before entering the Agent System.",
    },
];
