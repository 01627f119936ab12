//! Static dashboard data.
//!
//! Every number and string the dashboard shows lives here as a literal
//! constant. Nothing is fetched or computed; the tables are grouped per
//! page by [`page_content`] so renderers and the non-interactive `show`
//! command read from the same source.

mod catalog;
mod types;

pub use catalog::*;
pub use types::{
    AccountStat, Agent, CarbonSegment, CarbonStatus, ChatMessage, ConnectionSetting, InfoCard,
    Policy, Recommendation, SavingsPoint, Sender, ServiceInsight,
};

use crate::navigation::PageId;
use serde::Serialize;

/// The data a single page displays.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "page", rename_all = "lowercase")]
pub enum PageContent {
    Dashboard {
        agents: &'static [Agent],
        account: &'static [AccountStat],
        carbon_summary: &'static [CarbonSegment],
        services: &'static [ServiceInsight],
        chat: &'static [ChatMessage],
        chat_footer: &'static [InfoCard],
        savings: &'static [SavingsPoint],
    },
    Optimize {
        recommendations: &'static [Recommendation],
    },
    Query {
        chat: &'static [ChatMessage],
        placeholder: &'static str,
    },
    Settings {
        connection_profile: &'static [ConnectionSetting],
        policies: &'static [Policy],
    },
}

/// Look up the static content for `page`.
#[must_use]
pub const fn page_content(page: PageId) -> PageContent {
    match page {
        PageId::Dashboard => PageContent::Dashboard {
            agents: &ACTIVE_AGENTS,
            account: &ACCOUNT_STATS,
            carbon_summary: &CARBON_SUMMARY,
            services: &SERVICE_INSIGHTS,
            chat: &CHAT_HISTORY,
            chat_footer: &CHAT_FOOTER,
            savings: &SAVINGS_SPARK,
        },
        PageId::Optimize => PageContent::Optimize {
            recommendations: &OPTIMIZE_RECOMMENDATIONS,
        },
        PageId::Query => PageContent::Query {
            chat: &CHAT_HISTORY,
            placeholder: QUERY_PLACEHOLDER,
        },
        PageId::Settings => PageContent::Settings {
            connection_profile: &CONNECTION_PROFILE,
            policies: &OPERATIONAL_POLICIES,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carbon_summary_is_a_full_breakdown() {
        let total: u32 = CARBON_SUMMARY.iter().map(|s| u32::from(s.value)).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_chat_alternates_senders() {
        for pair in CHAT_HISTORY.chunks(2) {
            assert_eq!(pair[0].sender, Sender::User);
            assert_eq!(pair[1].sender, Sender::Ai);
        }
    }

    #[test]
    fn test_page_content_matches_page() {
        assert!(matches!(
            page_content(PageId::Dashboard),
            PageContent::Dashboard { .. }
        ));
        assert!(matches!(
            page_content(PageId::Optimize),
            PageContent::Optimize { .. }
        ));
        assert!(matches!(
            page_content(PageId::Query),
            PageContent::Query { .. }
        ));
        assert!(matches!(
            page_content(PageId::Settings),
            PageContent::Settings { .. }
        ));
    }

    #[test]
    fn test_page_content_serializes_with_tag() {
        let json = serde_json::to_value(page_content(PageId::Settings)).unwrap();
        assert_eq!(json["page"], "settings");
        assert_eq!(json["connection_profile"][0]["value"], "agentcore-observer");

        let json = serde_json::to_value(page_content(PageId::Dashboard)).unwrap();
        assert_eq!(json["services"][2]["carbon"], "High Carbon");
        assert_eq!(json["chat"][1]["sender"], "ai");
    }
}
