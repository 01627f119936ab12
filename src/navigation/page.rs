//! Page identifiers and the static navigation table.

use crate::error::DashboardError;
use schemars::JsonSchema;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four views the dashboard can display.
///
/// Serializes as the lowercase id. Deserialization accepts everything
/// [`FromStr`] does, plus a bare shortcut number such as `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    /// Agents, account stats, services and chat at a glance
    #[default]
    Dashboard,
    /// Cost and carbon recommendations
    Optimize,
    /// Agent chat console
    Query,
    /// Connection profile and operational policies
    Settings,
}

impl PageId {
    /// All pages in navigation order.
    pub const ALL: [Self; 4] = [Self::Dashboard, Self::Optimize, Self::Query, Self::Settings];

    /// Stable lowercase identifier used in config files and on the command line.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Optimize => "optimize",
            Self::Query => "query",
            Self::Settings => "settings",
        }
    }

    /// Display label shown in the sidebar and the page header.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Optimize => "Optimize",
            Self::Query => "Query",
            Self::Settings => "Settings",
        }
    }

    /// Glyph drawn next to the label in the sidebar.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Dashboard => "▦",
            Self::Optimize => "◔",
            Self::Query => "✉",
            Self::Settings => "⚙",
        }
    }

    /// Keyboard shortcut that selects this page.
    #[must_use]
    pub const fn shortcut(&self) -> char {
        match self {
            Self::Dashboard => '1',
            Self::Optimize => '2',
            Self::Query => '3',
            Self::Settings => '4',
        }
    }

    /// Position in navigation order.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Dashboard => 0,
            Self::Optimize => 1,
            Self::Query => 2,
            Self::Settings => 3,
        }
    }

    /// Page at `index` in navigation order, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Page bound to a shortcut key, if any.
    #[must_use]
    pub fn from_shortcut(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.shortcut() == key)
    }

    /// The page after this one, wrapping to the first.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Dashboard => Self::Optimize,
            Self::Optimize => Self::Query,
            Self::Query => Self::Settings,
            Self::Settings => Self::Dashboard,
        }
    }

    /// The page before this one, wrapping to the last.
    #[must_use]
    pub const fn prev(&self) -> Self {
        match self {
            Self::Dashboard => Self::Settings,
            Self::Optimize => Self::Dashboard,
            Self::Query => Self::Optimize,
            Self::Settings => Self::Query,
        }
    }

    /// The static navigation entry for this page.
    #[must_use]
    pub const fn nav_item(&self) -> &'static NavItem {
        &NAV_ITEMS[self.index()]
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PageId {
    type Err = DashboardError;

    /// Accepts the lowercase id, the label (any case) or the shortcut digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(page) = Self::from_shortcut(c) {
                return Ok(page);
            }
        }

        Self::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DashboardError::unknown_page(s))
    }
}

impl<'de> Deserialize<'de> for PageId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PageIdVisitor)
    }
}

struct PageIdVisitor;

impl Visitor<'_> for PageIdVisitor {
    type Value = PageId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a page id, label or shortcut number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<PageId, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<PageId, E> {
        usize::try_from(v)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(PageId::from_index)
            .ok_or_else(|| E::custom(DashboardError::unknown_page(v.to_string())))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<PageId, E> {
        u64::try_from(v)
            .map_err(|_| E::custom(DashboardError::unknown_page(v.to_string())))
            .and_then(|n| self.visit_u64(n))
    }
}

/// Static association between a page and how it is presented in navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub page: PageId,
    pub label: &'static str,
    pub icon: &'static str,
    pub shortcut: char,
}

impl NavItem {
    const fn for_page(page: PageId) -> Self {
        Self {
            page,
            label: page.label(),
            icon: page.icon(),
            shortcut: page.shortcut(),
        }
    }
}

/// Sidebar entries in display order.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem::for_page(PageId::Dashboard),
    NavItem::for_page(PageId::Optimize),
    NavItem::for_page(PageId::Query),
    NavItem::for_page(PageId::Settings),
];
