use serde::Serialize;

use super::{AgentKind, PartialAgentCounts};
use crate::values::Cents;

/// Market parameters a template may pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateMarket {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_cash: Option<Cents>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_date: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_open: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_close: Option<&'static str>,
}

impl TemplateMarket {
    pub const EMPTY: Self = Self {
        symbol: None,
        starting_cash: None,
        market_date: None,
        market_open: None,
        market_close: None,
    };
}

/// Named preset bundling agent counts and market parameters
///
/// Anything a template leaves unset falls back to the built-in defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub agents: PartialAgentCounts,
    pub market: TemplateMarket,
}

impl Template {
    /// Declared count for a kind (unset counts as zero)
    pub fn count(&self, kind: AgentKind) -> i64 {
        self.agents.get(kind).unwrap_or(0)
    }

    /// Total declared agents, exchange excluded
    pub fn total_agents(&self) -> i64 {
        self.agents.total()
    }

    /// Kinds with a non-zero count, in population order
    pub fn active_kinds(&self) -> impl Iterator<Item = (AgentKind, i64)> + '_ {
        AgentKind::ALL
            .into_iter()
            .map(|kind| (kind, self.count(kind)))
            .filter(|(_, count)| *count > 0)
    }
}
