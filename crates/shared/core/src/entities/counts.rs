use serde::{Deserialize, Serialize};

use super::AgentKind;

/// Resolved count per agent kind
///
/// Counts are signed so that a negative caller value survives resolution
/// and is rejected by validation with the offending field named.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentCounts {
    pub market_makers: i64,
    pub adaptive_market_makers: i64,
    pub zero_intelligence: i64,
    pub noise_agents: i64,
    pub value_agents: i64,
    pub momentum_agents: i64,
}

impl AgentCounts {
    /// Build counts by asking for each kind's value
    pub fn from_fn(mut f: impl FnMut(AgentKind) -> i64) -> Self {
        Self {
            market_makers: f(AgentKind::MarketMaker),
            adaptive_market_makers: f(AgentKind::AdaptiveMarketMaker),
            zero_intelligence: f(AgentKind::ZeroIntelligence),
            noise_agents: f(AgentKind::Noise),
            value_agents: f(AgentKind::Value),
            momentum_agents: f(AgentKind::Momentum),
        }
    }

    pub fn get(&self, kind: AgentKind) -> i64 {
        match kind {
            AgentKind::MarketMaker => self.market_makers,
            AgentKind::AdaptiveMarketMaker => self.adaptive_market_makers,
            AgentKind::ZeroIntelligence => self.zero_intelligence,
            AgentKind::Noise => self.noise_agents,
            AgentKind::Value => self.value_agents,
            AgentKind::Momentum => self.momentum_agents,
        }
    }

    /// (kind, count) pairs in population order
    pub fn iter(&self) -> impl Iterator<Item = (AgentKind, i64)> + '_ {
        AgentKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    /// Sum of the positive counts (exchange agent excluded)
    pub fn total(&self) -> i64 {
        self.iter()
            .fold(0i64, |total, (_, count)| total.saturating_add(count.max(0)))
    }

    /// Multiply every count by `factor`, truncating toward zero
    pub fn scaled(&self, factor: f64) -> Self {
        Self::from_fn(|kind| (self.get(kind) as f64 * factor).trunc() as i64)
    }
}

/// Per-kind counts where `None` means "not specified"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialAgentCounts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_makers: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adaptive_market_makers: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero_intelligence: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_agents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_agents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub momentum_agents: Option<i64>,
}

impl PartialAgentCounts {
    /// Nothing specified
    pub const EMPTY: Self = Self {
        market_makers: None,
        adaptive_market_makers: None,
        zero_intelligence: None,
        noise_agents: None,
        value_agents: None,
        momentum_agents: None,
    };

    pub fn get(&self, kind: AgentKind) -> Option<i64> {
        match kind {
            AgentKind::MarketMaker => self.market_makers,
            AgentKind::AdaptiveMarketMaker => self.adaptive_market_makers,
            AgentKind::ZeroIntelligence => self.zero_intelligence,
            AgentKind::Noise => self.noise_agents,
            AgentKind::Value => self.value_agents,
            AgentKind::Momentum => self.momentum_agents,
        }
    }

    /// Builder-style setter
    pub fn with(mut self, kind: AgentKind, count: i64) -> Self {
        let slot = match kind {
            AgentKind::MarketMaker => &mut self.market_makers,
            AgentKind::AdaptiveMarketMaker => &mut self.adaptive_market_makers,
            AgentKind::ZeroIntelligence => &mut self.zero_intelligence,
            AgentKind::Noise => &mut self.noise_agents,
            AgentKind::Value => &mut self.value_agents,
            AgentKind::Momentum => &mut self.momentum_agents,
        };
        *slot = Some(count);
        self
    }

    /// Fields set in `overrides` replace ours
    pub fn overlay(&self, overrides: &PartialAgentCounts) -> Self {
        Self {
            market_makers: overrides.market_makers.or(self.market_makers),
            adaptive_market_makers: overrides
                .adaptive_market_makers
                .or(self.adaptive_market_makers),
            zero_intelligence: overrides.zero_intelligence.or(self.zero_intelligence),
            noise_agents: overrides.noise_agents.or(self.noise_agents),
            value_agents: overrides.value_agents.or(self.value_agents),
            momentum_agents: overrides.momentum_agents.or(self.momentum_agents),
        }
    }

    /// Sum of the specified positive counts
    pub fn total(&self) -> i64 {
        AgentKind::ALL
            .iter()
            .filter_map(|kind| self.get(*kind))
            .map(|count| count.max(0))
            .sum()
    }
}
