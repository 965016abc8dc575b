use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of simulated market participant
///
/// The implicit exchange agent is not a kind: it is always present,
/// never counted and never scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    /// Provides two-sided liquidity with fixed order sizes
    MarketMaker,
    /// Market maker with volume-driven, adaptive spreads
    AdaptiveMarketMaker,
    /// Random limit orders around the fundamental
    ZeroIntelligence,
    /// Background trading at a single random wake time
    Noise,
    /// Trades toward a noisy observation of the fundamental
    Value,
    /// Trend follower on moving-average crossovers
    Momentum,
}

impl AgentKind {
    /// Population order: agents are emitted and numbered in this order
    pub const ALL: [AgentKind; 6] = [
        AgentKind::MarketMaker,
        AgentKind::AdaptiveMarketMaker,
        AgentKind::ZeroIntelligence,
        AgentKind::Noise,
        AgentKind::Value,
        AgentKind::Momentum,
    ];

    /// Snake-case key used in config files and logs
    pub fn key(&self) -> &'static str {
        match self {
            AgentKind::MarketMaker => "market_makers",
            AgentKind::AdaptiveMarketMaker => "adaptive_market_makers",
            AgentKind::ZeroIntelligence => "zero_intelligence",
            AgentKind::Noise => "noise_agents",
            AgentKind::Value => "value_agents",
            AgentKind::Momentum => "momentum_agents",
        }
    }

    /// Human-readable name, e.g. "Market Maker"
    pub fn display_name(&self) -> &'static str {
        match self {
            AgentKind::MarketMaker => "Market Maker",
            AgentKind::AdaptiveMarketMaker => "Adaptive Market Maker",
            AgentKind::ZeroIntelligence => "Zero Intelligence",
            AgentKind::Noise => "Noise",
            AgentKind::Value => "Value",
            AgentKind::Momentum => "Momentum",
        }
    }

    /// Short label used in one-line template breakdowns
    pub fn short_label(&self) -> &'static str {
        match self {
            AgentKind::MarketMaker => "Market Makers",
            AgentKind::AdaptiveMarketMaker => "Adaptive MMs",
            AgentKind::ZeroIntelligence => "Zero Intelligence",
            AgentKind::Noise => "Noise",
            AgentKind::Value => "Value",
            AgentKind::Momentum => "Momentum",
        }
    }

    /// Class constructed by the simulation runtime
    pub fn class_name(&self) -> &'static str {
        match self {
            AgentKind::MarketMaker => "MarketMakerAgent",
            AgentKind::AdaptiveMarketMaker => "AdaptiveMarketMakerAgent",
            AgentKind::ZeroIntelligence => "ZeroIntelligenceAgent",
            AgentKind::Noise => "NoiseAgent",
            AgentKind::Value => "ValueAgent",
            AgentKind::Momentum => "MomentumAgent",
        }
    }

    /// Prefix of the generated agent names (`<PREFIX>_<id>`)
    pub fn name_prefix(&self) -> &'static str {
        match self {
            AgentKind::MarketMaker => "MARKET_MAKER",
            AgentKind::AdaptiveMarketMaker => "ADAPTIVE_MM_AGENT",
            AgentKind::ZeroIntelligence => "ZI_AGENT",
            AgentKind::Noise => "NOISE_AGENT",
            AgentKind::Value => "VALUE_AGENT",
            AgentKind::Momentum => "MOMENTUM_AGENT",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_order() {
        assert_eq!(AgentKind::ALL[0], AgentKind::MarketMaker);
        assert_eq!(AgentKind::ALL[5], AgentKind::Momentum);

        let mut sorted = AgentKind::ALL;
        sorted.sort();
        assert_eq!(sorted, AgentKind::ALL);
    }

    #[test]
    fn test_keys_are_unique() {
        let keys: std::collections::HashSet<_> = AgentKind::ALL.iter().map(|k| k.key()).collect();
        assert_eq!(keys.len(), AgentKind::ALL.len());
    }
}
