use serde::Serialize;

use super::{AgentCounts, AgentKind, MarketParams, ModeFlags};
use crate::defaults::SEED_MODULUS;
use crate::values::{Cents, Timestamp};

/// Final parameter set after merging template, explicit values and scaling
///
/// Built exactly once per invocation by the resolver. Fields are private and
/// there are no setters: every later stage reads the same value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    template: Option<String>,
    market: MarketParams,
    counts: AgentCounts,
    agents_scale: f64,
    seed: Option<u64>,
    modes: ModeFlags,
    /// Invocation instant; source of the header timestamp and fallback seed
    generated_at: Timestamp,
}

impl ResolvedConfig {
    /// Assemble a resolved configuration
    ///
    /// `counts` must already be scaled by `agents_scale`.
    pub fn from_parts(
        template: Option<String>,
        market: MarketParams,
        counts: AgentCounts,
        agents_scale: f64,
        seed: Option<u64>,
        modes: ModeFlags,
        generated_at: Timestamp,
    ) -> Self {
        Self {
            template,
            market,
            counts,
            agents_scale,
            seed,
            modes,
            generated_at,
        }
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    pub fn market(&self) -> &MarketParams {
        &self.market
    }

    pub fn symbol(&self) -> &str {
        &self.market.symbol
    }

    pub fn starting_cash(&self) -> Cents {
        self.market.starting_cash
    }

    pub fn counts(&self) -> &AgentCounts {
        &self.counts
    }

    pub fn count(&self, kind: AgentKind) -> i64 {
        self.counts.get(kind)
    }

    pub fn agents_scale(&self) -> f64 {
        self.agents_scale
    }

    /// Seed explicitly requested by the caller
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Explicit seed, or one derived from the invocation instant
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            let micros = self.generated_at.timestamp_micros().unsigned_abs();
            micros % SEED_MODULUS
        })
    }

    pub fn modes(&self) -> ModeFlags {
        self.modes
    }

    pub fn generated_at(&self) -> Timestamp {
        self.generated_at
    }

    /// Trading agents in the population (exchange excluded)
    pub fn total_agents(&self) -> i64 {
        self.counts.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn config(seed: Option<u64>) -> ResolvedConfig {
        ResolvedConfig::from_parts(
            None,
            MarketParams::default(),
            AgentCounts {
                noise_agents: 5,
                ..Default::default()
            },
            1.0,
            seed,
            ModeFlags::default(),
            Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        )
    }

    #[test]
    fn test_explicit_seed_wins() {
        assert_eq!(config(Some(42)).effective_seed(), 42);
    }

    #[test]
    fn test_derived_seed_is_stable_and_bounded() {
        let cfg = config(None);
        let seed = cfg.effective_seed();
        assert_eq!(seed, cfg.effective_seed());
        assert!(seed < SEED_MODULUS);
    }

    #[test]
    fn test_accessors() {
        let cfg = config(None);
        assert_eq!(cfg.symbol(), "JPM");
        assert_eq!(cfg.total_agents(), 5);
        assert_eq!(cfg.count(AgentKind::Noise), 5);
        assert!(cfg.template().is_none());
    }
}
