use serde::Serialize;

use super::AgentKind;

/// Kind-specific generation parameters
///
/// These are fixed domain defaults; callers only choose how many agents of
/// each kind to build.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AgentParams {
    MarketMaker {
        min_size: u32,
        max_size: u32,
    },
    AdaptiveMarketMaker {
        /// Participation of volume
        pov: f64,
        min_order_size: u32,
        window_size: u32,
        num_ticks: u32,
        wake_up_freq: &'static str,
        subscribe: bool,
    },
    ZeroIntelligence,
    Noise {
        /// Noise agents wake once inside this window on the market date
        wake_open: &'static str,
        wake_close: &'static str,
    },
    Value,
    Momentum {
        min_size: u32,
        max_size: u32,
        wake_up_freq: &'static str,
        poisson_arrival: bool,
        subscribe: bool,
    },
}

impl AgentParams {
    /// Default parameters for a kind
    pub fn defaults(kind: AgentKind) -> Self {
        match kind {
            AgentKind::MarketMaker => AgentParams::MarketMaker {
                min_size: 500,
                max_size: 1000,
            },
            AgentKind::AdaptiveMarketMaker => AgentParams::AdaptiveMarketMaker {
                pov: 0.025,
                min_order_size: 1,
                window_size: 20,
                num_ticks: 10,
                wake_up_freq: "10s",
                subscribe: true,
            },
            AgentKind::ZeroIntelligence => AgentParams::ZeroIntelligence,
            AgentKind::Noise => AgentParams::Noise {
                wake_open: "09:00:00",
                wake_close: "16:00:00",
            },
            AgentKind::Value => AgentParams::Value,
            AgentKind::Momentum => AgentParams::Momentum {
                min_size: 20,
                max_size: 50,
                wake_up_freq: "60s",
                poisson_arrival: true,
                subscribe: false,
            },
        }
    }

    /// The kind these parameters belong to
    pub fn kind(&self) -> AgentKind {
        match self {
            AgentParams::MarketMaker { .. } => AgentKind::MarketMaker,
            AgentParams::AdaptiveMarketMaker { .. } => AgentKind::AdaptiveMarketMaker,
            AgentParams::ZeroIntelligence => AgentKind::ZeroIntelligence,
            AgentParams::Noise { .. } => AgentKind::Noise,
            AgentParams::Value => AgentKind::Value,
            AgentParams::Momentum { .. } => AgentKind::Momentum,
        }
    }
}

/// One agent kind in a population: how many, and how to build them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentTypeSpec {
    pub kind: AgentKind,
    pub count: u32,
    pub params: AgentParams,
}

impl AgentTypeSpec {
    /// Spec with the kind's default parameters
    pub fn new(kind: AgentKind, count: u32) -> Self {
        Self {
            kind,
            count,
            params: AgentParams::defaults(kind),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
