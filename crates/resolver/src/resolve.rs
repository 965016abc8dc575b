//! Override resolution
//!
//! Each field takes the first present value of: explicit input, template,
//! built-in default. Scaling runs afterwards on every count, whatever its
//! origin, and never touches market fields.

use configgen_core::defaults::DEFAULT_AGENTS_SCALE;
use configgen_core::{
    AgentCounts, GeneratorInput, MarketParams, PartialAgentCounts, PartialMarketParams,
    ResolvedConfig, Template, Timestamp,
};
use configgen_ports::{Clock, Result};

use crate::validate::check_modes;

/// Resolve input against its template, reading the clock once
pub fn resolve(input: &GeneratorInput, clock: &dyn Clock) -> Result<ResolvedConfig> {
    resolve_at(input, clock.now())
}

/// Resolve input with an explicit invocation instant
///
/// Fails on conflicting mode flags, checked before anything else, and on an
/// unknown template name.
pub fn resolve_at(input: &GeneratorInput, generated_at: Timestamp) -> Result<ResolvedConfig> {
    check_modes(input.modes)?;

    let template = match input.template.as_deref() {
        Some(name) => Some(configgen_templates::lookup(name)?),
        None => None,
    };

    let market = resolve_market(template, &input.market);
    let unscaled = resolve_counts(template, &input.agents);
    let scale = input.agents_scale.unwrap_or(DEFAULT_AGENTS_SCALE);
    let counts = unscaled.scaled(scale);

    if let Some(template) = template {
        log::info!(
            "Applied template '{}': {}",
            template.name,
            template.description
        );
    }
    if scale != DEFAULT_AGENTS_SCALE {
        log::info!(
            "Applied {}x scaling to all agent counts ({} -> {} agents)",
            scale,
            unscaled.total(),
            counts.total()
        );
    }
    for (kind, count) in counts.iter() {
        if unscaled.get(kind) > 0 && count == 0 {
            log::debug!("Scaling removed all {} agents", kind);
        }
    }

    Ok(ResolvedConfig::from_parts(
        template.map(|t| t.name.to_string()),
        market,
        counts,
        scale,
        input.seed,
        input.modes,
        generated_at,
    ))
}

fn resolve_counts(template: Option<&Template>, explicit: &PartialAgentCounts) -> AgentCounts {
    AgentCounts::from_fn(|kind| {
        explicit
            .get(kind)
            .or_else(|| template.and_then(|t| t.agents.get(kind)))
            .unwrap_or(0)
    })
}

fn resolve_market(template: Option<&Template>, explicit: &PartialMarketParams) -> MarketParams {
    let defaults = MarketParams::default();
    let pinned = template.map(|t| t.market);

    MarketParams {
        symbol: explicit
            .symbol
            .clone()
            .or_else(|| pinned.and_then(|m| m.symbol).map(str::to_string))
            .unwrap_or(defaults.symbol),
        starting_cash: explicit
            .starting_cash
            .or_else(|| pinned.and_then(|m| m.starting_cash))
            .unwrap_or(defaults.starting_cash),
        market_date: explicit
            .market_date
            .clone()
            .or_else(|| pinned.and_then(|m| m.market_date).map(str::to_string))
            .unwrap_or(defaults.market_date),
        market_open: explicit
            .market_open
            .clone()
            .or_else(|| pinned.and_then(|m| m.market_open).map(str::to_string))
            .unwrap_or(defaults.market_open),
        market_close: explicit
            .market_close
            .clone()
            .or_else(|| pinned.and_then(|m| m.market_close).map(str::to_string))
            .unwrap_or(defaults.market_close),
    }
}

/// Express a resolved config as fully explicit input
///
/// Resolving the result again (same instant) reproduces the counts and
/// market parameters of `config`; the scale is already folded into the
/// counts, so the new input carries none.
pub fn explicit_input(config: &ResolvedConfig) -> GeneratorInput {
    let counts = config.counts();
    let market = config.market();

    GeneratorInput {
        template: config.template().map(str::to_string),
        agents: PartialAgentCounts {
            market_makers: Some(counts.market_makers),
            adaptive_market_makers: Some(counts.adaptive_market_makers),
            zero_intelligence: Some(counts.zero_intelligence),
            noise_agents: Some(counts.noise_agents),
            value_agents: Some(counts.value_agents),
            momentum_agents: Some(counts.momentum_agents),
        },
        market: PartialMarketParams {
            symbol: Some(market.symbol.clone()),
            starting_cash: Some(market.starting_cash),
            market_date: Some(market.market_date.clone()),
            market_open: Some(market.market_open.clone()),
            market_close: Some(market.market_close.clone()),
        },
        seed: config.seed(),
        agents_scale: None,
        modes: config.modes(),
    }
}
