use std::path::PathBuf;

use clap::Parser;
use configgen_core::{
    AgentKind, GeneratorInput, ModeFlags, PartialAgentCounts, PartialMarketParams,
};

/// Generate ABIDES market simulation scripts from templates and overrides
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "configgen")]
#[command(version)]
pub struct Args {
    /// Start from a named template
    #[arg(short, long)]
    pub template: Option<String>,

    /// List the available templates and exit
    #[arg(long)]
    pub list_templates: bool,

    /// Describe one template and exit
    #[arg(long, value_name = "NAME")]
    pub template_info: Option<String>,

    /// Directory for the generated script
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Script name (default: derived from template, agent count and time)
    #[arg(short = 'f', long)]
    pub config_name: Option<String>,

    /// Simulation seed (default: derived from the generation time)
    #[arg(short = 's', long)]
    pub random_seed: Option<u64>,

    /// Trading date, YYYY-MM-DD
    #[arg(short = 'd', long)]
    pub market_date: Option<String>,

    /// Market open, HH:MM:SS
    #[arg(long)]
    pub market_open: Option<String>,

    /// Market close, HH:MM:SS
    #[arg(long)]
    pub market_close: Option<String>,

    #[arg(long)]
    pub symbol: Option<String>,

    /// Starting cash per agent, in cents
    #[arg(long, allow_negative_numbers = true)]
    pub starting_cash: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub market_makers: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub adaptive_market_makers: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub zero_intelligence: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub noise_agents: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub value_agents: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub momentum_agents: Option<i64>,

    /// Multiply every agent count (floored)
    #[arg(long, allow_negative_numbers = true)]
    pub agents_scale: Option<f64>,

    /// Append the RL-harness background config
    #[arg(long, alias = "gym-mode")]
    pub rl_compat: bool,

    /// Parameter sweeps (not implemented)
    #[arg(long)]
    pub batch_mode: bool,

    /// Resolve and validate without writing anything
    #[arg(long)]
    pub validate_only: bool,

    /// Debug logging; print the resolved configuration in validate-only mode
    #[arg(short, long)]
    pub verbose: bool,

    /// JSON file of generator input; command line flags override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    fn count(&self, kind: AgentKind) -> Option<i64> {
        match kind {
            AgentKind::MarketMaker => self.market_makers,
            AgentKind::AdaptiveMarketMaker => self.adaptive_market_makers,
            AgentKind::ZeroIntelligence => self.zero_intelligence,
            AgentKind::Noise => self.noise_agents,
            AgentKind::Value => self.value_agents,
            AgentKind::Momentum => self.momentum_agents,
        }
    }

    /// Generator input holding only what was given on the command line
    pub fn to_input(&self) -> GeneratorInput {
        let mut agents = PartialAgentCounts::EMPTY;
        for kind in AgentKind::ALL {
            if let Some(count) = self.count(kind) {
                agents = agents.with(kind, count);
            }
        }

        GeneratorInput {
            template: self.template.clone(),
            agents,
            market: PartialMarketParams {
                symbol: self.symbol.clone(),
                starting_cash: self.starting_cash,
                market_date: self.market_date.clone(),
                market_open: self.market_open.clone(),
                market_close: self.market_close.clone(),
            },
            seed: self.random_seed,
            agents_scale: self.agents_scale,
            modes: ModeFlags {
                rl_compat: self.rl_compat,
                validate_only: self.validate_only,
                batch: self.batch_mode,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_map_to_kinds() {
        let args = Args::try_parse_from([
            "configgen",
            "--market-makers",
            "3",
            "--momentum-agents",
            "0",
        ])
        .unwrap();
        let input = args.to_input();

        assert_eq!(input.agents.get(AgentKind::MarketMaker), Some(3));
        assert_eq!(input.agents.get(AgentKind::Momentum), Some(0));
        assert_eq!(input.agents.get(AgentKind::Noise), None);
    }

    #[test]
    fn test_negative_values_parse() {
        let args = Args::try_parse_from(["configgen", "--value-agents", "-4"]).unwrap();
        assert_eq!(args.value_agents, Some(-4));
    }

    #[test]
    fn test_gym_mode_alias() {
        let args = Args::try_parse_from(["configgen", "--gym-mode"]).unwrap();
        assert!(args.to_input().modes.rl_compat);
    }
}
