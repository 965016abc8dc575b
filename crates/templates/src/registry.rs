use configgen_core::{PartialAgentCounts, Template, TemplateMarket};
use configgen_ports::{ConfigGenError, Result};

/// All known templates, in listing order
pub static TEMPLATES: [Template; 5] = [
    Template {
        name: "rmsc03",
        description: "RMSC-3: Standard high-volume research configuration (Academic Standard)",
        agents: PartialAgentCounts {
            // Adaptive market makers replace plain ones
            market_makers: Some(0),
            adaptive_market_makers: Some(2),
            zero_intelligence: Some(0),
            noise_agents: Some(5000),
            value_agents: Some(100),
            momentum_agents: Some(25),
        },
        market: TemplateMarket {
            symbol: Some("ABM"),
            starting_cash: Some(10_000_000),
            market_date: Some("2020-06-03"),
            market_open: Some("09:30:00"),
            market_close: Some("16:00:00"),
        },
    },
    Template {
        name: "rmsc04",
        description: "RMSC-4: Smaller scale research configuration",
        agents: PartialAgentCounts {
            market_makers: Some(0),
            adaptive_market_makers: Some(2),
            zero_intelligence: Some(0),
            noise_agents: Some(1000),
            value_agents: Some(102),
            momentum_agents: Some(12),
        },
        market: TemplateMarket {
            symbol: Some("ABM"),
            starting_cash: Some(10_000_000),
            market_date: Some("2021-02-05"),
            market_open: Some("09:30:00"),
            market_close: Some("10:00:00"),
        },
    },
    Template {
        name: "hft",
        description: "High-frequency trading environment with fast agents",
        agents: PartialAgentCounts {
            market_makers: Some(10),
            adaptive_market_makers: Some(0),
            zero_intelligence: Some(1000),
            noise_agents: Some(500),
            value_agents: Some(0),
            momentum_agents: Some(0),
        },
        market: TemplateMarket {
            symbol: Some("JPM"),
            starting_cash: Some(10_000_000),
            ..TemplateMarket::EMPTY
        },
    },
    Template {
        name: "minimal",
        description: "Minimal configuration for testing and debugging",
        agents: PartialAgentCounts {
            market_makers: Some(1),
            adaptive_market_makers: Some(0),
            zero_intelligence: Some(10),
            noise_agents: Some(5),
            value_agents: Some(0),
            momentum_agents: Some(0),
        },
        market: TemplateMarket {
            symbol: Some("TEST"),
            starting_cash: Some(1_000_000),
            ..TemplateMarket::EMPTY
        },
    },
    Template {
        name: "behavioral",
        description: "Behavioral finance research with diverse agent types",
        agents: PartialAgentCounts {
            market_makers: Some(3),
            adaptive_market_makers: Some(2),
            zero_intelligence: Some(100),
            noise_agents: Some(200),
            value_agents: Some(50),
            momentum_agents: Some(75),
        },
        market: TemplateMarket {
            symbol: Some("BEH"),
            starting_cash: Some(5_000_000),
            ..TemplateMarket::EMPTY
        },
    },
];

/// Find a template by name
pub fn lookup(name: &str) -> Result<&'static Template> {
    TEMPLATES
        .iter()
        .find(|template| template.name == name)
        .ok_or_else(|| ConfigGenError::TemplateNotFound {
            name: name.to_string(),
            available: names().map(str::to_string).collect(),
        })
}

/// (name, template) pairs in stable listing order
pub fn list() -> impl Iterator<Item = (&'static str, &'static Template)> {
    TEMPLATES.iter().map(|template| (template.name, template))
}

/// Template names in listing order
pub fn names() -> impl Iterator<Item = &'static str> {
    TEMPLATES.iter().map(|template| template.name)
}
