//! Human-readable template summaries for `--template-info` and
//! `--list-templates`.

use configgen_core::defaults::DEFAULT_STARTING_CASH;
use configgen_core::values::{format_dollars, format_thousands};
use configgen_core::Template;
use configgen_ports::Result;

use crate::registry::{list, lookup};

const RULE_WIDTH: usize = 50;

/// Detailed summary of one template: agent breakdown, market parameters
/// and computed totals
pub fn describe(name: &str) -> Result<String> {
    let template = lookup(name)?;

    let mut out = format!(
        "Template: {}\n{}\nDescription: {}\n",
        template.name.to_uppercase(),
        "=".repeat(RULE_WIDTH),
        template.description
    );

    out.push_str("\nAgent Configuration:\n");
    for (kind, count) in template.active_kinds() {
        out.push_str(&format!("  - {}: {}\n", kind, format_thousands(count)));
    }

    let market = &template.market;
    let pinned: Vec<String> = [
        market.symbol.map(|symbol| format!("Symbol: {symbol}")),
        market
            .starting_cash
            .map(|cash| format!("Starting Cash: {} per agent", format_dollars(cash, 0))),
        market.market_date.map(|date| format!("Market Date: {date}")),
        market.market_open.map(|open| format!("Market Open: {open}")),
        market.market_close.map(|close| format!("Market Close: {close}")),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !pinned.is_empty() {
        out.push_str("\nMarket Parameters:\n");
        for line in pinned {
            out.push_str(&format!("  - {line}\n"));
        }
    }

    let total = template.total_agents();
    let cash = market.starting_cash.unwrap_or(DEFAULT_STARTING_CASH);
    out.push_str(&format!(
        "\nTotal Agents: {}\nTotal Market Cap: {}\n",
        format_thousands(total),
        format_dollars(cash.saturating_mul(total), 0)
    ));
    out.push_str(&format!(
        "\nGenerate: configgen --template {} -f my_{}_config\n",
        template.name, template.name
    ));

    Ok(out)
}

/// Listing of every template with its agent breakdown
pub fn overview() -> String {
    let mut out = format!(
        "Available Research Configuration Templates:\n{}\n",
        "=".repeat(60)
    );

    for (name, template) in list() {
        out.push_str(&format!(
            "\n{}\n   Description: {}\n   Total Agents: {}\n   Agents: {}\n",
            name.to_uppercase(),
            template.description,
            format_thousands(template.total_agents()),
            breakdown(template)
        ));
        if let Some(symbol) = template.market.symbol {
            out.push_str(&format!("   Symbol: {symbol}\n"));
        }
        if let Some(cash) = template.market.starting_cash {
            out.push_str(&format!(
                "   Starting Cash: {} per agent\n",
                format_dollars(cash, 0)
            ));
        }
    }

    out.push_str("\nUsage: configgen --template <name> -f <config_name>\n");
    out.push_str("Override: configgen --template rmsc03 --symbol AAPL -f custom_rmsc03\n");
    out
}

/// One-line "2 Adaptive MMs + 100 Value + ..." breakdown
fn breakdown(template: &Template) -> String {
    template
        .active_kinds()
        .map(|(kind, count)| format!("{} {}", count, kind.short_label()))
        .collect::<Vec<_>>()
        .join(" + ")
}
