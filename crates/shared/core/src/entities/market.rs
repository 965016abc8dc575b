use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::values::{Cents, Symbol};

/// Market timing, symbol and capital for one simulated trading day
///
/// Date and times stay as the caller wrote them; the validator owns parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketParams {
    pub symbol: Symbol,
    /// Starting cash per agent
    pub starting_cash: Cents,
    /// `YYYY-MM-DD`
    pub market_date: String,
    /// `HH:MM:SS`
    pub market_open: String,
    /// `HH:MM:SS`
    pub market_close: String,
}

impl Default for MarketParams {
    fn default() -> Self {
        Self {
            symbol: defaults::DEFAULT_SYMBOL.to_string(),
            starting_cash: defaults::DEFAULT_STARTING_CASH,
            market_date: defaults::DEFAULT_MARKET_DATE.to_string(),
            market_open: defaults::DEFAULT_MARKET_OPEN.to_string(),
            market_close: defaults::DEFAULT_MARKET_CLOSE.to_string(),
        }
    }
}

/// Market parameters where `None` means "not specified"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialMarketParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<Symbol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_cash: Option<Cents>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_open: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_close: Option<String>,
}

impl PartialMarketParams {
    /// Fields set in `overrides` replace ours
    pub fn overlay(&self, overrides: &PartialMarketParams) -> Self {
        Self {
            symbol: overrides.symbol.clone().or_else(|| self.symbol.clone()),
            starting_cash: overrides.starting_cash.or(self.starting_cash),
            market_date: overrides
                .market_date
                .clone()
                .or_else(|| self.market_date.clone()),
            market_open: overrides
                .market_open
                .clone()
                .or_else(|| self.market_open.clone()),
            market_close: overrides
                .market_close
                .clone()
                .or_else(|| self.market_close.clone()),
        }
    }
}
