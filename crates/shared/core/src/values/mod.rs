mod money;

pub use money::{cents_to_dollars, format_dollars, format_thousands};

use chrono::{DateTime, Utc};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Monetary amount in cents (the unit the simulation runtime expects)
pub type Cents = i64;

/// Trading symbol
pub type Symbol = String;

/// Agent identifier inside a generated population
pub type AgentId = u32;
