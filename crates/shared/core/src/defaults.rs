//! Built-in defaults and business-rule thresholds.
//!
//! Everything the resolver falls back to when neither the caller nor the
//! selected template supplies a value lives here.

use crate::values::Cents;

/// Version stamped into every generated script header
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

// Market defaults

pub const DEFAULT_MARKET_DATE: &str = "2019-06-28";
pub const DEFAULT_MARKET_OPEN: &str = "09:30:00";
pub const DEFAULT_MARKET_CLOSE: &str = "16:00:00";
/// $100,000 per agent
pub const DEFAULT_STARTING_CASH: Cents = 10_000_000;
pub const DEFAULT_SYMBOL: &str = "JPM";
pub const DEFAULT_AGENTS_SCALE: f64 = 1.0;

// Parsing formats

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";

// Validation thresholds

pub const MIN_MARKET_YEAR: i32 = 1990;
/// Latest accepted year is the current year plus this offset
pub const MAX_MARKET_YEAR_AHEAD: i32 = 1;
pub const EARLIEST_TYPICAL_HOUR: u32 = 4;
pub const LATEST_TYPICAL_HOUR: u32 = 22;
/// Counts above this only trigger a performance warning
pub const LARGE_COUNT_THRESHOLD: i64 = 10_000;
/// $1,000 per agent
pub const LOW_CASH_THRESHOLD: Cents = 100_000;
/// $100,000,000 per agent
pub const HIGH_CASH_THRESHOLD: Cents = 10_000_000_000;
pub const SCALE_WARN_MIN: f64 = 0.01;
pub const SCALE_WARN_MAX: f64 = 10.0;

/// Largest population, exchange included, that agent identifiers can number
pub const MAX_POPULATION: i64 = u32::MAX as i64;

// Output naming

pub const MAX_FILENAME_LENGTH: usize = 100;
pub const SCRIPT_EXTENSION: &str = ".py";

// Kernel constants embedded in the generated run driver

/// Buffer added after market close before the kernel stops
pub const KERNEL_STOP_BUFFER: &str = "00:01:00";
/// NYC to Seattle, the span agents are spread over by the latency model
pub const GEOGRAPHIC_SPAN_METERS: u64 = 3_866_660;
pub const DEFAULT_COMPUTATION_DELAY_NS: u64 = 50;

/// Modulus for time-derived seeds (fits numpy's 32-bit seed range)
pub const SEED_MODULUS: u64 = (1 << 32) - 1;
