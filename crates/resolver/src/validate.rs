//! Business-rule validation of a resolved configuration
//!
//! Checks run in a fixed order and the first hard failure is returned:
//! mode flags, agents scale, market date, open/close times, symbol, agent
//! counts, population size, starting cash. Soft conditions become warnings.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use configgen_core::defaults::{
    DATE_FORMAT, EARLIEST_TYPICAL_HOUR, HIGH_CASH_THRESHOLD, LARGE_COUNT_THRESHOLD,
    LATEST_TYPICAL_HOUR, LOW_CASH_THRESHOLD, MAX_MARKET_YEAR_AHEAD, MAX_POPULATION,
    MIN_MARKET_YEAR, SCALE_WARN_MAX, SCALE_WARN_MIN, TIME_FORMAT,
};
use configgen_core::values::{format_dollars, format_thousands};
use configgen_core::{ModeFlags, ResolvedConfig};
use configgen_ports::{ConfigGenError, Result};

/// A soft condition: reported, but generation proceeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

impl ValidationWarning {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Outcome of a successful validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Whether any warning concerns `field`
    pub fn has_warning_for(&self, field: &str) -> bool {
        self.warnings.iter().any(|w| w.field == field)
    }

    /// Emit every warning through the `log` facade
    pub fn log(&self) {
        for warning in &self.warnings {
            log::warn!("{}", warning.message);
        }
    }

    fn warn(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationWarning::new(field, message));
    }
}

/// Validate a resolved configuration
pub fn validate(config: &ResolvedConfig) -> Result<ValidationReport> {
    let mut report = ValidationReport::default();

    check_modes(config.modes())?;
    check_scale(config.agents_scale(), &mut report)?;

    let max_year = config.generated_at().year() + MAX_MARKET_YEAR_AHEAD;
    check_market_date(&config.market().market_date, max_year)?;
    let open = check_market_time(&config.market().market_open, "market open time", &mut report)?;
    let close = check_market_time(
        &config.market().market_close,
        "market close time",
        &mut report,
    )?;
    if close <= open {
        report.warn(
            "market close time",
            format!(
                "Market close {} is not after market open {}",
                config.market().market_close,
                config.market().market_open
            ),
        );
    }

    check_symbol(config.symbol())?;

    for (kind, count) in config.counts().iter() {
        let field = format!("{} count", kind.display_name());
        if count < 0 {
            return Err(ConfigGenError::validation(
                field,
                count,
                "must be non-negative",
            ));
        }
        if count >= MAX_POPULATION {
            return Err(ConfigGenError::validation(
                field,
                count,
                format!("must be below {}", format_thousands(MAX_POPULATION)),
            ));
        }
        if count > LARGE_COUNT_THRESHOLD {
            report.warn(
                field,
                format!(
                    "Large {} count ({}) may impact simulation performance",
                    kind.display_name(),
                    format_thousands(count)
                ),
            );
        }
    }

    // The exchange takes one identifier on top of the trading agents
    let total = config.total_agents();
    if total >= MAX_POPULATION {
        return Err(ConfigGenError::validation(
            "total agents",
            total,
            format!(
                "population with the exchange must not exceed {} agents",
                format_thousands(MAX_POPULATION)
            ),
        ));
    }

    check_starting_cash(config.starting_cash(), &mut report)?;

    Ok(report)
}

/// Reject mode combinations that can never run together
pub fn check_modes(modes: ModeFlags) -> Result<()> {
    if modes.rl_compat && modes.batch {
        return Err(ConfigGenError::ModeConflict(
            "RL-compatibility and batch modes cannot be used together".to_string(),
        ));
    }
    Ok(())
}

fn check_scale(scale: f64, report: &mut ValidationReport) -> Result<()> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ConfigGenError::validation(
            "agents scale",
            scale,
            "must be a positive number",
        ));
    }
    if scale > SCALE_WARN_MAX {
        report.warn(
            "agents scale",
            format!("Very large agents scale factor: {scale}x - this may impact performance"),
        );
    } else if scale < SCALE_WARN_MIN {
        report.warn(
            "agents scale",
            format!("Very small agents scale factor: {scale}x - may result in zero agents"),
        );
    }
    Ok(())
}

fn check_market_date(text: &str, max_year: i32) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| {
        ConfigGenError::validation("market date", text, "expected format YYYY-MM-DD")
    })?;

    if date.year() < MIN_MARKET_YEAR || date.year() > max_year {
        return Err(ConfigGenError::validation(
            "market date",
            text,
            format!("year must be between {MIN_MARKET_YEAR} and {max_year}"),
        ));
    }
    Ok(date)
}

fn check_market_time(text: &str, field: &str, report: &mut ValidationReport) -> Result<NaiveTime> {
    let time = NaiveTime::parse_from_str(text, TIME_FORMAT)
        .map_err(|_| ConfigGenError::validation(field, text, "expected format HH:MM:SS"))?;

    if time.hour() < EARLIEST_TYPICAL_HOUR || time.hour() > LATEST_TYPICAL_HOUR {
        report.warn(
            field,
            format!("Unusual {field}: {text} (typical range: 04:00-22:00)"),
        );
    }
    Ok(time)
}

/// The symbol lands inside a quoted literal of the generated script
fn check_symbol(symbol: &str) -> Result<()> {
    if symbol.is_empty() {
        return Err(ConfigGenError::validation("symbol", symbol, "cannot be empty"));
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_');
    if !symbol.chars().all(allowed) {
        return Err(ConfigGenError::validation(
            "symbol",
            symbol,
            "only ASCII letters, digits, '.', '-' and '_' are allowed",
        ));
    }
    Ok(())
}

fn check_starting_cash(cash: i64, report: &mut ValidationReport) -> Result<()> {
    if cash < 0 {
        return Err(ConfigGenError::validation(
            "starting cash",
            cash,
            "cannot be negative",
        ));
    }
    if cash == 0 {
        report.warn("starting cash", "Starting cash is zero - agents cannot trade");
    } else if cash < LOW_CASH_THRESHOLD {
        report.warn(
            "starting cash",
            format!("Low starting cash: {} per agent", format_dollars(cash, 2)),
        );
    } else if cash > HIGH_CASH_THRESHOLD {
        report.warn(
            "starting cash",
            format!("Very high starting cash: {} per agent", format_dollars(cash, 0)),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use configgen_core::{AgentCounts, MarketParams};

    struct Builder {
        market: MarketParams,
        counts: AgentCounts,
        scale: f64,
        modes: ModeFlags,
    }

    impl Builder {
        fn new() -> Self {
            Self {
                market: MarketParams::default(),
                counts: AgentCounts {
                    market_makers: 1,
                    noise_agents: 10,
                    ..Default::default()
                },
                scale: 1.0,
                modes: ModeFlags::default(),
            }
        }

        fn build(self) -> ResolvedConfig {
            ResolvedConfig::from_parts(
                None,
                self.market,
                self.counts,
                self.scale,
                None,
                self.modes,
                Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
            )
        }
    }

    fn field_of(err: ConfigGenError) -> String {
        match err {
            ConfigGenError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_defaults_are_clean() {
        let report = validate(&Builder::new().build()).unwrap();
        assert!(report.is_clean(), "{:?}", report.warnings());
    }

    #[test]
    fn test_mode_conflict() {
        let mut b = Builder::new();
        b.modes = ModeFlags {
            rl_compat: true,
            batch: true,
            validate_only: false,
        };
        assert!(matches!(
            validate(&b.build()),
            Err(ConfigGenError::ModeConflict(_))
        ));
    }

    #[test]
    fn test_non_positive_scale_fails() {
        for scale in [0.0, -1.0, f64::NAN] {
            let mut b = Builder::new();
            b.scale = scale;
            assert_eq!(field_of(validate(&b.build()).unwrap_err()), "agents scale");
        }
    }

    #[test]
    fn test_extreme_scale_warns() {
        let mut b = Builder::new();
        b.scale = 20.0;
        assert!(validate(&b.build()).unwrap().has_warning_for("agents scale"));

        let mut b = Builder::new();
        b.scale = 0.005;
        assert!(validate(&b.build()).unwrap().has_warning_for("agents scale"));
    }

    #[test]
    fn test_malformed_date_fails() {
        for date in ["2020/06/03", "June 3rd", "2020-13-01", ""] {
            let mut b = Builder::new();
            b.market.market_date = date.to_string();
            assert_eq!(field_of(validate(&b.build()).unwrap_err()), "market date");
        }
    }

    #[test]
    fn test_date_year_range() {
        let mut b = Builder::new();
        b.market.market_date = "1989-12-31".into();
        assert!(validate(&b.build()).is_err());

        // generated_at is 2025, so 2026 is the last accepted year
        let mut b = Builder::new();
        b.market.market_date = "2026-12-31".into();
        assert!(validate(&b.build()).is_ok());

        let mut b = Builder::new();
        b.market.market_date = "2027-01-01".into();
        assert!(validate(&b.build()).is_err());
    }

    #[test]
    fn test_malformed_time_fails() {
        let mut b = Builder::new();
        b.market.market_open = "9.30".into();
        assert_eq!(
            field_of(validate(&b.build()).unwrap_err()),
            "market open time"
        );

        let mut b = Builder::new();
        b.market.market_close = "25:00:00".into();
        assert_eq!(
            field_of(validate(&b.build()).unwrap_err()),
            "market close time"
        );
    }

    #[test]
    fn test_unusual_hours_warn() {
        let mut b = Builder::new();
        b.market.market_open = "03:00:00".into();
        b.market.market_close = "23:00:00".into();
        let report = validate(&b.build()).unwrap();
        assert!(report.has_warning_for("market open time"));
        assert!(report.has_warning_for("market close time"));
    }

    #[test]
    fn test_close_before_open_warns() {
        let mut b = Builder::new();
        b.market.market_open = "16:00:00".into();
        b.market.market_close = "09:30:00".into();
        assert!(
            validate(&b.build())
                .unwrap()
                .has_warning_for("market close time")
        );
    }

    #[test]
    fn test_negative_count_fails_with_kind() {
        let mut b = Builder::new();
        b.counts.value_agents = -1;
        let err = validate(&b.build()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid Value count '-1': must be non-negative"
        );
    }

    #[test]
    fn test_large_count_warns() {
        let mut b = Builder::new();
        b.counts.noise_agents = 10_001;
        let report = validate(&b.build()).unwrap();
        assert!(report.has_warning_for("Noise count"));

        let mut b = Builder::new();
        b.counts.noise_agents = 10_000;
        assert!(validate(&b.build()).unwrap().is_clean());
    }

    #[test]
    fn test_count_beyond_id_range_fails_with_kind() {
        let mut b = Builder::new();
        b.counts.noise_agents = 5_000_000_000;
        let err = validate(&b.build()).unwrap_err();
        assert_eq!(field_of(err), "Noise count");
    }

    #[test]
    fn test_population_beyond_id_range_fails() {
        let mut b = Builder::new();
        b.counts.noise_agents = 3_000_000_000;
        b.counts.value_agents = 2_000_000_000;
        let err = validate(&b.build()).unwrap_err();
        assert_eq!(field_of(err), "total agents");

        // One market maker plus the exchange fill the rest of the range
        let mut b = Builder::new();
        b.counts.noise_agents = MAX_POPULATION - 2;
        assert!(validate(&b.build()).is_ok());

        let mut b = Builder::new();
        b.counts.noise_agents = MAX_POPULATION - 1;
        assert_eq!(field_of(validate(&b.build()).unwrap_err()), "total agents");
    }

    #[test]
    fn test_cash_rules() {
        let mut b = Builder::new();
        b.market.starting_cash = -1;
        assert_eq!(field_of(validate(&b.build()).unwrap_err()), "starting cash");

        for cash in [0, 99_999, 10_000_000_001] {
            let mut b = Builder::new();
            b.market.starting_cash = cash;
            let report = validate(&b.build()).unwrap();
            assert!(report.has_warning_for("starting cash"), "cash {cash}");
        }

        for cash in [100_000, 10_000_000_000] {
            let mut b = Builder::new();
            b.market.starting_cash = cash;
            assert!(validate(&b.build()).unwrap().is_clean(), "cash {cash}");
        }
    }

    #[test]
    fn test_symbol_rules() {
        for symbol in ["", "AB'C", "A B"] {
            let mut b = Builder::new();
            b.market.symbol = symbol.to_string();
            assert_eq!(field_of(validate(&b.build()).unwrap_err()), "symbol");
        }

        let mut b = Builder::new();
        b.market.symbol = "BRK.B".into();
        assert!(validate(&b.build()).is_ok());
    }

    #[test]
    fn test_scale_checked_before_counts() {
        let mut b = Builder::new();
        b.scale = -2.0;
        b.counts.noise_agents = -5;
        assert_eq!(field_of(validate(&b.build()).unwrap_err()), "agents scale");
    }
}
