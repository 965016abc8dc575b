use chrono::{NaiveDate, NaiveTime};
use configgen_core::defaults::{DATE_FORMAT, TIME_FORMAT};
use configgen_core::{GenerationContext, ResolvedConfig, Section, SectionKind};
use configgen_ports::{ConfigGenError, Result, SectionGenerator};

use crate::script::{Script, quoted};

/// Fundamental-value process parameters: (key, literal, meaning)
pub const FUNDAMENTAL_PARAMS: [(&str, &str, &str); 8] = [
    ("r_bar", "1e5", "long-run mean fundamental value"),
    ("kappa", "1.67e-12", "mean reversion strength"),
    ("agent_kappa", "1.67e-15", "mean reversion as believed by agents"),
    ("sigma_s", "0", "shock variance"),
    ("fund_vol", "1e-4", "fundamental volatility"),
    ("megashock_lambda_a", "2.77778e-13", "megashock arrival rate"),
    ("megashock_mean", "1e3", "megashock mean magnitude"),
    ("megashock_var", "5e4", "megashock variance"),
];

const ORACLE_BANNER: &str = r#"print("Market:")
print(f"  symbol:        {symbol}")
print(f"  date:          {historical_date.strftime('%Y-%m-%d (%A)')}")
print(f"  trading hours: {mkt_open.strftime('%H:%M:%S')} - {mkt_close.strftime('%H:%M:%S')}")
print(f"  duration:      {mkt_close - mkt_open}\n")
"#;

/// Market date, hours, symbol and the mean-reverting fundamental oracle
#[derive(Debug, Default, Clone, Copy)]
pub struct OracleSection;

impl SectionGenerator for OracleSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Oracle
    }

    fn generate(
        &self,
        config: &ResolvedConfig,
        _ctx: &mut GenerationContext,
    ) -> Result<Option<Section>> {
        let market = config.market();
        let date = NaiveDate::parse_from_str(&market.market_date, DATE_FORMAT)
            .map_err(|e| unparsable("market date", &market.market_date, e))?;
        let open = NaiveTime::parse_from_str(&market.market_open, TIME_FORMAT)
            .map_err(|e| unparsable("market open", &market.market_open, e))?;
        let close = NaiveTime::parse_from_str(&market.market_close, TIME_FORMAT)
            .map_err(|e| unparsable("market close", &market.market_close, e))?;
        let symbol = quoted("symbol", config.symbol())?;

        let mut script = Script::new(SectionKind::Oracle);
        script
            .banner()
            .line(format!(
                "historical_date = pd.to_datetime('{}')",
                date.format(DATE_FORMAT)
            ))
            .line(format!("symbol = {symbol}"))
            .line(format!(
                "mkt_open = historical_date + pd.to_timedelta('{}')",
                open.format(TIME_FORMAT)
            ))
            .line(format!(
                "mkt_close = historical_date + pd.to_timedelta('{}')",
                close.format(TIME_FORMAT)
            ))
            .blank()
            .block(ORACLE_BANNER)
            .blank()
            .line("symbols = {")
            .line("    symbol: {");
        for (key, literal, meaning) in FUNDAMENTAL_PARAMS {
            script.line(format!("        '{key}': {literal},  # {meaning}"));
        }
        script
            .line("        'random_state': np.random.RandomState(seed=np.random.randint(0, 2**32, dtype='uint64')),")
            .line("    }")
            .line("}")
            .blank()
            .line("oracle = SparseMeanRevertingOracle(mkt_open, mkt_close, symbols)")
            .blank();

        Ok(Some(script.finish()))
    }
}

fn unparsable(field: &str, value: &str, err: chrono::ParseError) -> ConfigGenError {
    ConfigGenError::Internal(format!("{field} '{value}' reached generation unparsed: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{resolved, resolved_with};
    use configgen_core::{GeneratorInput, PartialMarketParams};

    #[test]
    fn test_embeds_market_literals() {
        let config = resolved("rmsc04");
        let mut ctx = GenerationContext::new("a.py");

        let section = OracleSection.generate(&config, &mut ctx).unwrap().unwrap();
        let body = section.body();

        assert!(body.contains("historical_date = pd.to_datetime('2021-02-05')"));
        assert!(body.contains("symbol = 'ABM'"));
        assert!(body.contains("mkt_open = historical_date + pd.to_timedelta('09:30:00')"));
        assert!(body.contains("mkt_close = historical_date + pd.to_timedelta('10:00:00')"));
        assert!(body.contains("oracle = SparseMeanRevertingOracle(mkt_open, mkt_close, symbols)"));
    }

    #[test]
    fn test_fundamental_parameters_are_fixed() {
        let config = resolved("minimal");
        let mut ctx = GenerationContext::new("a.py");

        let section = OracleSection.generate(&config, &mut ctx).unwrap().unwrap();
        let body = section.body();

        assert!(body.contains("'r_bar': 1e5,"));
        assert!(body.contains("'kappa': 1.67e-12,"));
        assert!(body.contains("'agent_kappa': 1.67e-15,"));
        assert!(body.contains("'sigma_s': 0,"));
        assert!(body.contains("'fund_vol': 1e-4,"));
        assert!(body.contains("'megashock_lambda_a': 2.77778e-13,"));
        assert!(body.contains("'megashock_mean': 1e3,"));
        assert!(body.contains("'megashock_var': 5e4,"));
    }

    #[test]
    fn test_unparsable_time_is_internal() {
        let input = GeneratorInput {
            market: PartialMarketParams {
                market_open: Some("9:30".into()),
                ..Default::default()
            },
            ..GeneratorInput::from_template("minimal")
        };
        // Skips the validator on purpose
        let config = resolved_with(input);
        let mut ctx = GenerationContext::new("a.py");

        let err = OracleSection.generate(&config, &mut ctx).unwrap_err();
        assert!(matches!(err, ConfigGenError::Internal(_)));
    }
}
