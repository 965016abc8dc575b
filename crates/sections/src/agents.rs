use configgen_core::values::format_dollars;
use configgen_core::{AgentParams, GenerationContext, ResolvedConfig, Section, SectionKind};
use configgen_ports::{Result, SectionGenerator};

use crate::population::{AgentGroup, Population};
use crate::script::{Script, py_bool, quoted};

const RANDOM_STATE: &str =
    "random_state=np.random.RandomState(seed=np.random.randint(0, 2**32, dtype='uint64')),";

/// Exchange, every non-empty agent kind with literal id ranges, and a summary
#[derive(Debug, Default, Clone, Copy)]
pub struct AgentsSection;

impl SectionGenerator for AgentsSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Agents
    }

    fn generate(
        &self,
        config: &ResolvedConfig,
        ctx: &mut GenerationContext,
    ) -> Result<Option<Section>> {
        let population = Population::allocate(config, ctx.ids_mut())?;
        let cash = config.starting_cash();

        let mut script = Script::new(SectionKind::Agents);
        script
            .banner()
            .line("agents = []")
            .line(format!(
                "starting_cash = {cash}  # {} per agent",
                format_dollars(cash, 2)
            ))
            .blank();

        exchange(&mut script, population.exchange_id);
        for group in &population.groups {
            agent_group(&mut script, group)?;
        }

        script
            .line(format!("agent_count = {}", population.total()))
            .blank();
        summary(&mut script, &population, cash);

        log::info!(
            "Placed {} agents ({} trading) across {} kinds",
            population.total(),
            population.trading_agents(),
            population.groups.len()
        );
        Ok(Some(script.finish()))
    }
}

fn exchange(script: &mut Script, id: u32) {
    script
        .line("# Exchange")
        .line("agents.append(")
        .line("    ExchangeAgent(")
        .line(format!("        id={id},"))
        .line("        name='EXCHANGE_AGENT',")
        .line("        type='ExchangeAgent',")
        .line("        mkt_open=mkt_open,")
        .line("        mkt_close=mkt_close,")
        .line("        symbols=[symbol],")
        .line("        log_orders=False,")
        .line("        pipeline_delay=0,")
        .line("        computation_delay=0,")
        .line("        stream_history=10,")
        .line("        book_freq=0,")
        .line(format!("        {RANDOM_STATE}"))
        .line("    )")
        .line(")")
        .blank();
}

fn agent_group(script: &mut Script, group: &AgentGroup) -> Result<()> {
    let kind = group.spec.kind;
    let class = kind.class_name();

    script.line(format!("# {} agents ({})", kind.display_name(), group.spec.count));
    if let AgentParams::Noise {
        wake_open,
        wake_close,
    } = &group.spec.params
    {
        script
            .line(format!(
                "noise_mkt_open = historical_date + pd.to_timedelta({})",
                quoted("noise wake open", wake_open)?
            ))
            .line(format!(
                "noise_mkt_close = historical_date + pd.to_timedelta({})",
                quoted("noise wake close", wake_close)?
            ));
    }

    script
        .line("agents.extend([")
        .line(format!("    {class}("))
        .line("        id=j,")
        .line(format!("        name=f'{}_{{j}}',", kind.name_prefix()))
        .line(format!("        type='{class}',"))
        .line("        symbol=symbol,")
        .line("        starting_cash=starting_cash,");
    for kwarg in params_kwargs(&group.spec.params)? {
        script.line(format!("        {kwarg},"));
    }
    if !matches!(group.spec.params, AgentParams::Value) {
        script.line("        log_orders=False,");
    }
    script
        .line(format!("        {RANDOM_STATE}"))
        .line("    )")
        .line(format!(
            "    for j in range({}, {})",
            group.ids.start, group.ids.end
        ))
        .line("])")
        .blank();
    Ok(())
}

/// Kind-specific constructor arguments
fn params_kwargs(params: &AgentParams) -> Result<Vec<String>> {
    let kwargs = match params {
        AgentParams::MarketMaker { min_size, max_size } => {
            vec![format!("min_size={min_size}"), format!("max_size={max_size}")]
        }
        AgentParams::AdaptiveMarketMaker {
            pov,
            min_order_size,
            window_size,
            num_ticks,
            wake_up_freq,
            subscribe,
        } => vec![
            format!("pov={pov}"),
            format!("min_order_size={min_order_size}"),
            format!("window_size={window_size}"),
            format!("num_ticks={num_ticks}"),
            format!(
                "wake_up_freq=str_to_ns({})",
                quoted("wake up frequency", wake_up_freq)?
            ),
            format!("subscribe={}", py_bool(*subscribe)),
        ],
        AgentParams::Noise { .. } => {
            vec!["wakeup_time=util.get_wake_time(noise_mkt_open, noise_mkt_close)".to_string()]
        }
        AgentParams::ZeroIntelligence | AgentParams::Value => Vec::new(),
        AgentParams::Momentum {
            min_size,
            max_size,
            wake_up_freq,
            poisson_arrival,
            subscribe,
        } => vec![
            format!("min_size={min_size}"),
            format!("max_size={max_size}"),
            format!(
                "wake_up_freq=str_to_ns({})",
                quoted("wake up frequency", wake_up_freq)?
            ),
            format!("poisson_arrival={}", py_bool(*poisson_arrival)),
            format!("subscribe={}", py_bool(*subscribe)),
        ],
    };
    Ok(kwargs)
}

fn summary(script: &mut Script, population: &Population, cash: i64) {
    script
        .line(r#"print("\nAgents:")"#)
        .line(r#"print(f"  total:         {agent_count}")"#)
        .line(r#"print("  exchange:      1")"#);
    for group in &population.groups {
        let label = format!("{}:", group.spec.kind.display_name());
        script.line(format!(
            r#"print("  {label:<22} {}")"#,
            group.spec.count
        ));
    }
    script
        .line(format!(
            r#"print("  starting cash: {} per agent")"#,
            format_dollars(cash, 2)
        ))
        .line("total_market_cap = starting_cash * agent_count")
        .line(r#"print(f"  market cap:    ${total_market_cap / 100:,.2f}\n")"#)
        .blank();
}
