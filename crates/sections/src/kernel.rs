use configgen_core::defaults::{
    DEFAULT_COMPUTATION_DELAY_NS, GEOGRAPHIC_SPAN_METERS, KERNEL_STOP_BUFFER,
};
use configgen_core::{GenerationContext, ResolvedConfig, Section, SectionKind};
use configgen_ports::{ConfigGenError, Result, SectionGenerator};

use crate::script::Script;

const LATENCY_MODEL: &str = r#"latency_rstate = np.random.RandomState(seed=np.random.randint(0, 2**32))
pairwise_distances = util.generate_uniform_random_pairwise_dist_on_line(
    0.0, geographic_span_meters, agent_count, random_state=latency_rstate
)
pairwise_latencies = util.meters_to_light_ns(pairwise_distances)
latency_model = LatencyModel(
    latency_model='deterministic',
    random_state=latency_rstate,
    kwargs={'connected': True, 'min_latency': pairwise_latencies},
)
"#;

const RUN_SIMULATION: &str = r#"def run_simulation():
    """Build the kernel and run the configured market day."""
    kernel = Kernel(
        args.config,
        random_state=np.random.RandomState(seed=np.random.randint(0, 2**32, dtype='uint64')),
    )

    print("Kernel:")
    print(f"  start:             {kernel_start_time.strftime('%Y-%m-%d %H:%M:%S')}")
    print(f"  stop:              {kernel_stop_time.strftime('%Y-%m-%d %H:%M:%S')}")
    print(f"  latency span:      {geographic_span_meters:,} m, deterministic")
    print(f"  computation delay: {default_computation_delay} ns\n")

    try:
        kernel.runner(
            agents=agents,
            startTime=kernel_start_time,
            stopTime=kernel_stop_time,
            agentLatencyModel=latency_model,
            defaultComputationDelay=default_computation_delay,
            oracle=oracle,
            log_dir=log_dir,
        )
    except Exception as e:
        logging.error(f"Simulation failed: {e}", exc_info=True)
        return False
    return True


if __name__ == "__main__":
    success = run_simulation()

    simulation_end_time = dt.datetime.now()
    duration = simulation_end_time - simulation_start_time

    print("=" * 60)
    print("Simulation completed" if success else "Simulation completed with errors")
    print("=" * 60)
    print(f"End time:       {simulation_end_time.strftime('%Y-%m-%d %H:%M:%S')}")
    print(f"Execution time: {duration}")
    if duration.total_seconds() > 0:
        print(f"Throughput:     {agent_count / duration.total_seconds():.2f} agents/second")
    if log_dir:
        print(f"Logs:           {log_dir}")
    print(f"Configuration:  {args.config}")
    print(f"Agents:         {agent_count}")
    print(f"Symbol:         {symbol}")
    print(f"Seed:           {seed}")
    print("=" * 60)
"#;

/// Kernel timing, latency model and the simulation entry point
///
/// Timing, latency model and computation delay live at module level so the
/// RL layer can hand them to an external harness.
#[derive(Debug, Default, Clone, Copy)]
pub struct KernelSection;

impl SectionGenerator for KernelSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Kernel
    }

    fn generate(
        &self,
        config: &ResolvedConfig,
        ctx: &mut GenerationContext,
    ) -> Result<Option<Section>> {
        let issued = i64::from(ctx.ids().issued());
        let expected = config.total_agents() + 1;
        if issued != expected {
            return Err(ConfigGenError::Internal(format!(
                "agent id counter at {issued}, expected {expected} before the kernel"
            )));
        }

        let mut script = Script::new(SectionKind::Kernel);
        script
            .banner()
            .line("kernel_start_time = historical_date")
            .line(format!(
                "kernel_stop_time = mkt_close + pd.to_timedelta('{KERNEL_STOP_BUFFER}')"
            ))
            .line(format!(
                "default_computation_delay = {DEFAULT_COMPUTATION_DELAY_NS}  # ns"
            ))
            .blank()
            .line("# Agents spread uniformly along the NYC to Seattle line")
            .line(format!("geographic_span_meters = {GEOGRAPHIC_SPAN_METERS}"))
            .block(LATENCY_MODEL)
            .blank()
            .blank()
            .block(RUN_SIMULATION)
            .blank();

        Ok(Some(script.finish()))
    }
}
