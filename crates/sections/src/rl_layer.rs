use configgen_core::{GenerationContext, ResolvedConfig, Section, SectionKind};
use configgen_ports::{Result, SectionGenerator};

use crate::script::Script;

const BACKGROUND_CONFIG: &str = r#"# Background market for an external RL harness (ABIDES-Gym)
def create_background_config():
    """Everything except the exchange, which the harness provides."""
    return {
        'start_time': kernel_start_time,
        'stop_time': kernel_stop_time,
        'agents': agents[1:],
        'agent_latency_model': latency_model,
        'default_computation_delay': default_computation_delay,
        'oracle': oracle,
        'stdout_log_level': 'INFO',
    }


background_config = create_background_config()
"#;

/// Background-config export; emitted only in RL-compatibility mode
#[derive(Debug, Default, Clone, Copy)]
pub struct RlLayerSection;

impl SectionGenerator for RlLayerSection {
    fn kind(&self) -> SectionKind {
        SectionKind::RlLayer
    }

    fn generate(
        &self,
        config: &ResolvedConfig,
        _ctx: &mut GenerationContext,
    ) -> Result<Option<Section>> {
        if !config.modes().rl_compat {
            return Ok(None);
        }

        let mut script = Script::new(SectionKind::RlLayer);
        script.banner().block(BACKGROUND_CONFIG).blank();
        Ok(Some(script.finish()))
    }
}
