//! Section generators
//!
//! Each generator produces one ordered block of the simulation script from a
//! [`ResolvedConfig`]. Generators never write anything themselves; the caller
//! hands the sections to an `ArtifactSink` in order.

pub mod agents;
pub mod bootstrap;
pub mod imports;
pub mod kernel;
pub mod oracle;
pub mod population;
pub mod rl_layer;
mod script;

pub use agents::AgentsSection;
pub use bootstrap::BootstrapSection;
pub use imports::ImportsSection;
pub use kernel::KernelSection;
pub use oracle::OracleSection;
pub use population::{AgentGroup, Population};
pub use rl_layer::RlLayerSection;

use configgen_core::{GenerationContext, ResolvedConfig, Section};
use configgen_ports::{ConfigGenError, Result, SectionGenerator};

/// The six generators in emission order
pub fn default_generators() -> Vec<Box<dyn SectionGenerator>> {
    vec![
        Box::new(ImportsSection),
        Box::new(BootstrapSection),
        Box::new(OracleSection),
        Box::new(AgentsSection),
        Box::new(KernelSection),
        Box::new(RlLayerSection),
    ]
}

/// Run `generators` in order and collect the sections they emit
///
/// A generator must return a section of its own kind.
pub fn generate_sections(
    generators: &[Box<dyn SectionGenerator>],
    config: &ResolvedConfig,
    ctx: &mut GenerationContext,
) -> Result<Vec<Section>> {
    let mut sections = Vec::with_capacity(generators.len());
    for generator in generators {
        let Some(section) = generator.generate(config, ctx)? else {
            log::debug!("Section {} skipped", generator.kind());
            continue;
        };
        if section.kind() != generator.kind() {
            return Err(ConfigGenError::Internal(format!(
                "{} generator produced a {} section",
                generator.kind(),
                section.kind()
            )));
        }
        log::debug!("Section {} generated ({} bytes)", section.kind(), section.len());
        sections.push(section);
    }
    Ok(sections)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::resolved;
    use configgen_core::SectionKind;

    #[test]
    fn test_default_generators_are_ordered() {
        let kinds: Vec<SectionKind> = default_generators().iter().map(|g| g.kind()).collect();
        assert_eq!(kinds, SectionKind::ALL.to_vec());
    }

    #[test]
    fn test_generate_sections_skips_rl_layer() {
        let config = resolved("minimal");
        let mut ctx = GenerationContext::new("a.py");

        let sections = generate_sections(&default_generators(), &config, &mut ctx).unwrap();

        let kinds: Vec<SectionKind> = sections.iter().map(Section::kind).collect();
        assert_eq!(kinds, SectionKind::ALL[..5].to_vec());
    }
}
