use configgen_core::{GenerationContext, ResolvedConfig, Section, SectionKind};

use crate::error::Result;

/// Port for one producer of generated script text
///
/// Implementations are pure functions of the resolved configuration and the
/// generation context (artifact handle and agent-id counter).
pub trait SectionGenerator {
    /// Which section this generator produces
    fn kind(&self) -> SectionKind;

    /// Produce the section, or `None` when it does not apply to this config
    fn generate(
        &self,
        config: &ResolvedConfig,
        ctx: &mut GenerationContext,
    ) -> Result<Option<Section>>;
}
