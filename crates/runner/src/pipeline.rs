//! Pipeline - one invocation from raw input to artifact

use std::path::{Path, PathBuf};
use std::sync::Arc;

use configgen_clock::SystemClock;
use configgen_core::{GenerationContext, GeneratorInput, ResolvedConfig, SectionKind};
use configgen_emitter::FileSink;
use configgen_ports::{ArtifactSink, Clock, Result, SectionGenerator};
use configgen_resolver::{ValidationReport, resolve, validate};
use configgen_sections::{default_generators, generate_sections};

use crate::target::OutputRequest;

/// What an invocation did
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Validate-only mode: resolved and checked, nothing written
    Validated {
        config: ResolvedConfig,
        report: ValidationReport,
    },
    /// Batch mode requested: not implemented, nothing written
    BatchUnsupported { config: ResolvedConfig },
    /// Artifact written
    Generated {
        path: PathBuf,
        sections: Vec<SectionKind>,
        /// Trading agents, exchange excluded
        total_agents: i64,
        config: ResolvedConfig,
    },
}

/// Resolve, validate, generate and emit
pub struct Pipeline {
    clock: Arc<dyn Clock>,
    generators: Vec<Box<dyn SectionGenerator>>,
}

impl Pipeline {
    /// Pipeline with the standard generators
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_generators(clock, default_generators())
    }

    /// Pipeline on the wall clock
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock::new()))
    }

    pub fn with_generators(
        clock: Arc<dyn Clock>,
        generators: Vec<Box<dyn SectionGenerator>>,
    ) -> Self {
        Self { clock, generators }
    }

    /// Resolve the input and validate it; warnings are logged
    pub fn prepare(&self, input: &GeneratorInput) -> Result<(ResolvedConfig, ValidationReport)> {
        let config = resolve(input, self.clock.as_ref())?;
        let report = validate(&config)?;
        report.log();
        log::debug!(
            "Resolved {} trading agents on {} (clock: {})",
            config.total_agents(),
            config.market().market_date,
            self.clock.name()
        );
        Ok((config, report))
    }

    /// Full invocation writing to a file
    ///
    /// Nothing on disk changes unless resolution, validation, naming and
    /// every generator succeed.
    pub fn run(&self, input: &GeneratorInput, output: &OutputRequest) -> Result<Outcome> {
        let (config, report) = self.prepare(input)?;
        let target = output.plan(&config)?;

        let modes = config.modes();
        if modes.validate_only {
            log::info!("Configuration valid; validate-only mode, nothing written");
            return Ok(Outcome::Validated { config, report });
        }
        if modes.batch {
            log::warn!("Batch mode is not implemented; nothing written");
            return Ok(Outcome::BatchUnsupported { config });
        }

        target.prepare()?;
        let mut sink = FileSink::new(target.path());
        let sections = self.emit(&config, target.path(), &mut sink)?;

        log::info!(
            "Generated {} with {} trading agents",
            target.path().display(),
            config.total_agents()
        );
        Ok(Outcome::Generated {
            path: target.path().to_path_buf(),
            sections,
            total_agents: config.total_agents(),
            config,
        })
    }

    /// Generate every section for `artifact` and write them to `sink`
    ///
    /// All sections are generated before the sink is reset, so a generator
    /// failure leaves any previous artifact in place.
    pub fn emit(
        &self,
        config: &ResolvedConfig,
        artifact: &Path,
        sink: &mut dyn ArtifactSink,
    ) -> Result<Vec<SectionKind>> {
        let mut ctx = GenerationContext::new(artifact);
        let sections = generate_sections(&self.generators, config, &mut ctx)?;

        sink.reset()?;
        for section in &sections {
            sink.append(section)?;
        }
        log::debug!("Wrote {} sections to {}", sections.len(), sink.describe());

        Ok(sections.iter().map(|s| s.kind()).collect())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::system()
    }
}
