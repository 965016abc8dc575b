//! Configgen Core Domain
//!
//! Pure domain types for the simulation configuration generator.
//! This crate contains no I/O and is 100% unit testable.

pub mod context;
pub mod defaults;
pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use context::{GenerationContext, IdAllocator};
pub use entities::{
    // Agent population
    AgentCounts,
    AgentKind,
    AgentParams,
    AgentTypeSpec,
    // Inputs
    GeneratorInput,
    MarketParams,
    ModeFlags,
    PartialAgentCounts,
    PartialMarketParams,
    // Resolution output
    ResolvedConfig,
    // Output
    Section,
    SectionKind,
    // Presets
    Template,
    TemplateMarket,
};
pub use values::{AgentId, Cents, Symbol, Timestamp};
