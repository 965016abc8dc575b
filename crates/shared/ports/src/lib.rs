//! Configgen Ports
//!
//! Port definitions (traits) for the configuration generator.
//! These define the boundaries between pipeline logic and infrastructure.

mod clock;
mod error;
mod generator;
mod sink;

pub use clock::Clock;
pub use error::{ConfigGenError, Result};
pub use generator::SectionGenerator;
pub use sink::ArtifactSink;
