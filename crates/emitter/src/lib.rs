//! Artifact sinks
//!
//! Both sinks accept each [`SectionKind`](configgen_core::SectionKind) at
//! most once and in increasing order, so the artifact is always the ordered
//! concatenation of its sections.

mod file;
mod memory;
mod order;

pub use file::FileSink;
pub use memory::MemorySink;
