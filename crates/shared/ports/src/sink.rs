use configgen_core::Section;

use crate::error::Result;

/// Port for the destination of generated sections
///
/// Contract:
/// - `reset` discards any prior artifact and runs before the first append
/// - `append` accepts sections in strictly increasing `SectionKind` order,
///   each at most once
pub trait ArtifactSink {
    /// Discard any previous artifact
    fn reset(&mut self) -> Result<()>;

    /// Append one section
    fn append(&mut self, section: &Section) -> Result<()>;

    /// Human-readable destination for logging
    fn describe(&self) -> String;
}
