//! Per-invocation generation state handed to every section generator.

use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::values::AgentId;

/// Hands out contiguous agent identifiers
///
/// Identifier 0 is reserved for the exchange agent; every later reservation
/// continues from the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdAllocator {
    next: AgentId,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the exchange identifier; `None` if anything was issued already
    pub fn reserve_exchange(&mut self) -> Option<AgentId> {
        if self.next != 0 {
            return None;
        }
        self.next = 1;
        Some(0)
    }

    /// Reserve `count` identifiers following the last reservation;
    /// `None` if they would run past the identifier range
    pub fn reserve(&mut self, count: u32) -> Option<Range<AgentId>> {
        let start = self.next;
        self.next = start.checked_add(count)?;
        Some(start..self.next)
    }

    /// Identifiers issued so far (including the exchange)
    pub fn issued(&self) -> u32 {
        self.next
    }
}

/// Explicit handle passed into every generator call
#[derive(Debug, Clone)]
pub struct GenerationContext {
    artifact: PathBuf,
    ids: IdAllocator,
}

impl GenerationContext {
    pub fn new(artifact: impl Into<PathBuf>) -> Self {
        Self {
            artifact: artifact.into(),
            ids: IdAllocator::new(),
        }
    }

    /// Path of the artifact being generated
    pub fn artifact(&self) -> &Path {
        &self.artifact
    }

    /// File name of the artifact, e.g. `my_config.py`
    pub fn artifact_file_name(&self) -> String {
        self.artifact
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File name without extension, e.g. `my_config`
    pub fn artifact_stem(&self) -> String {
        self.artifact
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn ids(&self) -> &IdAllocator {
        &self.ids
    }

    pub fn ids_mut(&mut self) -> &mut IdAllocator {
        &mut self.ids
    }
}
