use serde::Serialize;
use std::fmt;

/// One ordered block of the generated script
///
/// The declaration order is the emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SectionKind {
    Imports,
    Bootstrap,
    Oracle,
    Agents,
    Kernel,
    /// Optional, emitted only in RL-compatibility mode
    RlLayer,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Imports,
        SectionKind::Bootstrap,
        SectionKind::Oracle,
        SectionKind::Agents,
        SectionKind::Kernel,
        SectionKind::RlLayer,
    ];

    /// Banner heading used inside the generated script
    pub fn heading(&self) -> &'static str {
        match self {
            SectionKind::Imports => "IMPORTS",
            SectionKind::Bootstrap => "GENERAL CONFIGURATION",
            SectionKind::Oracle => "ORACLE CONFIGURATION",
            SectionKind::Agents => "AGENTS CONFIGURATION",
            SectionKind::Kernel => "SIMULATION KERNEL & EXECUTION",
            SectionKind::RlLayer => "RL ENVIRONMENT INTEGRATION",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

/// Immutable generated text block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    kind: SectionKind,
    body: String,
}

impl Section {
    pub fn new(kind: SectionKind, body: impl Into<String>) -> Self {
        Self {
            kind,
            body: body.into(),
        }
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
