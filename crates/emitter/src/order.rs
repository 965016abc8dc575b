use configgen_core::SectionKind;
use configgen_ports::{ConfigGenError, Result};

/// Tracks the last accepted section kind
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SectionOrder {
    last: Option<SectionKind>,
}

impl SectionOrder {
    /// Accept `kind` if it comes strictly after the last one
    pub(crate) fn admit(&mut self, kind: SectionKind) -> Result<()> {
        match self.last {
            Some(last) if kind <= last => {
                return Err(ConfigGenError::Internal(format!(
                    "section {kind} appended after {last}"
                )));
            }
            _ => {}
        }
        self.last = Some(kind);
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.last = None;
    }
}
