use configgen_core::{Section, SectionKind};
use configgen_ports::{ArtifactSink, Result};

use crate::order::SectionOrder;

/// Collects the artifact in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    text: String,
    kinds: Vec<SectionKind>,
    order: SectionOrder,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Kinds appended since the last reset
    pub fn kinds(&self) -> &[SectionKind] {
        &self.kinds
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl ArtifactSink for MemorySink {
    fn reset(&mut self) -> Result<()> {
        self.text.clear();
        self.kinds.clear();
        self.order.clear();
        Ok(())
    }

    fn append(&mut self, section: &Section) -> Result<()> {
        self.order.admit(section.kind())?;
        self.text.push_str(section.body());
        self.kinds.push(section.kind());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use configgen_ports::ConfigGenError;

    #[test]
    fn test_concatenates_in_order() {
        let mut sink = MemorySink::new();
        sink.append(&Section::new(SectionKind::Imports, "a\n")).unwrap();
        sink.append(&Section::new(SectionKind::Kernel, "b\n")).unwrap();

        assert_eq!(sink.text(), "a\nb\n");
        assert_eq!(sink.kinds(), &[SectionKind::Imports, SectionKind::Kernel]);
    }

    #[test]
    fn test_out_of_order_rejected() {
        let mut sink = MemorySink::new();
        sink.append(&Section::new(SectionKind::Kernel, "b\n")).unwrap();

        let err = sink
            .append(&Section::new(SectionKind::Imports, "a\n"))
            .unwrap_err();
        assert!(matches!(err, ConfigGenError::Internal(_)));
        assert_eq!(sink.text(), "b\n");
    }

    #[test]
    fn test_reset_starts_over() {
        let mut sink = MemorySink::new();
        sink.append(&Section::new(SectionKind::Imports, "a\n")).unwrap();
        sink.reset().unwrap();
        sink.append(&Section::new(SectionKind::Imports, "c\n")).unwrap();

        assert_eq!(sink.into_text(), "c\n");
    }
}
