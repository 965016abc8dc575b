//! Small text builder shared by the generators.

use configgen_core::{Section, SectionKind};
use configgen_ports::{ConfigGenError, Result};

/// Accumulates the lines of one section
pub(crate) struct Script {
    kind: SectionKind,
    buf: String,
}

impl Script {
    pub(crate) fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            buf: String::new(),
        }
    }

    /// `###### HEADING ######` followed by a blank line
    pub(crate) fn banner(&mut self) -> &mut Self {
        let heading = self.kind.heading();
        self.line(format!("###### {heading} ######")).blank()
    }

    pub(crate) fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
        self
    }

    pub(crate) fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Append a verbatim multi-line block; it must end with a newline
    pub(crate) fn block(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(text);
        self
    }

    pub(crate) fn finish(self) -> Section {
        Section::new(self.kind, self.buf)
    }
}

/// Single-quoted Python string literal
///
/// Values reaching the generators have been validated; a character that
/// would break out of the literal means the config is inconsistent.
pub(crate) fn quoted(field: &str, value: &str) -> Result<String> {
    if value.chars().any(|c| matches!(c, '\'' | '\\' | '\n' | '\r')) {
        return Err(ConfigGenError::Internal(format!(
            "{field} {value:?} cannot be embedded in a string literal"
        )));
    }
    Ok(format!("'{value}'"))
}

/// Python boolean literal
pub(crate) fn py_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_and_lines() {
        let mut script = Script::new(SectionKind::Oracle);
        script.banner().line("x = 1");
        let section = script.finish();

        assert_eq!(section.kind(), SectionKind::Oracle);
        assert_eq!(section.body(), "###### ORACLE CONFIGURATION ######\n\nx = 1\n");
    }

    #[test]
    fn test_quoted() {
        assert_eq!(quoted("symbol", "ABM").unwrap(), "'ABM'");
        assert!(matches!(
            quoted("symbol", "A'B"),
            Err(ConfigGenError::Internal(_))
        ));
        assert!(quoted("symbol", "A\\B").is_err());
    }

    #[test]
    fn test_py_bool() {
        assert_eq!(py_bool(true), "True");
        assert_eq!(py_bool(false), "False");
    }
}
