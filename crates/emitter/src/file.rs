use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use configgen_core::Section;
use configgen_ports::{ArtifactSink, ConfigGenError, Result};

use crate::order::SectionOrder;

/// Writes the artifact to a file, one append per section
///
/// The file is opened and closed for every section; a failure part way
/// leaves a partial artifact behind.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    order: SectionOrder,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            order: SectionOrder::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ArtifactSink for FileSink {
    fn reset(&mut self) -> Result<()> {
        self.order.clear();
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::debug!("Removed previous artifact {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ConfigGenError::write(&self.path, e)),
        }
    }

    fn append(&mut self, section: &Section) -> Result<()> {
        self.order.admit(section.kind())?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ConfigGenError::write(&self.path, e))?;
        file.write_all(section.body().as_bytes())
            .map_err(|e| ConfigGenError::write(&self.path, e))?;

        log::debug!(
            "Appended {} ({} bytes) to {}",
            section.kind(),
            section.len(),
            self.path.display()
        );
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
