use std::fs;
use std::path::{Path, PathBuf};

use configgen_core::ResolvedConfig;
use configgen_ports::{ConfigGenError, Result};

use crate::naming::{default_config_name, sanitize_filename};

/// Where the caller wants the artifact: a directory and an optional name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRequest {
    pub dir: PathBuf,
    pub name: Option<String>,
}

impl OutputRequest {
    pub fn new(dir: impl Into<PathBuf>, name: Option<String>) -> Self {
        Self {
            dir: dir.into(),
            name,
        }
    }

    /// Bind the request to a concrete path without touching the filesystem
    pub fn plan(&self, config: &ResolvedConfig) -> Result<OutputTarget> {
        let name = match &self.name {
            Some(name) => name.clone(),
            None => default_config_name(config),
        };
        OutputTarget::plan(&self.dir, &name)
    }
}

impl Default for OutputRequest {
    fn default() -> Self {
        Self::new(".", None)
    }
}

/// Artifact path, bound once per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    dir: PathBuf,
    path: PathBuf,
}

impl OutputTarget {
    /// Sanitize `name`, create `dir` and join them
    pub fn new(dir: impl AsRef<Path>, name: &str) -> Result<Self> {
        let target = Self::plan(dir, name)?;
        target.prepare()?;
        Ok(target)
    }

    /// Sanitize `name` and join it onto `dir`; no filesystem access
    pub fn plan(dir: impl AsRef<Path>, name: &str) -> Result<Self> {
        let file_name = sanitize_filename(name)?;
        let dir = dir.as_ref().to_path_buf();
        let path = dir.join(file_name);
        Ok(Self { dir, path })
    }

    /// Create the output directory unless it is the working directory
    pub fn prepare(&self) -> Result<()> {
        if self.dir.as_os_str().is_empty() || self.dir == Path::new(".") {
            return Ok(());
        }
        fs::create_dir_all(&self.dir).map_err(|e| ConfigGenError::write(&self.dir, e))?;
        log::debug!("Output directory {} ready", self.dir.display());
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
