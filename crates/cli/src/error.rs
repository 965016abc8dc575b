use std::path::PathBuf;

use configgen_ports::ConfigGenError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Cannot read config file {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Generate(#[from] ConfigGenError),

    #[error("Cannot render resolved configuration: {0}")]
    Render(#[from] serde_json::Error),
}

impl CliError {
    /// True when the caller can fix the failure by changing the input
    pub fn is_user_error(&self) -> bool {
        match self {
            CliError::ReadConfig { .. } | CliError::ParseConfig { .. } => true,
            CliError::Generate(err) => err.is_user_error(),
            CliError::Render(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
