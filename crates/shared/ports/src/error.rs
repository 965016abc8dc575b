use std::path::PathBuf;
use thiserror::Error;

/// Every hard failure the generator can report
#[derive(Error, Debug)]
pub enum ConfigGenError {
    #[error("Unknown template '{name}'. Available templates: {}", .available.join(", "))]
    TemplateNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("Invalid {field} '{value}': {reason}")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid filename: {0}")]
    Filename(String),

    #[error("Failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Conflicting modes: {0}")]
    ModeConflict(String),

    #[error("Internal consistency error: {0}")]
    Internal(String),
}

impl ConfigGenError {
    pub fn validation(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        ConfigGenError::Validation {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigGenError::Write {
            path: path.into(),
            source,
        }
    }

    /// True for failures caused by the caller's input
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigGenError::TemplateNotFound { .. }
                | ConfigGenError::Validation { .. }
                | ConfigGenError::Filename(_)
                | ConfigGenError::ModeConflict(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ConfigGenError>;
