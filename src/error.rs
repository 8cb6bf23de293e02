//! Error types for bindsync.

use std::path::PathBuf;
use thiserror::Error;

/// Document-level errors: reading, parsing, and writing a single JSON file.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Root value must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Errors surfaced by the batch resolver and the CLI boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Cannot load '{}': {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    #[error("Cannot save '{}': {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    #[error("No target documents given")]
    NoTargets,

    #[error("Nothing selected: {0}")]
    NoSelection(String),

    #[error("Invalid naming pattern: {0}")]
    InvalidPattern(String),

    #[error("{source} ({} output(s) already written)", .completed.len())]
    Halted {
        completed: Vec<PathBuf>,
        #[source]
        source: Box<ApiError>,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ApiError {
    /// The innermost error, looking through `Halted`.
    pub fn root(&self) -> &ApiError {
        match self {
            ApiError::Halted { source, .. } => source.root(),
            other => other,
        }
    }

    /// Outputs already written before a halted batch stopped.
    pub fn completed(&self) -> &[PathBuf] {
        match self {
            ApiError::Halted { completed, .. } => completed,
            _ => &[],
        }
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
