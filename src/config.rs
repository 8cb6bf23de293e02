//! Configuration System
//!
//! Layered configuration: built-in defaults, the global config file, the
//! workspace config file, then `BINDSYNC__*` environment variables. The result
//! is an explicit value passed to each batch run.

use crate::batch::{BatchOptions, FailurePolicy, NamingPattern};
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod defaults;
mod facade;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::{workspace_config_path, WORKSPACE_CONFIG_FILE};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BindsyncConfig {
    #[serde(default)]
    pub batch: BatchSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Batch behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSettings {
    /// Output file name template; `{base}` is the target's stem
    #[serde(default)]
    pub naming_pattern: NamingPattern,

    /// Ask for an output file (one target) or folder (several) instead of
    /// writing beside each target
    #[serde(default)]
    pub ask_where_to_save: bool,

    /// halt or continue when a target fails
    #[serde(default)]
    pub on_error: FailurePolicy,
}

impl BatchSettings {
    pub fn options(&self) -> BatchOptions {
        BatchOptions {
            pattern: self.naming_pattern.clone(),
            on_error: self.on_error,
        }
    }
}

/// Settings for the interactive front end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Message language ("en" or "fr"); detected from the locale when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Directory listed when picking files interactively
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_dir: Option<PathBuf>,
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Logging(String),
    Ui(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
            ValidationError::Ui(msg) => write!(f, "UI: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl BindsyncConfig {
    /// Validate the entire configuration. The naming pattern is checked when deserialized.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if let Some(language) = &self.ui.language {
            if !matches!(language.as_str(), "en" | "fr") {
                errors.push(ValidationError::Ui(format!(
                    "Unsupported language '{}' (must be 'en' or 'fr')",
                    language
                )));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
