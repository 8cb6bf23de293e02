//! Output naming pattern: a template with a `{base}` placeholder.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder replaced by the target's file stem.
pub const BASE_PLACEHOLDER: &str = "{base}";

pub const DEFAULT_NAMING_PATTERN: &str = "{base}_mybind.json";

/// Validated naming pattern. Always contains `{base}` and never a path separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NamingPattern(String);

impl NamingPattern {
    pub fn new(template: impl Into<String>) -> Result<Self, ApiError> {
        let template = template.into();
        if !template.contains(BASE_PLACEHOLDER) {
            return Err(ApiError::InvalidPattern(format!(
                "'{}' must contain {}",
                template, BASE_PLACEHOLDER
            )));
        }
        if template.contains('/') || template.contains('\\') {
            return Err(ApiError::InvalidPattern(format!(
                "'{}' must be a file name, not a path",
                template
            )));
        }
        Ok(Self(template))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitute every `{base}` with `stem`.
    pub fn render(&self, stem: &str) -> String {
        self.0.replace(BASE_PLACEHOLDER, stem)
    }
}

impl Default for NamingPattern {
    fn default() -> Self {
        Self(DEFAULT_NAMING_PATTERN.to_string())
    }
}

impl TryFrom<String> for NamingPattern {
    type Error = ApiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NamingPattern> for String {
    fn from(pattern: NamingPattern) -> Self {
        pattern.0
    }
}

impl fmt::Display for NamingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
