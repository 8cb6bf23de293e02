//! Built-in defaults: the lowest configuration layer.

use crate::batch::DEFAULT_NAMING_PATTERN;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("batch.naming_pattern", DEFAULT_NAMING_PATTERN)?
        .set_default("batch.ask_where_to_save", false)?
        .set_default("batch.on_error", "halt")
}
