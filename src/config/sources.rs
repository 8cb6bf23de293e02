//! Configuration sources layered on top of the defaults.

pub mod global_file;
pub mod workspace_file;

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

/// `BINDSYNC__BATCH__ON_ERROR=continue` sets `batch.on_error`.
pub fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("BINDSYNC")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
