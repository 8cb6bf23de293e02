//! Config loading facade: the only place layers are assembled.

use super::defaults::builder_with_defaults;
use super::sources::{add_environment, global_file, workspace_file};
use super::BindsyncConfig;
use crate::error::ApiError;
use config::File;
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, global file, `<workspace_root>/bindsync.toml`, environment.
    pub fn load(workspace_root: &Path) -> Result<BindsyncConfig, ApiError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder);
        let builder = workspace_file::add_to_builder(builder, workspace_root);
        let builder = add_environment(builder);
        Self::finish(builder.build()?)
    }

    /// Defaults, the given file (required), environment.
    pub fn load_from_file(path: &Path) -> Result<BindsyncConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = builder_with_defaults()?.add_source(File::from(path).required(true));
        let builder = add_environment(builder);
        Self::finish(builder.build()?)
    }

    fn finish(raw: config::Config) -> Result<BindsyncConfig, ApiError> {
        let config: BindsyncConfig = raw.try_deserialize()?;
        config.validate().map_err(|errors| {
            ApiError::ConfigError(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;
        Ok(config)
    }
}
