//! Config loader: assembles defaults, files and environment into a `TidyConfig`.

use crate::config::merge::builder_with_defaults;
use crate::config::sources::{env, explicit_file, global_file};
use crate::config::TidyConfig;
use crate::error::CliError;
use std::path::Path;
use tracing::debug;

/// Loads configuration with the standard precedence (lowest first):
/// defaults, file, environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from the user-level config file (if present) and the environment.
    pub fn load() -> Result<TidyConfig, CliError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = env::add_to_builder(builder);
        Self::finish(builder)
    }

    /// Load from `path` (which must exist) and the environment.
    /// The user-level file is not consulted.
    pub fn load_from_file(path: &Path) -> Result<TidyConfig, CliError> {
        let builder = builder_with_defaults()?;
        let builder = explicit_file::add_to_builder(builder, path)?;
        let builder = env::add_to_builder(builder);
        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<TidyConfig, CliError> {
        let config: TidyConfig = builder.build()?.try_deserialize()?;
        config.app.validate().map_err(CliError::ConfigError)?;
        debug!(
            name = %config.app.name,
            extra_commands = config.app.commands.len(),
            "Configuration loaded"
        );
        Ok(config)
    }
}
