//! Configuration System
//!
//! Layered configuration for the tidycli front end: built-in defaults, an
//! optional user-level file, an optional explicit file and `TIDYCLI__*`
//! environment overrides. Describes the program (name, version, description,
//! extra subcommands) and its logging.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TidyConfig {
    /// Program description used by the façade
    #[serde(default)]
    pub app: AppConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Program description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default = "default_description")]
    pub description: String,

    /// Extra subcommands (name -> description)
    #[serde(default)]
    pub commands: BTreeMap<String, String>,
}

fn default_name() -> String {
    "tidycli".to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_description() -> String {
    "Subcommand-aware argument classification and tidy usage output".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            description: default_description(),
            commands: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    /// Validate the program description
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("App name cannot be empty".to_string());
        }
        if let Some(name) = self.commands.keys().find(|c| c.is_empty() || c.starts_with('-')) {
            return Err(format!(
                "Invalid command name '{}': must be non-empty and not start with '-'",
                name
            ));
        }
        Ok(())
    }
}
