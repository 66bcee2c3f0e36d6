//! CLI façade
//!
//! `App` ties the pieces together for a front end: it knows the program's
//! name, version, description and subcommands, classifies the argument
//! vector at startup, keeps the global flag values, and renders usage and
//! version text.

mod help;

use crate::classify::{classify, Classified};
use crate::config::AppConfig;
use crate::flags::FlagRegistry;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct App {
    /// Program name shown in usage text
    pub name: String,
    pub version: String,
    pub description: String,
    /// Subcommand name -> description
    pub commands: BTreeMap<String, String>,
    /// Subcommand selected at init; empty when none
    pub sub_command: String,
    /// Arguments following the selected subcommand
    pub sub_command_args: Vec<String>,
    /// Flag-style view of `sub_command_args`
    pub sub_command_args_map: BTreeMap<String, String>,
    /// Global flag name -> current value
    pub flags: BTreeMap<String, String>,
    registry: FlagRegistry,
}

impl App {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_command(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.commands.insert(name.into(), description.into());
        self
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let mut app = Self::new(&config.name, &config.version, &config.description);
        app.commands = config.commands.clone();
        app
    }

    /// Record the global flags and classify `raw_args` (program name first).
    ///
    /// Runs once at startup; classification itself never fails.
    pub fn init<S: AsRef<str>>(&mut self, raw_args: &[S], registry: FlagRegistry) {
        self.flags = registry.values();
        self.registry = registry;

        let Classified {
            command,
            args,
            args_map,
        } = classify(raw_args, &self.commands);
        self.sub_command = command;
        self.sub_command_args = args;
        self.sub_command_args_map = args_map;

        debug!(
            app = %self.name,
            sub_command = %self.sub_command,
            flags = self.flags.len(),
            "App initialized"
        );
    }

    pub fn registry(&self) -> &FlagRegistry {
        &self.registry
    }

    /// Classification captured by [`App::init`].
    pub fn classified(&self) -> Classified {
        Classified {
            command: self.sub_command.clone(),
            args: self.sub_command_args.clone(),
            args_map: self.sub_command_args_map.clone(),
        }
    }
}
