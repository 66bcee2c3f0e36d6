//! CLI help: built-in subcommands and their names for routing.

use std::collections::BTreeMap;

/// Subcommands the binary always understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinCommand {
    Help,
    Version,
    Args,
    Flags,
}

impl BuiltinCommand {
    pub const ALL: [BuiltinCommand; 4] = [
        BuiltinCommand::Help,
        BuiltinCommand::Version,
        BuiltinCommand::Args,
        BuiltinCommand::Flags,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuiltinCommand::Help => "help",
            BuiltinCommand::Version => "version",
            BuiltinCommand::Args => "args",
            BuiltinCommand::Flags => "flags",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            BuiltinCommand::Help => "Print usage information",
            BuiltinCommand::Version => "Print the version (--extra adds build target)",
            BuiltinCommand::Args => "Show how the arguments were classified (--format json)",
            BuiltinCommand::Flags => "List global flags with their current values",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Built-in commands merged with configured ones; configured descriptions win.
pub fn command_table(configured: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    let mut commands: BTreeMap<String, String> = BuiltinCommand::ALL
        .into_iter()
        .map(|c| (c.name().to_string(), c.description().to_string()))
        .collect();
    commands.extend(configured.iter().map(|(k, v)| (k.clone(), v.clone())));
    commands
}
