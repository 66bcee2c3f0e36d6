//! CLI route: dispatch the classified subcommand to its handler.

use crate::app::App;
use crate::cli::help::BuiltinCommand;
use crate::cli::parse::Cli;
use crate::cli::presentation::{
    format_classification_json, format_classification_text, format_flags_text,
};
use crate::error::CliError;
use tracing::{debug, info};

/// Everything a handler needs: the initialized façade and the global options.
pub struct RunContext {
    app: App,
    cli: Cli,
}

impl RunContext {
    pub fn new(app: App, cli: Cli) -> Self {
        Self { app, cli }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Run the selected command and return its stdout text.
    pub fn execute(&self) -> Result<String, CliError> {
        if self.cli.help {
            return Ok(self.app.usage_text());
        }
        if self.cli.version {
            return Ok(self.app.version_text(false));
        }

        let command = self.app.sub_command.as_str();
        if command.is_empty() {
            debug!("No subcommand given; printing usage");
            return Ok(self.app.usage_text());
        }

        info!(command, "Dispatching subcommand");
        match BuiltinCommand::from_name(command) {
            Some(BuiltinCommand::Help) => Ok(self.app.usage_text()),
            Some(BuiltinCommand::Version) => Ok(self.app.version_text(self.has_arg("extra"))),
            Some(BuiltinCommand::Flags) => format_flags_text(self.app.registry()),
            Some(BuiltinCommand::Args) | None => self.show_classification(),
        }
    }

    fn has_arg(&self, key: &str) -> bool {
        self.app.sub_command_args_map.contains_key(key)
    }

    fn show_classification(&self) -> Result<String, CliError> {
        let classified = self.app.classified();
        let format = self
            .app
            .sub_command_args_map
            .get("format")
            .map(String::as_str)
            .unwrap_or("text");
        match format {
            "json" => format_classification_json(&classified),
            _ => format_classification_text(&classified),
        }
    }
}
