//! tidycli binary
//!
//! Parses global options, loads configuration, initializes logging, then
//! hands the argument vector to the façade and prints the selected command's
//! output.

use clap::{CommandFactory, FromArgMatches};
use std::process;
use tidycli::cli::{command_table, map_error, Cli, RunContext};
use tidycli::config::{ConfigLoader, TidyConfig};
use tidycli::logging::{init_logging, LoggingConfig};
use tidycli::{App, FlagRegistry};
use tracing::{error, info};

fn main() {
    let raw_args: Vec<String> = std::env::args().collect();

    let command = Cli::command();
    let matches = command
        .clone()
        .try_get_matches_from(&raw_args)
        .unwrap_or_else(|e| e.exit());
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!(app = %config.app.name, "tidycli starting");

    let registry = FlagRegistry::from_clap(&command, &matches);
    let mut app = App::from_config(&config.app);
    app.commands = command_table(&config.app.commands);
    app.init(&raw_args, registry);

    let context = RunContext::new(app, cli);
    match context.execute() {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

fn load_config(cli: &Cli) -> Result<TidyConfig, tidycli::CliError> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Build logging configuration from CLI args and the config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &TidyConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if cli.quiet {
        logging.level = "off".to_string();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
        if cli.log_output.is_none() {
            logging.output = "file".to_string();
        }
    }

    logging
}
