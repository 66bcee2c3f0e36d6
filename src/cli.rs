//! CLI domain: parse, route, help, output, and presentation only.
//! Global options come from clap; the subcommand part goes through the façade.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_table, BuiltinCommand};
pub use output::map_error;
pub use parse::Cli;
pub use presentation::{
    format_classification_json, format_classification_text, format_flags_text,
};
pub use route::RunContext;
