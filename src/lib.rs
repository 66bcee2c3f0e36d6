//! tidycli: subcommand-aware argument classification for command-line tools
//!
//! Splits a process argument vector into global flags, a selected subcommand
//! and that subcommand's arguments, and renders tidy usage/version text and
//! column-aligned tables.

pub mod app;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod flags;
pub mod logging;
pub mod table;

pub use app::App;
pub use classify::{classify, map_args, Classified, KnownCommands};
pub use error::{CliError, TableError};
pub use flags::{Flag, FlagRegistry};
pub use table::Table;
