//! CLI parse: clap types for the global options. No behavior; definitions only.
//!
//! Parsing stops at the first positional token. That token and everything
//! after it are kept raw in `rest`; the façade classifies them.

use clap::Parser;
use std::path::PathBuf;

/// tidycli - subcommand-aware argument classification and tidy usage output
#[derive(Parser, Debug, Clone)]
#[command(name = "tidycli")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Configuration file path (overrides the user-level config file)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Disable logging
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print usage and exit
    #[arg(short = 'h', long)]
    pub help: bool,

    /// Print version and exit
    #[arg(long)]
    pub version: bool,

    /// Subcommand and its arguments
    #[arg(num_args = 1.., trailing_var_arg = true, hide = true)]
    pub rest: Vec<String>,
}
