//! CLI output: error mapping from library errors to stable CLI surface.

use crate::error::CliError;

/// Map library errors to a string for CLI output.
pub fn map_error(e: &CliError) -> String {
    format!("error: {}", e)
}
