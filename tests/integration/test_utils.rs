//! Shared test utilities for integration tests
//!
//! Runs the built binary with an isolated config home so the user's own
//! configuration and logging variables never leak into assertions.

use std::path::Path;
use std::process::{Command, Output};

/// Run `tidycli` with `args`, using `home` as both HOME and XDG_CONFIG_HOME.
pub fn run_tidycli(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tidycli"))
        .env("HOME", home.as_os_str())
        .env("XDG_CONFIG_HOME", home.join("config").as_os_str())
        .env_remove("TIDYCLI_LOG")
        .env_remove("TIDYCLI_LOG_FORMAT")
        .env_remove("TIDYCLI_LOG_OUTPUT")
        .env_remove("TIDYCLI_LOG_MODULES")
        .args(args)
        .output()
        .unwrap()
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
