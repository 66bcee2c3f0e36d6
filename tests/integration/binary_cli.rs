//! Integration tests that run the tidycli binary end to end.

use std::fs;
use tempfile::TempDir;

use crate::integration::test_utils::{run_tidycli, stderr_of, stdout_of};

#[test]
fn test_no_arguments_prints_usage() {
    let home = TempDir::new().unwrap();
    let output = run_tidycli(home.path(), &[]);

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("Usage: tidycli [OPTIONS] COMMAND [arg...]\n"));
    assert!(stdout.contains("Options:\n"));
    assert!(stdout.contains("-v, --verbose"));
    assert!(stdout.contains("\nCommands:\n"));
    assert!(stdout.contains("  version "));
}

#[test]
fn test_version_command() {
    let home = TempDir::new().unwrap();
    let output = run_tidycli(home.path(), &["version"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output).trim_end(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_args_command_reports_classification() {
    let home = TempDir::new().unwrap();
    let output = run_tidycli(
        home.path(),
        &["--quiet", "args", "-n", "5", "-v", "--format", "json"],
    );

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value["command"], "args");
    assert_eq!(value["args_map"]["n"], "5");
    assert_eq!(value["args_map"]["v"], "");
    assert_eq!(value["args"].as_array().unwrap().len(), 5);
}

#[test]
fn test_explicit_config_adds_commands() {
    let home = TempDir::new().unwrap();
    let config_file = home.path().join("ship.toml");
    fs::write(
        &config_file,
        r#"
[app]
name = "ship"
version = "v9.1.0"
description = "Ship releases"

[app.commands]
deploy = "Deploy a build"
"#,
    )
    .unwrap();
    let config_arg = config_file.to_string_lossy().to_string();

    let usage = run_tidycli(home.path(), &["--config", &config_arg]);
    let stdout = stdout_of(&usage);
    assert!(stdout.starts_with("Usage: ship [OPTIONS] COMMAND [arg...]\n\nShip releases\n"));
    assert!(stdout.contains("Deploy a build"));

    let version = run_tidycli(home.path(), &["--config", &config_arg, "version"]);
    assert_eq!(stdout_of(&version).trim_end(), "9.1.0");

    let deploy = run_tidycli(home.path(), &["--config", &config_arg, "deploy", "--env", "prod"]);
    assert!(deploy.status.success(), "stderr={}", stderr_of(&deploy));
    let stdout = stdout_of(&deploy);
    assert!(stdout.starts_with("command\tdeploy"));
    assert!(stdout.lines().any(|l| l.starts_with("env ") && l.contains("\tprod")));
}

#[test]
fn test_missing_config_file_fails() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("nope.toml");
    let output = run_tidycli(home.path(), &["--config", &missing.to_string_lossy(), "version"]);

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Configuration error"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_global_config_file_is_read() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("config").join("tidycli");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[app]\nname = \"globalname\"\n\n[app.commands]\nsync = \"Sync things\"\n",
    )
    .unwrap();

    let output = run_tidycli(home.path(), &["help"]);
    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("Usage: globalname "));
    assert!(stdout.contains("Sync things"));
}

#[test]
fn test_log_file_receives_events() {
    let home = TempDir::new().unwrap();
    let log_file = home.path().join("logs").join("tidycli.log");
    let output = run_tidycli(
        home.path(),
        &[
            "--log-level",
            "info",
            "--log-file",
            &log_file.to_string_lossy(),
            "flags",
        ],
    );

    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    assert!(stdout_of(&output).starts_with("NAME"));
    let content = fs::read_to_string(&log_file).unwrap();
    assert!(content.contains("tidycli starting"));
}

#[test]
fn test_unknown_global_flag_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    let output = run_tidycli(home.path(), &["--bogus", "args"]);
    assert!(!output.status.success());
}
