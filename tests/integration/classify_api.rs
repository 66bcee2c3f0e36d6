//! Integration tests for argument classification through the public API.

use std::collections::{BTreeMap, HashSet};
use tidycli::{classify, map_args, App, Classified, FlagRegistry};

fn map_of(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_short_vectors_yield_nothing() {
    let known: HashSet<String> = ["run".to_string()].into_iter().collect();
    let empty: Vec<String> = Vec::new();
    assert_eq!(classify(&empty, &known), Classified::default());
    assert_eq!(classify(&["run"], &known), Classified::default());
}

#[test]
fn test_overwritten_command_loses_its_args() {
    let classified = classify(&["p", "foo", "x", "bar", "y"], &["foo", "bar"]);
    assert_eq!(classified.command, "bar");
    assert_eq!(classified.args, vec!["y"]);
}

#[test]
fn test_global_flags_are_not_residuals() {
    let argv = ["tool", "--config", "a.toml", "-q", "deploy", "--env", "prod", "-f"];
    let classified = classify(&argv, &["deploy"]);
    assert_eq!(classified.command, "deploy");
    assert_eq!(classified.args, vec!["--env", "prod", "-f"]);
    assert_eq!(classified.args_map, map_of(&[("env", "prod"), ("f", "")]));
}

#[test]
fn test_second_distinct_command_is_dropped_from_residuals() {
    let classified = classify(&["p", "build", "--release", "test", "--all"], &["build", "test"]);
    assert_eq!(classified.command, "test");
    assert_eq!(classified.args, vec!["--all"]);
    assert!(!classified.args.iter().any(|a| a == "build"));
}

#[test]
fn test_map_args_mixed_shapes() {
    let map = map_args(&["file.txt", "-o", "out", "--", "-x", "-y", "1", "tail"]);
    assert_eq!(
        map,
        map_of(&[
            ("file.txt", ""),
            ("o", "out"),
            ("x", ""),
            ("y", "1"),
            ("tail", ""),
        ])
    );
}

#[test]
fn test_app_init_matches_classify() {
    let argv = ["demo", "-v", "run", "--threads", "4", "job"];
    let mut app = App::new("demo", "1.0.0", "")
        .with_command("run", "Run a job")
        .with_command("list", "List jobs");
    app.init(&argv, FlagRegistry::new());

    let direct = classify(&argv, &app.commands);
    assert_eq!(app.classified(), direct);
    assert_eq!(
        app.sub_command_args_map,
        map_of(&[("threads", "4"), ("job", "")])
    );
}
