//! Argument classification
//!
//! Splits a raw process argument vector into the selected subcommand, the
//! arguments that follow it, and a flag-style lookup map derived from those
//! arguments. Global flags that precede the subcommand are not captured here;
//! they belong to the flag registry.
//!
//! Classification never fails. Odd shapes (a flag followed by a flag, a bare
//! `--`, stray positionals) degrade into map entries with empty values.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::BuildHasher;
use tracing::{debug, trace};

/// Set of recognized subcommand names.
///
/// Implemented for the common set containers and for maps keyed by command
/// name (the façade keeps `name -> description`).
pub trait KnownCommands {
    fn is_command(&self, token: &str) -> bool;
}

impl<V> KnownCommands for BTreeMap<String, V> {
    fn is_command(&self, token: &str) -> bool {
        self.contains_key(token)
    }
}

impl<V, S: BuildHasher> KnownCommands for HashMap<String, V, S> {
    fn is_command(&self, token: &str) -> bool {
        self.contains_key(token)
    }
}

impl KnownCommands for BTreeSet<String> {
    fn is_command(&self, token: &str) -> bool {
        self.contains(token)
    }
}

impl<S: BuildHasher> KnownCommands for HashSet<String, S> {
    fn is_command(&self, token: &str) -> bool {
        self.contains(token)
    }
}

impl<S: BuildHasher> KnownCommands for HashSet<&str, S> {
    fn is_command(&self, token: &str) -> bool {
        self.contains(token)
    }
}

impl KnownCommands for [&str] {
    fn is_command(&self, token: &str) -> bool {
        self.iter().any(|name| *name == token)
    }
}

impl<const N: usize> KnownCommands for [&str; N] {
    fn is_command(&self, token: &str) -> bool {
        self[..].is_command(token)
    }
}

/// Result of classifying a raw argument vector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classified {
    /// Selected subcommand; empty when none matched
    pub command: String,
    /// Tokens after the selected subcommand, command names excluded
    pub args: Vec<String>,
    /// Flag-style view of `args`
    pub args_map: BTreeMap<String, String>,
}

impl Classified {
    pub fn has_command(&self) -> bool {
        !self.command.is_empty()
    }
}

/// Classify `raw_args` (program name at index 0) against `known_commands`.
///
/// The last known command in the vector wins. Arguments collected after an
/// earlier command are discarded when a later command overwrites it, so
/// `args` only ever holds what follows the final selection.
pub fn classify<S, K>(raw_args: &[S], known_commands: &K) -> Classified
where
    S: AsRef<str>,
    K: KnownCommands + ?Sized,
{
    let mut classified = Classified::default();
    if raw_args.len() <= 1 {
        return classified;
    }

    for token in raw_args.iter().map(AsRef::as_ref) {
        if known_commands.is_command(token) {
            if classified.has_command() {
                debug!(
                    previous = %classified.command,
                    selected = token,
                    dropped_args = classified.args.len(),
                    "Subcommand overwritten by later match"
                );
            }
            classified.command = token.to_string();
            classified.args.clear();
        } else if classified.has_command() {
            classified.args.push(token.to_string());
        } else {
            trace!(token, "Discarding token before subcommand");
        }
    }

    classified.args_map = map_args(&classified.args);

    debug!(
        command = %classified.command,
        args = classified.args.len(),
        keys = classified.args_map.len(),
        "Arguments classified"
    );
    classified
}

/// Lookahead state while mapping arguments.
enum Pending {
    None,
    Flag(String),
}

/// Build the flag-style map from subcommand arguments.
///
/// `-n 5 -v hello` maps to `{n: "5", v: "hello"}`; `-v -n 5` maps to
/// `{v: "", n: "5"}`; a positional with no pending flag becomes a key with an
/// empty value. Tokens made only of dashes are ignored and clear any pending
/// flag.
pub fn map_args<S: AsRef<str>>(args: &[S]) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    let mut pending = Pending::None;

    for token in args.iter().map(AsRef::as_ref) {
        if token.starts_with('-') {
            let name = token.trim_start_matches('-');
            if name.is_empty() {
                pending = Pending::None;
            } else {
                map.insert(name.to_string(), String::new());
                pending = Pending::Flag(name.to_string());
            }
            continue;
        }

        match std::mem::replace(&mut pending, Pending::None) {
            Pending::Flag(name) => {
                map.insert(name, token.to_string());
            }
            Pending::None => {
                map.insert(token.to_string(), String::new());
            }
        }
    }

    map
}
