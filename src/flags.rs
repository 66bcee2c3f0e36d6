//! Global flag registry
//!
//! Holds every global flag the front end knows about: its current value, its
//! usage text and its default. The usage printer and the façade read flags
//! from here instead of from process-wide state. A registry can be filled by
//! hand or derived from a clap `Command` and the `ArgMatches` it produced.

use crate::error::CliError;
use clap::{ArgMatches, Command};
use serde::Serialize;
use std::collections::BTreeMap;
use std::ffi::OsStr;
use tracing::{debug, trace};

/// A single global flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flag {
    pub name: String,
    pub value: String,
    pub usage: String,
    pub default_value: String,
    /// Hidden flags stay queryable but are left out of usage text
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
}

/// Flags keyed by name, iterated in lexicographic name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagRegistry {
    flags: BTreeMap<String, Flag>,
}

impl FlagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a flag whose current value starts out as its default.
    /// Registering an existing name replaces the previous entry.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        usage: impl Into<String>,
        default_value: impl Into<String>,
    ) -> &mut Self {
        let name = name.into();
        let default_value = default_value.into();
        self.flags.insert(
            name.clone(),
            Flag {
                name,
                value: default_value.clone(),
                usage: usage.into(),
                default_value,
                hidden: false,
            },
        );
        self
    }

    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<(), CliError> {
        let flag = self
            .flags
            .get_mut(name)
            .ok_or_else(|| CliError::UnknownFlag(name.to_string()))?;
        flag.value = value.into();
        Ok(())
    }

    pub fn hide(&mut self, name: &str) -> Result<(), CliError> {
        let flag = self
            .flags
            .get_mut(name)
            .ok_or_else(|| CliError::UnknownFlag(name.to_string()))?;
        flag.hidden = true;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Flag> {
        self.flags.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flag> {
        self.flags.values()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Current value of every flag, by name.
    pub fn values(&self) -> BTreeMap<String, String> {
        self.flags
            .values()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }

    /// Build a registry from a clap command and the matches it produced.
    ///
    /// Each non-positional argument is registered under its long name, its
    /// short name and each visible alias, all sharing one usage string so
    /// the usage printer groups them on a single line.
    pub fn from_clap(command: &Command, matches: &ArgMatches) -> Self {
        let mut command = command.clone();
        command.build();

        let mut registry = Self::new();
        for arg in command.get_arguments().filter(|a| !a.is_positional()) {
            let id = arg.get_id().as_str();
            let usage = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
            let default_value = arg
                .get_default_values()
                .iter()
                .map(|v| OsStr::to_string_lossy(v.as_ref()).into_owned())
                .collect::<Vec<_>>()
                .join(",");
            let value = match matches.try_get_raw(id) {
                Ok(Some(raw)) => raw
                    .map(|v| v.to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join(","),
                Ok(None) => default_value.clone(),
                Err(e) => {
                    trace!(flag = id, error = %e, "No matched value; using default");
                    default_value.clone()
                }
            };

            let mut names: Vec<String> = Vec::new();
            if let Some(long) = arg.get_long() {
                names.push(long.to_string());
            }
            if let Some(short) = arg.get_short() {
                names.push(short.to_string());
            }
            if let Some(aliases) = arg.get_visible_aliases() {
                names.extend(aliases.into_iter().map(str::to_string));
            }

            for name in names {
                registry.flags.insert(
                    name.clone(),
                    Flag {
                        name,
                        value: value.clone(),
                        usage: usage.clone(),
                        default_value: default_value.clone(),
                        hidden: arg.is_hide_set(),
                    },
                );
            }
        }

        debug!(flags = registry.len(), "Flag registry built from clap command");
        registry
    }
}
