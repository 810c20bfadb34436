// envpick: Namespace-Aware Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envpick.
//!
//! # Document Shape
//!
//! ```text
//! [dev]                 full name "dev"       (default namespace)
//! API_URL = "..."
//!
//! [db.local]            full name "db.local"  (namespace "db")
//! DB_HOST = "localhost"
//! _web_url = "..."      metadata, never exported
//! ```
//!
//! # Flattening
//!
//! ```text
//! raw toml::Table
//!       |
//!       v
//!  classify each top-level table:
//!    all scalar values  -> leaf config under its own key
//!    nested tables      -> namespace; inner tables become "outer.inner"
//!  deeper nesting is not supported and is skipped with a warning
//! ```
//!
//! The flattened map never contains a bare namespace key: `[db.local]`
//! yields `db.local` but no config named `db`.

pub mod name;
pub mod paths;
pub mod state;

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, BTreeSet};

use toml::{Table, Value};
use tracing::warn;

use crate::error::ConfigError;

use name::parse_config_name;
use paths::Paths;

/// Prefix marking a variable as metadata (excluded from exports).
pub const METADATA_PREFIX: char = '_';

/// Metadata key carrying the optional web URL of a config.
pub const WEB_URL_KEY: &str = "_web_url";

/// Variables of one configuration, keyed by variable name.
pub type Variables = BTreeMap<String, String>;

/// The flattened configuration document.
///
/// Keys are full configuration names (`dev`, `db.local`), values the
/// key/value variables of that configuration. `BTreeMap` keeps every
/// enumeration deterministic given the same source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Full config name -> variables.
    pub configs: BTreeMap<String, Variables>,
}

impl Config {
    /// Loads and flattens the configuration document at `paths`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] (with guidance text) when the file
    /// is absent, [`ConfigError::ReadError`] on I/O failure, and
    /// [`ConfigError::ParseError`] on malformed TOML.
    pub fn load(paths: &Paths) -> Result<Self, ConfigError> {
        let path = paths.config_file();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound {
                    path: path.display().to_string(),
                });
            }
            Err(e) => {
                return Err(ConfigError::ReadError {
                    path: path.display().to_string(),
                    source: e,
                });
            }
        };

        Self::parse(&content).map_err(|message| ConfigError::ParseError {
            path: path.display().to_string(),
            message,
        })
    }

    /// Parses and flattens a configuration document from a string.
    ///
    /// # Errors
    ///
    /// Returns the TOML parse error message on malformed input.
    pub fn parse(content: &str) -> Result<Self, String> {
        let table: Table = content.parse().map_err(|e: toml::de::Error| e.to_string())?;
        Ok(Self::from_table(&table))
    }

    /// Flattens a raw decoded document into the uniform full-name map.
    #[must_use]
    pub fn from_table(table: &Table) -> Self {
        let mut configs = BTreeMap::new();

        for (key, value) in table {
            let Value::Table(inner) = value else {
                warn!(key = %key, "ignoring non-table top-level entry");
                continue;
            };

            if is_leaf_config(inner) {
                configs.insert(key.clone(), collect_variables(key, inner));
                continue;
            }

            // Namespace table: one extra nesting level, no recursion beyond it.
            for (inner_key, inner_value) in inner {
                let full = format!("{key}.{inner_key}");
                match inner_value {
                    Value::Table(vars) => {
                        let collected = collect_variables(&full, vars);
                        configs.insert(full, collected);
                    }
                    _ => warn!(key = %full, "ignoring scalar entry inside namespace table"),
                }
            }
        }

        Self { configs }
    }

    /// Returns the configurations of one namespace, keyed by short name.
    ///
    /// For the default namespace (`""`) this is every entry without a dot
    /// in its name, keyed by the full name itself.
    #[must_use]
    pub fn namespace_configs(&self, namespace: &str) -> BTreeMap<&str, &Variables> {
        self.configs
            .iter()
            .filter_map(|(full, vars)| {
                let (ns, short) = parse_config_name(full);
                (ns == namespace).then_some((short, vars))
            })
            .collect()
    }

    /// The set of distinct namespaces across all configurations.
    ///
    /// Includes `""` when any entry lives in the default namespace.
    #[must_use]
    pub fn namespaces(&self) -> BTreeSet<&str> {
        self.configs
            .keys()
            .map(|full| parse_config_name(full).0)
            .collect()
    }

    /// Whether a full configuration name exists in the document.
    #[must_use]
    pub fn contains(&self, full_name: &str) -> bool {
        self.configs.contains_key(full_name)
    }

    /// Returns shell `export` statements for a configuration.
    ///
    /// Metadata variables (`_` prefix) are filtered out; output is sorted
    /// by variable name so repeated runs are stable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConfigNotFound`] when the full name is absent.
    pub fn export_statements(&self, full_name: &str) -> Result<Vec<String>, ConfigError> {
        let vars = self
            .configs
            .get(full_name)
            .ok_or_else(|| ConfigError::ConfigNotFound(full_name.to_string()))?;

        Ok(vars
            .iter()
            .filter(|(key, _)| !key.starts_with(METADATA_PREFIX))
            .map(|(key, value)| format!("export {key}=\"{}\"", escape_value(value)))
            .collect())
    }

    /// Returns the `_web_url` metadata value of a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConfigNotFound`] when the full name is absent
    /// and [`ConfigError::NoWebUrl`] when the metadata key is missing.
    pub fn web_url(&self, full_name: &str) -> Result<&str, ConfigError> {
        let vars = self
            .configs
            .get(full_name)
            .ok_or_else(|| ConfigError::ConfigNotFound(full_name.to_string()))?;

        vars.get(WEB_URL_KEY)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::NoWebUrl(full_name.to_string()))
    }
}

/// A table is a leaf config when none of its values is itself a table.
fn is_leaf_config(table: &Table) -> bool {
    table.values().all(|v| !v.is_table())
}

/// Converts a leaf table into string variables, dropping residual tables.
fn collect_variables(config_name: &str, table: &Table) -> Variables {
    let mut vars = BTreeMap::new();
    for (key, value) in table {
        match value {
            Value::String(s) => {
                vars.insert(key.clone(), s.clone());
            }
            Value::Table(_) => {
                warn!(
                    config = config_name,
                    key = %key,
                    "nesting deeper than one namespace level is not supported, skipping"
                );
            }
            other => {
                vars.insert(key.clone(), other.to_string());
            }
        }
    }
    vars
}

/// Escapes a value for inclusion inside a double-quoted export statement.
fn escape_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
