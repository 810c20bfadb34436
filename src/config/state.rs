// envpick: Namespace-Aware Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Persisted selection state.
//!
//! ```text
//! state.toml
//!
//! [current]              namespace -> active short name
//! "" = "prod"
//! db = "staging"
//!
//! current_config = ".."  legacy single-value format, read-only;
//!                        migrated in memory when [current] is empty
//! ```
//!
//! The file is loaded once per invocation and rewritten whole on save, so
//! a reader never observes a partially written document as long as the
//! underlying write is not interrupted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::StateError;

use super::name::parse_config_name;
use super::paths::Paths;

/// The per-namespace selection state.
// Field order matters for TOML serialization: the scalar legacy key must be
// emitted before the `[current]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct State {
    /// Legacy single-value format, kept for backward-compatible reads.
    #[serde(rename = "current_config", skip_serializing_if = "String::is_empty")]
    pub legacy_current: String,

    /// Namespace (`""` = default) -> short name of the active config.
    pub current: BTreeMap<String, String>,
}

impl State {
    /// Loads the state file, migrating the legacy format in memory.
    ///
    /// A missing file is not an error and yields an empty state. The legacy
    /// `current_config` field only migrates when the per-namespace map is
    /// completely empty; otherwise it is ignored and left in place.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::ReadError`] on I/O failure and
    /// [`StateError::ParseError`] on malformed TOML.
    pub fn load(paths: &Paths) -> Result<Self, StateError> {
        let path = paths.state_file();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(StateError::ReadError {
                    path: path.display().to_string(),
                    source: e,
                });
            }
        };

        let mut state: Self = toml::from_str(&content).map_err(|e| StateError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        state.migrate_legacy();
        Ok(state)
    }

    /// Migrates the legacy single-value field into the namespace map.
    fn migrate_legacy(&mut self) {
        if self.legacy_current.is_empty() {
            return;
        }
        if self.current.is_empty() {
            let (namespace, short) = parse_config_name(&self.legacy_current);
            debug!(namespace, config = short, "migrating legacy state format");
            self.current.insert(namespace.to_string(), short.to_string());
            self.legacy_current.clear();
        } else {
            warn!("state file has both current_config and [current], ignoring the legacy field");
        }
    }

    /// Persists the whole state, creating the config directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::EncodeError`] when serialization fails and
    /// [`StateError::WriteError`] on I/O failure.
    pub fn save(&self, paths: &Paths) -> Result<(), StateError> {
        let path = paths.state_file();
        let io_err = |source| StateError::WriteError {
            path: path.display().to_string(),
            source,
        };

        paths.ensure_dir().map_err(io_err)?;
        let content = toml::to_string(self)?;
        std::fs::write(&path, content).map_err(io_err)
    }

    /// Seeds a fresh state file with one entry parsed from `full_name`.
    ///
    /// Does nothing when the state file already exists.
    ///
    /// # Errors
    ///
    /// Returns an error when the seeded state cannot be saved.
    pub fn create_default(paths: &Paths, full_name: &str) -> Result<(), StateError> {
        if paths.state_file().exists() {
            return Ok(());
        }

        let mut state = Self::default();
        let (namespace, short) = parse_config_name(full_name);
        state.set_current(namespace, short);
        state.save(paths)
    }

    /// The active short name for a namespace, or `""` when unset.
    #[must_use]
    pub fn current(&self, namespace: &str) -> &str {
        self.current.get(namespace).map_or("", String::as_str)
    }

    /// Sets the active short name for a namespace (in memory only).
    pub fn set_current(&mut self, namespace: &str, short: &str) {
        self.current
            .insert(namespace.to_string(), short.to_string());
    }
}
