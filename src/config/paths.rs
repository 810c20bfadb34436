// envpick: Namespace-Aware Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config and state file locations.
//!
//! ```text
//! <config dir>/
//!   config.toml   (read-only document, user-edited)
//!   state.toml    (per-namespace current selection)
//! ```
//!
//! The base directory is an explicit constructor argument so tests can
//! point at a tempdir instead of the real per-user config directory.

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Name of the configuration document inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Name of the persisted state file inside the config directory.
pub const STATE_FILE: &str = "state.toml";

/// Locations of the configuration and state files.
#[derive(Debug, Clone)]
pub struct Paths {
    config_dir: PathBuf,
}

impl Paths {
    /// Resolves the per-user configuration directory for envpick.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] when no home directory can be
    /// determined for the current user.
    pub fn discover() -> Result<Self, ConfigError> {
        let dirs = ProjectDirs::from("", "", "envpick").ok_or(ConfigError::NoConfigDir)?;
        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Creates paths rooted at an explicit directory (used by tests).
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: dir.into(),
        }
    }

    /// The configuration directory itself.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path to `config.toml`.
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    /// Path to `state.toml`.
    #[must_use]
    pub fn state_file(&self) -> PathBuf {
        self.config_dir.join(STATE_FILE)
    }

    /// Creates the configuration directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created.
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.config_dir)
    }
}
