// envpick: Namespace-Aware Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core engine composing the configuration document and the selection state.
//!
//! ```text
//! Engine::new(namespace)
//!     |
//!     +--> Config::load   (config.toml, read-only)
//!     +--> State::load    (state.toml, migrated in memory)
//!     |
//! current / current_full / set_current / options
//! ```
//!
//! An engine is scoped to one namespace for its whole lifetime; the
//! `--namespace` flag decides which one at construction.


use tracing::debug;

use crate::config::name::build_config_name;
use crate::config::paths::Paths;
use crate::config::state::State;
use crate::config::Config;
use crate::error::{ConfigError, PickResult};
use crate::selector::SelectOption;

/// Namespace-scoped view over the configuration and selection state.
#[derive(Debug)]
pub struct Engine {
    config: Config,
    state: State,
    paths: Paths,
    namespace: String,
}

impl Engine {
    /// Loads the configuration and state for the given namespace.
    ///
    /// # Errors
    ///
    /// Returns an error when the config directory cannot be determined or
    /// either file fails to load.
    pub fn new(namespace: &str) -> PickResult<Self> {
        let paths = Paths::discover()?;
        Self::with_paths(paths, namespace)
    }

    /// Loads the configuration and state from explicit paths.
    ///
    /// # Errors
    ///
    /// Returns an error when either file fails to load.
    pub fn with_paths(paths: Paths, namespace: &str) -> PickResult<Self> {
        let config = Config::load(&paths)?;
        let state = State::load(&paths)?;
        Ok(Self::from_parts(config, state, paths, namespace))
    }

    /// Assembles an engine from already-loaded parts (used by tests).
    #[must_use]
    pub fn from_parts(config: Config, state: State, paths: Paths, namespace: &str) -> Self {
        Self {
            config,
            state,
            paths,
            namespace: namespace.to_string(),
        }
    }

    /// The namespace this engine is scoped to.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The loaded configuration document.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The active short name for this namespace, or `""` when unset.
    #[must_use]
    pub fn current(&self) -> &str {
        self.state.current(&self.namespace)
    }

    /// The active full name for this namespace, or `""` when unset.
    #[must_use]
    pub fn current_full(&self) -> String {
        let short = self.current();
        if short.is_empty() {
            String::new()
        } else {
            build_config_name(&self.namespace, short)
        }
    }

    /// Switches the active configuration and persists the state.
    ///
    /// Accepts the short form name; verification happens against the full
    /// name in this engine's namespace. On failure the state is left
    /// unmodified, in memory and on disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConfigNotFound`] when the name does not
    /// resolve to an existing configuration, or a state error when the
    /// save fails.
    pub fn set_current(&mut self, short: &str) -> PickResult<()> {
        let full = build_config_name(&self.namespace, short);
        if !self.config.contains(&full) {
            return Err(ConfigError::ConfigNotFound(short.to_string()).into());
        }

        self.state.set_current(&self.namespace, short);
        self.state.save(&self.paths)?;
        debug!(namespace = %self.namespace, config = short, "switched current config");
        Ok(())
    }

    /// Builds a full name from a short name in this engine's namespace,
    /// verifying the configuration exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConfigNotFound`] when absent.
    pub fn resolve(&self, short: &str) -> PickResult<String> {
        let full = build_config_name(&self.namespace, short);
        if self.config.contains(&full) {
            Ok(full)
        } else {
            Err(ConfigError::ConfigNotFound(short.to_string()).into())
        }
    }

    /// Selectable options for this namespace, with the active one marked.
    ///
    /// Backed by a sorted map, so the order is deterministic; callers must
    /// still not rely on any particular order.
    #[must_use]
    pub fn options(&self) -> Vec<SelectOption> {
        let current = self.current();
        self.config
            .namespace_configs(&self.namespace)
            .keys()
            .map(|name| SelectOption {
                name: (*name).to_string(),
                active: *name == current,
            })
            .collect()
    }
}
