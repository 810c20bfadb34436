// envpick: Namespace-Aware Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `env` command: print export statements for the current configuration,
//! and `env select` for a one-off configuration without persisting.

use crate::cmd::SELECT_CONFIG_PROMPT;
use crate::core::Engine;
use crate::error::{Result, SelectError};
use crate::selector;

/// Prints the current configuration's variables as export statements.
///
/// # Errors
///
/// Fails when loading fails or no current configuration resolves to an
/// existing entry in the document.
pub fn run_env_command(namespace: &str) -> Result<()> {
    let engine = Engine::new(namespace)?;

    let full_name = engine.current_full();
    let exports = engine.config().export_statements(&full_name)?;

    println!("{}", exports.join("\n"));
    Ok(())
}

/// Prints export statements for an explicitly chosen configuration.
///
/// With a name the choice is direct (validated against the namespace);
/// without one the interactive picker runs. The selection is never
/// persisted.
///
/// # Errors
///
/// Fails on load errors, an unknown name, or a cancelled selection.
pub fn run_env_select_command(namespace: &str, name: Option<&str>) -> Result<()> {
    let engine = Engine::new(namespace)?;

    let full_name = match name {
        Some(short) => engine.resolve(short)?,
        None => {
            let options = engine.options();
            if options.is_empty() {
                return Err(SelectError::NoConfigurations.into());
            }
            let short = selector::select(&options, SELECT_CONFIG_PROMPT)?;
            engine.resolve(&short)?
        }
    };

    let exports = engine.config().export_statements(&full_name)?;
    println!("{}", exports.join("\n"));
    Ok(())
}
