// envpick: Namespace-Aware Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `use` command: interactive pick that persists as the namespace's
//! current configuration.

use crate::cmd::SELECT_CONFIG_PROMPT;
use crate::core::Engine;
use crate::error::{Result, SelectError};
use crate::selector;

/// Main handler for the `use` command.
///
/// # Errors
///
/// Fails on load errors, an empty option set, a cancelled selection, or
/// when persisting the switch fails.
pub fn run_use_command(namespace: &str) -> Result<()> {
    let mut engine = Engine::new(namespace)?;

    let options = engine.options();
    if options.is_empty() {
        return Err(SelectError::NoConfigurations.into());
    }

    let selected = selector::select(&options, SELECT_CONFIG_PROMPT)?;
    engine.set_current(&selected)?;

    if engine.namespace().is_empty() {
        println!("Switched to configuration: {selected}");
    } else {
        println!(
            "Switched to configuration: {selected} (namespace: {})",
            engine.namespace()
        );
    }
    Ok(())
}
