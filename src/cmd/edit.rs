// envpick: Namespace-Aware Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `edit` command: open the configuration file in the user's editor.

use std::process::Command;

use crate::config::paths::Paths;
use crate::error::{LaunchError, Result};

/// Opens `config.toml` in `$EDITOR` (default `vi`), blocking until the
/// editor exits.
///
/// # Errors
///
/// Fails when the config directory cannot be created or the editor cannot
/// be started or exits with a non-zero status.
pub fn run_edit_command() -> Result<()> {
    let paths = Paths::discover()?;
    paths.ensure_dir()?;

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    let status = Command::new(&editor)
        .arg(paths.config_file())
        .status()
        .map_err(|e| LaunchError::EditorFailed {
            editor: editor.clone(),
            message: e.to_string(),
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(LaunchError::EditorFailed {
            editor,
            message: format!("exit status {status}"),
        }
        .into())
    }
}
