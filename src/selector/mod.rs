// envpick: Namespace-Aware Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive selection through an external `fzf` process.
//!
//! ```text
//! select(options, prompt)
//!        |
//!        v
//!   which("fzf")            missing -> FzfNotFound
//!        |
//!        v
//!   fzf --prompt .. --no-multi --height=40% --reverse
//!   stdin:  one line per option ("name", active gets " [*]")
//!   stdout: captured selection
//!   stderr: inherited (fzf draws its UI there)
//!        |
//!   exit 130 -> Cancelled
//!   empty    -> NoSelection
//! ```
//!
//! The child runs to completion with no timeout; cancellation is entirely
//! fzf's own exit-code convention.


use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::SelectError;

/// Marker appended to the currently active option line.
const ACTIVE_INDICATOR: &str = " [*]";

/// fzf exit code for a user abort (ctrl-c / esc).
const EXIT_CANCELLED: i32 = 130;

/// A selectable configuration entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Short configuration name.
    pub name: String,
    /// Whether this entry is the currently active one.
    pub active: bool,
}

/// Presents options via fzf and returns the selected name.
///
/// # Errors
///
/// Returns [`SelectError::NoOptions`] for an empty option set,
/// [`SelectError::FzfNotFound`] when fzf is not installed,
/// [`SelectError::Cancelled`] when the user aborts, and
/// [`SelectError::NoSelection`] when fzf produces no output.
pub fn select(options: &[SelectOption], prompt: &str) -> Result<String, SelectError> {
    if options.is_empty() {
        return Err(SelectError::NoOptions);
    }

    let input = options
        .iter()
        .map(format_option)
        .collect::<Vec<_>>()
        .join("\n");

    let selected = run_fzf(&input, prompt)?;
    Ok(extract_name(&selected))
}

/// Executes fzf with the given input, returning the selected line.
fn run_fzf(input: &str, prompt: &str) -> Result<String, SelectError> {
    let fzf = which::which("fzf").map_err(|_| SelectError::FzfNotFound)?;
    debug!(fzf = %fzf.display(), "running interactive selector");

    let mut child = Command::new(fzf)
        .arg("--prompt")
        .arg(format!("{prompt} "))
        .arg("--no-multi")
        .arg("--height=40%")
        .arg("--reverse")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| SelectError::FzfFailed(e.to_string()))?;

    child
        .stdin
        .take()
        .ok_or_else(|| SelectError::FzfFailed("failed to open fzf stdin".to_string()))?
        .write_all(input.as_bytes())
        .map_err(|e| SelectError::FzfFailed(e.to_string()))?;

    let output = child
        .wait_with_output()
        .map_err(|e| SelectError::FzfFailed(e.to_string()))?;

    if !output.status.success() {
        if output.status.code() == Some(EXIT_CANCELLED) {
            return Err(SelectError::Cancelled);
        }
        return Err(SelectError::FzfFailed(format!(
            "exit status {}",
            output.status
        )));
    }

    let selected = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if selected.is_empty() {
        return Err(SelectError::NoSelection);
    }
    Ok(selected)
}

/// Formats one option for display in fzf.
fn format_option(option: &SelectOption) -> String {
    if option.active {
        format!("{}{ACTIVE_INDICATOR}", option.name)
    } else {
        option.name.clone()
    }
}

/// Extracts the configuration name back out of a formatted fzf line.
fn extract_name(line: &str) -> String {
    line.split_whitespace()
        .next()
        .unwrap_or(line)
        .to_string()
}
