// envpick: Namespace-Aware Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `web` command: pick a configuration and open its `_web_url`.

use std::process::Command;

use crate::core::Engine;
use crate::error::{LaunchError, Result, SelectError};
use crate::selector;

/// Main handler for the `web` command.
///
/// # Errors
///
/// Fails on load errors, a cancelled selection, a config without a
/// `_web_url`, or when no browser can be launched on this platform.
pub fn run_web_command(namespace: &str) -> Result<()> {
    let engine = Engine::new(namespace)?;

    let options = engine.options();
    if options.is_empty() {
        return Err(SelectError::NoConfigurations.into());
    }

    let selected = selector::select(&options, "Select configuration to open web URL:")?;
    let full_name = engine.resolve(&selected)?;
    let url = engine.config().web_url(&full_name)?;

    open_browser(url)?;
    println!("Opened: {url}");
    Ok(())
}

/// Launches the platform browser, without waiting for it to exit.
fn open_browser(url: &str) -> std::result::Result<(), LaunchError> {
    let mut command = if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg(url);
        c
    } else if cfg!(target_os = "linux") {
        let mut c = Command::new("xdg-open");
        c.arg(url);
        c
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("rundll32");
        c.arg("url.dll,FileProtocolHandler").arg(url);
        c
    } else {
        return Err(LaunchError::UnsupportedPlatform(std::env::consts::OS));
    };

    command.spawn().map_err(LaunchError::BrowserFailed)?;
    Ok(())
}
