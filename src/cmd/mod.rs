// envpick: Namespace-Aware Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   use (switch), env, env select, edit, web, init zsh
//! ```

pub mod edit;
pub mod env;
pub mod init;
pub mod switch;
pub mod web;

/// Prompt shown by the interactive configuration picker.
pub(crate) const SELECT_CONFIG_PROMPT: &str = "Select configuration:";
