// envpick: Namespace-Aware Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envpick using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envpick [-n NAMESPACE] <command>
//! use                    interactive switch, persisted
//! env                    exports for the current config
//! env select [name]      exports without persistence
//! edit                   open config.toml in $EDITOR
//! web                    open a config's _web_url
//! init zsh               shell integration script
//! version
//! ```

pub mod global;


use clap::{Parser, Subcommand};

use crate::cli::global::GlobalOptions;

/// Manage multiple environment variable configurations.
#[derive(Debug, Parser)]
#[command(
    name = "envpick",
    author,
    version,
    about = "Manage multiple environment variable configurations",
    long_about = "Manage multiple environment variable configurations through a\n\
                  simple config file and interactive commands.\n\n\
                  Configurations live in config.toml as TOML tables; a one-level\n\
                  nested table such as [db.local] puts the config in the 'db'\n\
                  namespace. Use --namespace to scope commands to one namespace.\n\n\
                  Typical shell profile setup:\n  eval \"$(envpick init zsh)\""
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Switch configuration persistently.
    ///
    /// Select a configuration to persist across new terminal sessions.
    Use,

    /// Output current config as exports.
    ///
    /// Output the current configuration's environment variables as shell
    /// export statements, for `eval "$(envpick env)"` in a shell profile.
    Env(EnvArgs),

    /// Edit the configuration file.
    ///
    /// Open config.toml in $EDITOR (default: vi).
    Edit,

    /// Open config web URL.
    ///
    /// Select a configuration and open its `_web_url` in a browser.
    Web,

    /// Generate shell configuration for envpick.
    Init(InitArgs),
}

/// Arguments for the `env` command.
#[derive(Debug, Default, clap::Args)]
pub struct EnvArgs {
    #[command(subcommand)]
    pub action: Option<EnvAction>,
}

/// Subcommands of `env`.
#[derive(Debug, Subcommand)]
pub enum EnvAction {
    /// Select a configuration and output its export statements.
    ///
    /// Outputs exports without persisting. Prompts interactively when
    /// config-name is omitted:
    ///   eval "$(envpick env select myconfig)"
    ///   eval "$(envpick env select)"
    Select {
        /// Short configuration name; interactive pick when omitted.
        #[arg(value_name = "CONFIG_NAME")]
        name: Option<String>,
    },
}

/// Arguments for the `init` command.
#[derive(Debug, clap::Args)]
pub struct InitArgs {
    #[command(subcommand)]
    pub shell: InitShell,
}

/// Shells with integration scripts.
#[derive(Debug, Subcommand)]
pub enum InitShell {
    /// Generate zsh configuration.
    ///
    /// Add to ~/.zshrc:
    ///   eval "$(envpick init zsh)"
    Zsh,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
