// envpick: Namespace-Aware Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!             PickError (~16 bytes)
//!                    |
//!      +--------+----+----+--------+
//!      |        |         |        |
//!      v        v         v        v
//!    Config   State    Select   Launch    Io/Other
//!     Box      Box      Box      Box      Box<..>
//!
//! Sub-errors (unboxed internally):
//!   Config  NotFound, ReadError, ParseError, ConfigNotFound, NoWebUrl
//!   State   ReadError, ParseError, EncodeError, WriteError
//!   Select  FzfNotFound, Cancelled, NoSelection, NoOptions
//!   Launch  BrowserFailed, EditorFailed, UnsupportedPlatform
//!
//! All variants boxed => PickError stays small on the stack.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`PickError`].
pub type PickResult<T> = std::result::Result<T, PickError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum PickError {
    /// Configuration file or lookup error.
    #[error(transparent)]
    Config(#[from] Box<ConfigError>),

    /// State file error.
    #[error(transparent)]
    State(#[from] Box<StateError>),

    /// Interactive selection error.
    #[error(transparent)]
    Select(#[from] Box<SelectError>),

    /// External program launch error.
    #[error(transparent)]
    Launch(#[from] Box<LaunchError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for PickError {
                fn from(err: $error) -> Self {
                    PickError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    StateError => State,
    SelectError => Select,
    LaunchError => Launch,
    std::io::Error => Io,
}

/// Guidance appended to the missing-config-file error so a first run
/// explains how to get started.
pub const CONFIG_NOT_FOUND_HELP: &str = r#"
Create it with your configurations:

  [personal]
  ANTHROPIC_API_KEY = "sk-ant-xxxxx"
  ANTHROPIC_MODEL = "claude-sonnet-4-5"

  [work]
  ANTHROPIC_AUTH_TOKEN = "sk-work-xxxxx"
  _web_url = "https://dashboard.company.com"

Variables with _ prefix are metadata.
Run 'envpick edit' to create the file."#;

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist yet.
    #[error("config file not found: {path}{CONFIG_NOT_FOUND_HELP}")]
    NotFound { path: String },

    /// Failed to read the configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Named configuration absent from the document.
    #[error("configuration \"{0}\" not found")]
    ConfigNotFound(String),

    /// Configuration has no `_web_url` metadata entry.
    #[error("configuration \"{0}\" has no web URL")]
    NoWebUrl(String),

    /// No usable per-user configuration directory.
    #[error("failed to determine config directory: no home directory")]
    NoConfigDir,
}

// --- State Errors ---

/// State file errors.
#[derive(Debug, Error)]
pub enum StateError {
    /// Failed to read the state file.
    #[error("failed to read state file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the state file.
    #[error("failed to parse state file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Failed to serialize the state.
    #[error("failed to encode state: {0}")]
    EncodeError(#[from] toml::ser::Error),

    /// Failed to write the state file.
    #[error("failed to write state file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Selection Errors ---

/// Interactive selection errors.
#[derive(Debug, Error)]
pub enum SelectError {
    /// fzf binary is not on PATH.
    #[error("fzf not found: install fzf for interactive selection")]
    FzfNotFound,

    /// fzf exited with an unexpected error.
    #[error("fzf failed: {0}")]
    FzfFailed(String),

    /// User aborted the picker (exit code 130).
    #[error("selection cancelled")]
    Cancelled,

    /// fzf exited successfully but produced no output.
    #[error("no selection made")]
    NoSelection,

    /// Nothing to select from.
    #[error("no options available")]
    NoOptions,

    /// The namespace has no configurations to offer.
    #[error("no available configurations")]
    NoConfigurations,
}

// --- Launch Errors ---

/// External program launch errors.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Browser could not be started.
    #[error("failed to open browser: {0}")]
    BrowserFailed(#[source] std::io::Error),

    /// Editor could not be started or exited abnormally.
    #[error("failed to run editor '{editor}': {message}")]
    EditorFailed { editor: String, message: String },

    /// No known browser launcher for this OS.
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(&'static str),
}
