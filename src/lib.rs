// envpick: Namespace-Aware Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |            use / env / edit / web / init
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |           core            |
//!              |   Engine: one namespace   |
//!              '-----+--------------+------'
//!                    |              |
//!                    v              v
//!                 config        selector
//!          flatten / name /    fzf child
//!          state / paths       process
//!
//!   +-----------------------------------------+
//!   |  foundation       error, logging        |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod selector;
