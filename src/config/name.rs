// envpick: Namespace-Aware Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Full/short configuration name codec.
//!
//! ```text
//! "db.local"        <-> ("db", "local")
//! "dev"             <-> ("",   "dev")
//! "db.prod.primary" <-> ("db", "prod.primary")
//! ```
//!
//! Splitting happens once, at the first dot, so multi-dot short names
//! round-trip unchanged.

/// Splits a full configuration name into `(namespace, short_name)`.
///
/// A name without a dot belongs to the default namespace `""`.
#[must_use]
pub fn parse_config_name(full: &str) -> (&str, &str) {
    full.split_once('.').unwrap_or(("", full))
}

/// Builds a full configuration name from a namespace and short name.
///
/// The inverse of [`parse_config_name`] for any namespace that does not
/// itself contain a dot.
#[must_use]
pub fn build_config_name(namespace: &str, short: &str) -> String {
    if namespace.is_empty() {
        short.to_string()
    } else {
        format!("{namespace}.{short}")
    }
}
