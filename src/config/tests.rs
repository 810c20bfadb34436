// envpick: Namespace-Aware Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::name::{build_config_name, parse_config_name};
use super::paths::Paths;
use super::state::State;
use super::{Config, ConfigError};
use tempfile::TempDir;

fn temp_paths() -> (TempDir, Paths) {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let paths = Paths::with_dir(temp.path());
    (temp, paths)
}

// =============================================================================
// Name codec
// =============================================================================

#[test]
fn parse_default_namespace() {
    assert_eq!(parse_config_name("dev"), ("", "dev"));
}

#[test]
fn parse_named_namespace() {
    assert_eq!(parse_config_name("db.local"), ("db", "local"));
}

#[test]
fn parse_multi_dot_short_name() {
    // Only the first dot splits; the remainder stays intact.
    assert_eq!(parse_config_name("db.prod.primary"), ("db", "prod.primary"));
}

#[test]
fn build_default_namespace() {
    assert_eq!(build_config_name("", "dev"), "dev");
}

#[test]
fn build_named_namespace() {
    assert_eq!(build_config_name("db", "local"), "db.local");
}

#[test]
fn name_codec_round_trips() {
    for full in ["dev", "db.local", "db.prod.primary", "deploy.aws"] {
        let (ns, short) = parse_config_name(full);
        assert_eq!(build_config_name(ns, short), full);
    }
    for (ns, short) in [("", "dev"), ("db", "local"), ("db", "prod.primary")] {
        let full = build_config_name(ns, short);
        assert_eq!(parse_config_name(&full), (ns, short));
    }
}

// =============================================================================
// Flattening
// =============================================================================

#[test]
fn flatten_flat_configs() {
    let config = Config::parse(
        r#"
[dev]
API_KEY = "dev-key"

[prod]
API_KEY = "prod-key"
"#,
    )
    .unwrap();

    assert!(config.contains("dev"));
    assert!(config.contains("prod"));
    assert_eq!(config.configs.len(), 2);
}

#[test]
fn flatten_nested_configs() {
    let config = Config::parse(
        r#"
[db.local]
DB_HOST = "localhost"

[db.prod]
DB_HOST = "prod.db"
"#,
    )
    .unwrap();

    assert!(config.contains("db.local"));
    assert!(config.contains("db.prod"));
    // The namespace key itself must not appear as a config.
    assert!(!config.contains("db"));
}

#[test]
fn flatten_mixed_flat_and_nested() {
    let config = Config::parse(
        r#"
[dev]
API_KEY = "dev-key"

[db.local]
DB_HOST = "localhost"
"#,
    )
    .unwrap();

    assert!(config.contains("dev"));
    assert!(config.contains("db.local"));
    assert!(!config.contains("db"));
}

#[test]
fn flatten_converts_non_string_scalars() {
    let config = Config::parse(
        r#"
[dev]
DB_PORT = 5432
DEBUG = true
"#,
    )
    .unwrap();

    let vars = &config.configs["dev"];
    assert_eq!(vars["DB_PORT"], "5432");
    assert_eq!(vars["DEBUG"], "true");
}

#[test]
fn flatten_skips_deeper_nesting() {
    // Three levels: db -> prod -> replica. The replica table is dropped,
    // never registered as a config of its own.
    let config = Config::parse(
        r#"
[db.prod]
DB_HOST = "prod.db"

[db.prod.replica]
DB_HOST = "replica.db"
"#,
    )
    .unwrap();

    assert!(config.contains("db.prod"));
    assert!(!config.contains("db.prod.replica"));
    assert_eq!(config.configs["db.prod"]["DB_HOST"], "prod.db");
}

#[test]
fn parse_rejects_invalid_toml() {
    let result = Config::parse("[dev\nAPI_URL = \"broken\n");
    assert!(result.is_err());
}

// =============================================================================
// Namespace queries
// =============================================================================

fn sample_config() -> Config {
    Config::parse(
        r#"
[dev]
API_KEY = "dev-key"

[prod]
API_KEY = "prod-key"

[db.local]
DB_HOST = "localhost"

[db.prod]
DB_HOST = "prod.db"

[deploy.aws]
AWS_REGION = "us-east-1"
"#,
    )
    .unwrap()
}

#[test]
fn namespace_configs_default() {
    let config = sample_config();
    let configs = config.namespace_configs("");
    assert_eq!(configs.len(), 2);
    assert!(configs.contains_key("dev"));
    assert!(configs.contains_key("prod"));
}

#[test]
fn namespace_configs_named() {
    let config = sample_config();
    let configs = config.namespace_configs("db");
    assert_eq!(configs.len(), 2);
    assert!(configs.contains_key("local"));
    assert!(configs.contains_key("prod"));
}

#[test]
fn namespace_configs_nonexistent() {
    let config = sample_config();
    assert!(config.namespace_configs("nothere").is_empty());
}

#[test]
fn namespaces_includes_default() {
    let config = sample_config();
    let namespaces = config.namespaces();
    assert_eq!(namespaces.len(), 3);
    assert!(namespaces.contains(""));
    assert!(namespaces.contains("db"));
    assert!(namespaces.contains("deploy"));
}

// =============================================================================
// Export statements
// =============================================================================

#[test]
fn export_statements_single_variable() {
    let config = Config::parse("[dev]\nAPI_URL = \"http://localhost:3000\"\n").unwrap();
    let exports = config.export_statements("dev").unwrap();
    assert_eq!(exports, vec!["export API_URL=\"http://localhost:3000\""]);
}

#[test]
fn export_statements_filter_metadata() {
    let config = Config::parse(
        r#"
[dev]
API_URL = "http://localhost:3000"
_web_url = "http://localhost:3000/admin"
_note = "internal"
"#,
    )
    .unwrap();

    let exports = config.export_statements("dev").unwrap();
    assert_eq!(exports.len(), 1);
    assert!(exports.iter().all(|line| !line.contains("_web_url")));
    assert!(exports.iter().all(|line| !line.contains("_note")));
}

#[test]
fn export_statements_escape_quotes() {
    let config = Config::parse(r#"[dev]
MOTD = 'say "hi" to C:\tmp'
"#)
    .unwrap();

    let exports = config.export_statements("dev").unwrap();
    assert_eq!(exports, vec![r#"export MOTD="say \"hi\" to C:\\tmp""#]);
}

#[test]
fn export_statements_deterministic_order() {
    let config = Config::parse(
        r#"
[dev]
ZED = "z"
ALPHA = "a"
MIKE = "m"
"#,
    )
    .unwrap();

    let exports = config.export_statements("dev").unwrap();
    assert_eq!(
        exports,
        vec![
            "export ALPHA=\"a\"",
            "export MIKE=\"m\"",
            "export ZED=\"z\"",
        ]
    );
}

#[test]
fn export_statements_unknown_config() {
    let config = sample_config();
    let err = config.export_statements("nothere").unwrap_err();
    assert!(matches!(err, ConfigError::ConfigNotFound(name) if name == "nothere"));
}

// =============================================================================
// Web URL
// =============================================================================

#[test]
fn web_url_present() {
    let config = Config::parse(
        r#"
[prod]
API_URL = "https://api.example.com"
_web_url = "https://api.example.com/admin"
"#,
    )
    .unwrap();

    assert_eq!(
        config.web_url("prod").unwrap(),
        "https://api.example.com/admin"
    );
}

#[test]
fn web_url_missing() {
    let config = sample_config();
    let err = config.web_url("dev").unwrap_err();
    assert!(matches!(err, ConfigError::NoWebUrl(name) if name == "dev"));
}

#[test]
fn web_url_unknown_config() {
    let config = sample_config();
    let err = config.web_url("nothere").unwrap_err();
    assert!(matches!(err, ConfigError::ConfigNotFound(_)));
}

// =============================================================================
// Config file loading
// =============================================================================

#[test]
fn load_missing_config_file() {
    let (_temp, paths) = temp_paths();
    let err = Config::load(&paths).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
}

#[test]
fn load_config_file() {
    let (_temp, paths) = temp_paths();
    std::fs::write(paths.config_file(), "[dev]\nAPI_KEY = \"k\"\n").unwrap();

    let config = Config::load(&paths).unwrap();
    assert!(config.contains("dev"));
}

#[test]
fn load_malformed_config_file() {
    let (_temp, paths) = temp_paths();
    std::fs::write(paths.config_file(), "[dev\nAPI_URL = \"broken\n").unwrap();

    let err = Config::load(&paths).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

// =============================================================================
// State
// =============================================================================

#[test]
fn state_get_set_current() {
    let mut state = State::default();
    state.set_current("", "dev");
    state.set_current("db", "local");
    state.set_current("deploy", "aws");

    assert_eq!(state.current(""), "dev");
    assert_eq!(state.current("db"), "local");
    assert_eq!(state.current("deploy"), "aws");
    assert_eq!(state.current("nonexistent"), "");
}

#[test]
fn state_missing_file_is_empty() {
    let (_temp, paths) = temp_paths();
    let state = State::load(&paths).unwrap();
    assert!(state.current.is_empty());
    assert!(state.legacy_current.is_empty());
}

#[test]
fn state_migrates_legacy_default_namespace() {
    let (_temp, paths) = temp_paths();
    std::fs::write(paths.state_file(), "current_config = \"prod\"\n").unwrap();

    let state = State::load(&paths).unwrap();
    assert_eq!(state.current(""), "prod");
    assert!(state.legacy_current.is_empty(), "legacy field must be cleared");
}

#[test]
fn state_migrates_legacy_namespaced() {
    let (_temp, paths) = temp_paths();
    std::fs::write(paths.state_file(), "current_config = \"db.local\"\n").unwrap();

    let state = State::load(&paths).unwrap();
    assert_eq!(state.current("db"), "local");
}

#[test]
fn state_migration_is_in_memory_only() {
    let (_temp, paths) = temp_paths();
    std::fs::write(paths.state_file(), "current_config = \"prod\"\n").unwrap();

    let _ = State::load(&paths).unwrap();
    let on_disk = std::fs::read_to_string(paths.state_file()).unwrap();
    assert!(on_disk.contains("current_config"));
}

#[test]
fn state_legacy_ignored_when_map_populated() {
    // Both formats present: the per-namespace map wins and the legacy
    // field passes through untouched.
    let (_temp, paths) = temp_paths();
    std::fs::write(
        paths.state_file(),
        "current_config = \"old\"\n\n[current]\ndb = \"staging\"\n",
    )
    .unwrap();

    let state = State::load(&paths).unwrap();
    assert_eq!(state.current("db"), "staging");
    assert_eq!(state.current(""), "", "legacy value must not be migrated");
    assert_eq!(state.legacy_current, "old", "legacy field is left in place");
}

#[test]
fn state_save_load_round_trip() {
    let (_temp, paths) = temp_paths();

    let mut state = State::default();
    state.set_current("", "prod");
    state.set_current("db", "staging");
    state.save(&paths).unwrap();

    let loaded = State::load(&paths).unwrap();
    assert_eq!(loaded.current(""), "prod");
    assert_eq!(loaded.current("db"), "staging");
    assert_eq!(loaded.current.len(), 2);
}

#[test]
fn state_save_creates_directory() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let paths = Paths::with_dir(temp.path().join("nested").join("envpick"));

    let mut state = State::default();
    state.set_current("", "dev");
    state.save(&paths).unwrap();

    assert!(paths.state_file().exists());
}

#[test]
fn state_create_default_seeds_file() {
    let (_temp, paths) = temp_paths();
    State::create_default(&paths, "db.local").unwrap();

    let state = State::load(&paths).unwrap();
    assert_eq!(state.current("db"), "local");
}

#[test]
fn state_create_default_is_noop_when_file_exists() {
    let (_temp, paths) = temp_paths();

    let mut state = State::default();
    state.set_current("", "prod");
    state.save(&paths).unwrap();

    State::create_default(&paths, "dev").unwrap();

    let loaded = State::load(&paths).unwrap();
    assert_eq!(loaded.current(""), "prod", "existing state must not be replaced");
}

#[test]
fn state_malformed_file() {
    let (_temp, paths) = temp_paths();
    std::fs::write(paths.state_file(), "current = \"not a table\"\n").unwrap();

    let err = State::load(&paths).unwrap_err();
    assert!(matches!(err, crate::error::StateError::ParseError { .. }));
}

// =============================================================================
// Paths
// =============================================================================

#[test]
fn paths_file_names() {
    let paths = Paths::with_dir("/tmp/envpick-test");
    assert!(paths.config_file().ends_with("config.toml"));
    assert!(paths.state_file().ends_with("state.toml"));
}
