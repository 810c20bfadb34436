// envpick: Namespace-Aware Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Use | Env | Edit | Web | Init | Version
//! ```

use std::process::ExitCode;

use envpick::cli::global::GlobalOptions;
use envpick::cli::{self, Command, EnvAction, InitShell};
use envpick::cmd::edit::run_edit_command;
use envpick::cmd::env::{run_env_command, run_env_select_command};
use envpick::cmd::init::run_init_zsh_command;
use envpick::cmd::switch::run_use_command;
use envpick::cmd::web::run_web_command;
use envpick::logging::{LogConfig, LogLevel, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::WARN);

    LogConfig::builder()
        .with_console_level(console_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let namespace = cli.global.namespace.as_str();

    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Use) => run_use_command(namespace),
        Some(Command::Env(args)) => match &args.action {
            None => run_env_command(namespace),
            Some(EnvAction::Select { name }) => {
                run_env_select_command(namespace, name.as_deref())
            }
        },
        Some(Command::Edit) => run_edit_command(),
        Some(Command::Web) => run_web_command(namespace),
        Some(Command::Init(args)) => match args.shell {
            InitShell::Zsh => {
                run_init_zsh_command();
                Ok(())
            }
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("envpick: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}
