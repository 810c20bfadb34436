// envpick: Namespace-Aware Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `init` command: emit shell integration script text.

/// Zsh integration: environment loading on shell startup and the `ep`
/// helper function.
const ZSH_CONFIG: &str = r#"# envpick shell integration
if command -v envpick >/dev/null 2>&1; then
    # Load persisted environment on shell startup
    eval "$(envpick env 2>/dev/null)"

    # Helper function for envpick operations
    ep() {
        case "$1" in
            use)
                # Interactive selection with persistence
                shift
                if envpick use "$@"; then
                    eval "$(envpick env)"
                fi
                ;;
            tmp)
                # Temporary selection (no persistence)
                shift
                eval "$(envpick env select "$@")"
                ;;
            *)
                # Pass through all other commands
                envpick "$@"
                ;;
        esac
    }
fi
"#;

/// Prints the zsh integration script for `eval` in `~/.zshrc`.
pub fn run_init_zsh_command() {
    print!("{ZSH_CONFIG}");
}
