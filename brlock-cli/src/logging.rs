// SPDX-FileCopyrightText: 2024 The Brlock Authors
// SPDX-License-Identifier: MIT

use tracing_subscriber::EnvFilter;

/// Logs go to stderr, stdout is reserved for the lock file.
///
/// `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool) {
    let default_directives = if verbose { "warn,brlock=debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
