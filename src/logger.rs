//! Logging setup for the CLI and library.
//!
//! Thin wrapper over `tracing-subscriber`. The runtime level comes from
//! the `[logging]` config section (or a CLI override); `RUST_LOG` wins
//! when set so a developer can always raise the filter per-target.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// When `log_file` is provided, output is appended there without ANSI
/// escapes; otherwise it goes to stderr.
///
/// # Returns
/// `true` on success, `false` if the log file could not be opened or a
/// subscriber was already installed.
pub fn init_logging(level: &str, log_file: Option<&Path>) -> bool {
    let level = if level.trim().is_empty() {
        "warn".to_string()
    } else {
        level.to_lowercase()
    };

    let filter = match std::env::var("RUST_LOG") {
        Ok(spec) => EnvFilter::new(spec),
        Err(_) => EnvFilter::new(level),
    };

    match log_file {
        Some(path) => {
            let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
                return false;
            };
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .try_init()
                .is_ok()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
    }
}
