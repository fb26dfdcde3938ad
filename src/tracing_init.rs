//! Shared tracing initialization.
//!
//! Hook processes append to `{data_dir}/cue.log` (stdout belongs to Claude
//! Code); interactive commands log to stderr.

use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::storage::path_utils;

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize tracing to cue.log (append mode).
///
/// Several hook processes may write concurrently; short appends stay
/// atomic. If the log cannot be opened, logging is left disabled.
pub fn init_file_tracing() {
    let log_path = path_utils::log_path();
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(Mutex::new(log_file))
        .with_target(true)
        .with_ansi(false)
        .try_init()
        .ok();
}

/// Initialize tracing to stderr for CLI commands. `verbose` lowers the
/// default level to debug.
pub fn init_cli_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
