//! Tracing setup
//!
//! Logs go to a file in the data directory, never to the terminal: the TUI
//! owns the screen. If the file cannot be opened, logging is disabled.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. `warnings`
/// collected before logging existed (e.g. a broken config file) are emitted
/// once the subscriber is live.
pub fn init(log_path: &Path, warnings: &[String]) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = log_path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|()| OpenOptions::new().create(true).append(true).open(log_path));

    match file {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(_) => {
            // No terminal fallback: events, including the warnings below, are dropped.
            tracing_subscriber::registry().with(env_filter).init();
        }
    }

    for warning in warnings {
        tracing::warn!("{warning}");
    }
}
