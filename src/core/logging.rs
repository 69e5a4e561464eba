//! Logging initialization.
//!
//! All output goes through `tracing`. Events from the `log` facade are
//! bridged in by the subscriber's `tracing-log` support. The file layer
//! writes JSON lines to a daily-rolling file under `<data_dir>/logs`;
//! `RUST_LOG` controls the filter (default `info`).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Rolling log file prefix.
pub const LOG_FILE_PREFIX: &str = "catalog-browser.log";

const DEFAULT_FILTER: &str = "info";

/// `<data_dir>/logs`
pub fn log_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("logs")
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn file_writer(data_dir: &Path) -> (tracing_appender::non_blocking::NonBlocking, WorkerGuard) {
    let dir = log_dir(data_dir);
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("Failed to create logs directory {}: {e}", dir.display());
    }
    let file_appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    tracing_appender::non_blocking(file_appender)
}

/// File logging plus a compact stderr layer, for non-interactive runs.
///
/// The returned guard must stay alive until shutdown so buffered lines are
/// flushed.
pub fn init(data_dir: &Path) -> WorkerGuard {
    let (non_blocking, guard) = file_writer(data_dir);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(env_filter());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .compact()
        .with_filter(env_filter());

    if let Err(e) = tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
    {
        eprintln!("Failed to initialize logging: {e}");
    }
    guard
}

/// Like [`init()`] without the stderr layer; the TUI owns the terminal.
pub fn init_tui(data_dir: &Path) -> WorkerGuard {
    let (non_blocking, guard) = file_writer(data_dir);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(env_filter());

    if let Err(e) = tracing_subscriber::registry().with(file_layer).try_init() {
        eprintln!("Failed to initialize logging: {e}");
    }
    guard
}
