//! Tracing initialization.
//!
//! The TUI takes over stdout, so diagnostics and submission payloads go to a
//! non-blocking file writer. Filtering follows `RUST_LOG`, defaulting to
//! `info`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Returns the appender guard; dropping it flushes buffered log lines, so
/// the caller must keep it alive for the lifetime of the process.
///
/// # Errors
/// Returns an error if the log directory cannot be resolved.
pub fn init(log_file: Option<PathBuf>) -> Result<WorkerGuard> {
    let path = log_file.unwrap_or_else(|| std::env::temp_dir().join("anketa.log"));
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    let file_name = path
        .file_name()
        .context("log file path has no file name")?
        .to_owned();

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
