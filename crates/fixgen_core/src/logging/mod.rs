//! Logging infrastructure for the example file generator.
//!
//! This module provides:
//! - A run logger producing the console progress lines via a callback
//! - A tail buffer of recent tool output for failure messages
//! - Integration with the `tracing` ecosystem (stderr + optional log file)
//!
//! # Example
//!
//! ```no_run
//! use fixgen_core::logging::{LogConfig, RunLogger};
//!
//! let logger = RunLogger::new(LogConfig::default(), Some(Box::new(|line| println!("{line}"))));
//! logger.phase("audio");
//! logger.generated("example.wav");
//! logger.warn("Could not generate example.wma (codec may not be available)");
//! ```

mod run_logger;
mod types;

pub use run_logger::{RunLogger, CONSOLE_TARGET, RULE_WIDTH};
pub use types::{ConsoleCallback, LogConfig, LogLevel, MessagePrefix};

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer, Registry};

/// File name used for the run log inside the logs folder.
pub const LOG_FILE_NAME: &str = "generate_files.log";

/// Initialize global tracing subscriber writing to stderr.
///
/// Respects RUST_LOG, falling back to the provided default level.
/// Should be called once at startup.
pub fn init_tracing(default_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_to_filter_str(default_level)));

    tracing_subscriber::registry()
        .with(stderr_layer())
        .with(filter)
        .init();
}

/// Initialize tracing with stderr output plus a log file in `logs_dir`.
///
/// Returns the appender guard; keep it alive until exit so buffered lines
/// are flushed. Falls back to stderr-only logging if the logs folder
/// cannot be created.
pub fn init_tracing_with_file(default_level: LogLevel, logs_dir: &Path) -> Option<WorkerGuard> {
    if let Err(e) = std::fs::create_dir_all(logs_dir) {
        init_tracing(default_level);
        tracing::warn!("Cannot create logs folder {}: {}", logs_dir.display(), e);
        return None;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_to_filter_str(default_level)));

    let file_appender = tracing_appender::rolling::never(logs_dir, LOG_FILE_NAME);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(stderr_layer())
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .with(filter)
        .init();

    Some(guard)
}

/// Stderr layer that skips events already printed on the console.
fn stderr_layer() -> impl Layer<Registry> {
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter_fn(|meta| meta.target() != CONSOLE_TARGET))
}

/// Initialize tracing for tests (only logs warnings and above).
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

fn level_to_filter_str(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    }
}
