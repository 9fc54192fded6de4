//! # Structured Logging
//!
//! Logging bootstrap built on the tracing-subscriber ecosystem. The
//! service writes human-readable output to the console and, when a log
//! directory is configured, JSON lines to two files: `combined.log`
//! with everything at or above the configured level, and `error.log`
//! with errors only.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Logging initialization errors
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Failed to create log file: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    #[error("Failed to install logger: {0}")]
    Install(String),
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (e.g., "info", "debug", "warn")
    #[serde(default = "default_level")]
    pub level: String,

    /// Console output format: "pretty" or "json"
    #[serde(default = "default_format")]
    pub format: String,

    /// Directory for log files (null disables file output)
    #[serde(default = "default_dir")]
    pub dir: Option<PathBuf>,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

fn default_dir() -> Option<PathBuf> {
    Some(PathBuf::from("logs"))
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            dir: default_dir(),
        }
    }
}

/// Keeps the background log writers alive.
///
/// Dropping the guard flushes and stops the non-blocking writers, so
/// hold it for the lifetime of the program.
pub struct LogGuard {
    _workers: Vec<WorkerGuard>,
}

/// Initializes the logging subsystem.
///
/// The level is taken from `RUST_LOG` when set, falling back to the
/// configured level. Returns a guard that must be held for file output
/// to keep flushing.
///
/// # Errors
///
/// Returns `TelemetryError` if the filter is invalid, a log file
/// cannot be created, or a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<LogGuard, TelemetryError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| TelemetryError::Filter(e.to_string()))?;

    let mut workers = Vec::new();

    let (combined_layer, error_layer) = match &config.dir {
        Some(dir) => {
            let (combined_writer, combined_guard) =
                tracing_appender::non_blocking(file_appender(dir, "combined")?);
            workers.push(combined_guard);

            let (error_writer, error_guard) =
                tracing_appender::non_blocking(file_appender(dir, "error")?);
            workers.push(error_guard);

            let combined_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(combined_writer);

            let error_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(error_writer)
                .with_filter(LevelFilter::ERROR);

            (Some(combined_layer), Some(error_layer))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(combined_layer)
        .with(error_layer);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .map_err(|e| TelemetryError::Install(e.to_string()))?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()
            .map_err(|e| TelemetryError::Install(e.to_string()))?;
    }

    Ok(LogGuard { _workers: workers })
}

/// Open an append-only log file named `<name>.log` under `dir`.
fn file_appender(dir: &Path, name: &str) -> Result<RollingFileAppender, TelemetryError> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .filename_suffix("log")
        .build(dir)?;
    Ok(appender)
}
