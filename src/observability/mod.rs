//! # Observability Module
//!
//! Structured logging for the service: console output plus optional
//! JSON log files.

pub mod logging;

pub use logging::{init_logging, LogConfig, LogGuard, TelemetryError};
