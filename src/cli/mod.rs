//! # CLI Module
//!
//! Command line interface for the service. `serve` runs the HTTP
//! server, `eval` evaluates one operation from the shell.

pub mod args;
pub mod commands;
pub mod errors;
pub mod io;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
