//! CLI argument definitions using clap
//!
//! Commands:
//! - calcd serve --config <path> [--port <port>]
//! - calcd eval <operation> <operands>...

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// calcd - A stateless arithmetic microservice
#[derive(Parser, Debug)]
#[command(name = "calcd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./calcd.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Evaluate a single operation and exit
    Eval {
        /// Operation name: add, subtract, multiply, divide, exp, sqrt or mod
        operation: String,

        /// Operands, e.g. `calcd eval add 2 3` or `calcd eval sqrt 9`
        operands: Vec<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
