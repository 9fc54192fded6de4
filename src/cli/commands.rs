//! CLI command implementations
//!
//! `serve` boots logging and runs the HTTP server. `eval` evaluates a
//! single operation from the shell using the same parsing and envelope
//! rules as the HTTP API.

use std::path::Path;

use crate::config::ServiceConfig;
use crate::observability::init_logging;
use crate::ops::{Operands, Operation};
use crate::rest_api::params::parse_number;
use crate::rest_api::{ApiError, ApiServer};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_result};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Eval {
            operation,
            operands,
        } => eval(&operation, &operands),
    }
}

/// Load the service configuration
///
/// A missing file is not an error, the defaults describe a complete
/// service. Any other failure is fatal.
fn load_config(path: &Path) -> CliResult<ServiceConfig> {
    if !path.exists() {
        return Ok(ServiceConfig::default());
    }

    ServiceConfig::load(path).map_err(|e| CliError::config_error(e.to_string()))
}

/// Start the HTTP server
///
/// Startup sequence:
/// 1. Load configuration
/// 2. Initialize logging
/// 3. Bind and serve on the configured address
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;

    if let Some(port) = port {
        config.port = port;
    }

    // Hold the guard so file logs keep flushing until exit
    let _log_guard = init_logging(&config.log)
        .map_err(|e| CliError::boot_failed(format!("Logging init failed: {}", e)))?;

    let server = ApiServer::with_config(config);

    // Start the async runtime and run the server
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Evaluate a single operation and exit
///
/// Prints the result envelope to stdout, or the error envelope to
/// stderr with a non-zero exit status.
pub fn eval(operation: &str, operands: &[String]) -> CliResult<()> {
    let op: Operation = operation
        .parse()
        .map_err(|e: crate::ops::UnknownOperation| CliError::usage_error(e.to_string()))?;

    if operands.len() != op.arity() {
        return Err(CliError::usage_error(format!(
            "'{}' takes {} operand(s), got {}",
            op.name(),
            op.arity(),
            operands.len()
        )));
    }

    match evaluate(op, operands) {
        Ok(result) => write_result(result),
        Err(err) => {
            write_error(&err)?;
            std::process::exit(1);
        }
    }
}

/// Parse the operands and apply the operation
fn evaluate(op: Operation, operands: &[String]) -> Result<f64, ApiError> {
    let parsed: Vec<f64> = operands
        .iter()
        .map(|raw| parse_number(raw).ok_or_else(|| ApiError::invalid_input(op.arity())))
        .collect::<Result<_, _>>()?;

    let operands = match parsed[..] {
        [a] => Operands::Unary(a),
        [a, b] => Operands::Binary(a, b),
        _ => return Err(ApiError::invalid_input(op.arity())),
    };

    Ok(op.apply(operands)?)
}

#[cfg(test)]
mod tests {
    use super::super::errors::CliErrorCode;
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let config = load_config(Path::new("/nonexistent/calcd.json")).unwrap();
        assert_eq!(config.port, 3040);
    }

    #[test]
    fn test_load_config_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("calcd.json");
        fs::write(&config_path, r#"{"port": 8080}"#).unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_load_config_rejects_bad_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("calcd.json");
        fs::write(&config_path, "not json").unwrap();

        let result = load_config(&config_path);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_evaluate_binary() {
        let operands = vec!["2".to_string(), "3".to_string()];
        assert_eq!(evaluate(Operation::Add, &operands).unwrap(), 5.0);
    }

    #[test]
    fn test_evaluate_unary() {
        let operands = vec!["9".to_string()];
        assert_eq!(evaluate(Operation::SquareRoot, &operands).unwrap(), 3.0);
    }

    #[test]
    fn test_evaluate_rejects_garbage() {
        let operands = vec!["2".to_string(), "abc".to_string()];
        let err = evaluate(Operation::Add, &operands).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input numbers");
    }

    #[test]
    fn test_evaluate_divide_by_zero() {
        let operands = vec!["1".to_string(), "0".to_string()];
        let err = evaluate(Operation::Divide, &operands).unwrap_err();
        assert_eq!(err.to_string(), "Cannot divide by zero");
    }

    #[test]
    fn test_eval_rejects_unknown_operation() {
        let result = eval("cube", &[]);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::UsageError);
    }

    #[test]
    fn test_eval_rejects_wrong_arity() {
        let result = eval("add", &["1".to_string()]);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::UsageError);
    }
}
