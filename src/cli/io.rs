//! JSON I/O handling for CLI
//!
//! Output mirrors the HTTP API envelopes: `{"result": ...}` goes to
//! stdout on success, `{"error": ...}` goes to stderr on failure.

use std::io::{self, Write};

use crate::rest_api::{ApiError, ErrorResponse, ResultResponse};

use super::errors::CliResult;

/// Write a result envelope to stdout
pub fn write_result(result: f64) -> CliResult<()> {
    let response = ResultResponse::new(result);

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write an error envelope to stderr
pub fn write_error(err: &ApiError) -> CliResult<()> {
    let response = ErrorResponse::from(err.clone());

    let mut stderr = io::stderr();
    serde_json::to_writer(&mut stderr, &response)?;
    writeln!(stderr)?;
    stderr.flush()?;

    Ok(())
}
