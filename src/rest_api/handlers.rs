//! # Request Handlers
//!
//! One generic evaluate pipeline shared by every arithmetic endpoint.
//! A handler invocation is a single linear pass: parse operands,
//! validate, execute, respond. Any failure short-circuits to the error
//! envelope. Success and failure each emit exactly one log line.

use std::collections::HashMap;

use axum::extract::Query;
use axum::Json;
use tracing::{error, info};

use crate::ops::{Operands, Operation};

use super::errors::ApiResult;
use super::params::extract_operands;
use super::response::ResultResponse;

/// Run one operation against raw query parameters.
pub async fn evaluate(
    op: Operation,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<ResultResponse>> {
    match run(op, &params) {
        Ok((operands, result)) => {
            info!(
                operation = op.name(),
                expression = %op.describe(&operands),
                result,
                "operation evaluated"
            );
            Ok(Json(ResultResponse::new(result)))
        }
        Err(err) => {
            error!(operation = op.name(), error = %err, "operation rejected");
            Err(err)
        }
    }
}

/// Parse and execute, returning the operands alongside the result so
/// the caller can log them.
fn run(op: Operation, params: &HashMap<String, String>) -> ApiResult<(Operands, f64)> {
    let operands = extract_operands(op, params)?;
    let result = op.apply(operands)?;
    Ok((operands, result))
}
