//! # Operand Extraction
//!
//! Parses raw query parameters into validated operands. Validation is
//! strict: the whole value must be a number, and NaN and infinities
//! are rejected before any operation runs.

use std::collections::HashMap;

use crate::ops::{OperandKeys, Operands, Operation};

use super::errors::{ApiError, ApiResult};

/// Parse a single textual operand into a finite f64.
///
/// Leading and trailing whitespace is tolerated because `+` decodes to
/// a space in query strings.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Extract and validate the operands for one operation from the query
/// map. Missing keys, unparseable values, and non-finite values all
/// fail with `InvalidInput`; unrelated keys are ignored.
pub fn extract_operands(
    op: Operation,
    params: &HashMap<String, String>,
) -> ApiResult<Operands> {
    let fetch = |key: &str| -> ApiResult<f64> {
        let raw = params.get(key).ok_or_else(|| ApiError::invalid_input(op.arity()))?;
        parse_number(raw).ok_or_else(|| ApiError::invalid_input(op.arity()))
    };

    Ok(match op.operand_keys() {
        OperandKeys::Unary(key) => Operands::Unary(fetch(key)?),
        OperandKeys::Binary(first, second) => Operands::Binary(fetch(first)?, fetch(second)?),
    })
}
