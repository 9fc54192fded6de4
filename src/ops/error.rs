//! # Domain Errors
//!
//! Errors raised by the operation set for mathematically undefined
//! input. Messages are the exact strings surfaced to API callers.

use thiserror::Error;

/// Result type for operations
pub type OpResult<T> = Result<T, OpError>;

/// Domain errors raised by arithmetic operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpError {
    /// Divisor was zero
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Radicand was negative
    #[error("Cannot calculate square root of negative numbers")]
    NegativeRadicand,
}
