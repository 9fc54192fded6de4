//! # Arithmetic Functions
//!
//! Each function is deterministic and side-effect free. Operations are
//! total over finite inputs except where a domain error is documented.

use super::error::{OpError, OpResult};

/// a + b
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// a - b
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// a * b
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// a / b. Fails when the divisor is zero.
pub fn divide(a: f64, b: f64) -> OpResult<f64> {
    if b == 0.0 {
        return Err(OpError::DivisionByZero);
    }
    Ok(a / b)
}

/// base^exp, with IEEE 754 semantics for fractional and negative
/// exponents.
pub fn exponentiate(base: f64, exp: f64) -> f64 {
    base.powf(exp)
}

/// √a. Fails when the radicand is negative.
pub fn square_root(a: f64) -> OpResult<f64> {
    if a < 0.0 {
        return Err(OpError::NegativeRadicand);
    }
    Ok(a.sqrt())
}

/// a % b, the floating-point remainder. The sign follows the dividend.
/// A zero divisor yields NaN rather than an error.
pub fn modulo(a: f64, b: f64) -> f64 {
    a % b
}
