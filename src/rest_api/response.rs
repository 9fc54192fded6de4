//! # Response Formatting
//!
//! Success envelope for operation results.

use serde::Serialize;

/// Successful operation envelope
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResultResponse {
    pub result: f64,
}

impl ResultResponse {
    pub fn new(result: f64) -> Self {
        Self { result }
    }
}
