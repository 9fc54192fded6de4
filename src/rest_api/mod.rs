//! # REST API Module
//!
//! HTTP endpoints for the arithmetic service. Each operation is served
//! on its own route and reads its operands from the query string; every
//! response is a JSON envelope, `{"result": ...}` on success and
//! `{"error": ...}` with a 400 status on failure.

pub mod errors;
pub mod handlers;
pub mod params;
pub mod response;
pub mod server;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use response::ResultResponse;
pub use server::ApiServer;
