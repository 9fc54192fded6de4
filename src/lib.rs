//! calcd - A stateless arithmetic microservice
//!
//! Seven arithmetic operations exposed as HTTP GET endpoints. Operands
//! arrive as query parameters and every response is a JSON envelope,
//! `{"result": ...}` or `{"error": ...}`.

pub mod cli;
pub mod config;
pub mod observability;
pub mod ops;
pub mod rest_api;
