//! # Operation Set
//!
//! Pure arithmetic over `f64`: seven deterministic functions with no
//! side effects and no I/O, plus the unified `Operation` descriptor
//! that the HTTP layer and the CLI dispatch through.

pub mod arithmetic;
pub mod error;
pub mod operation;

pub use arithmetic::{add, divide, exponentiate, modulo, multiply, square_root, subtract};
pub use error::{OpError, OpResult};
pub use operation::{OperandKeys, Operands, Operation, UnknownOperation};
