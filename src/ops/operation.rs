//! # Unified Operation Model
//!
//! Every endpoint routes through this enum. It carries the operation's
//! public name, its query parameter keys, and the dispatch into the
//! pure arithmetic functions, so per-endpoint code is reduced to a
//! descriptor instead of a hand-written handler.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::arithmetic;
use super::error::OpResult;

/// All operations exposed by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
    SquareRoot,
    Modulo,
}

/// Query parameter keys for one operation, shaped by its arity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKeys {
    /// Single-operand operations
    Unary(&'static str),
    /// Two-operand operations, in endpoint order
    Binary(&'static str, &'static str),
}

/// Operand values for one invocation, shaped by the operation's arity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands {
    Unary(f64),
    Binary(f64, f64),
}

impl Operation {
    /// Every operation, in endpoint order
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Exponentiate,
        Operation::SquareRoot,
        Operation::Modulo,
    ];

    /// Operation name, used for the route path, logging, and `eval`
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Exponentiate => "exp",
            Self::SquareRoot => "sqrt",
            Self::Modulo => "mod",
        }
    }

    /// Query parameter keys this operation reads
    pub fn operand_keys(&self) -> OperandKeys {
        match self {
            Self::Exponentiate => OperandKeys::Binary("base", "exp"),
            Self::SquareRoot => OperandKeys::Unary("num"),
            _ => OperandKeys::Binary("n1", "n2"),
        }
    }

    /// Number of operands this operation takes
    pub fn arity(&self) -> usize {
        match self.operand_keys() {
            OperandKeys::Unary(_) => 1,
            OperandKeys::Binary(_, _) => 2,
        }
    }

    /// Invoke the operation on already-validated operands.
    pub fn apply(&self, operands: Operands) -> OpResult<f64> {
        match (self, operands) {
            (Self::Add, Operands::Binary(a, b)) => Ok(arithmetic::add(a, b)),
            (Self::Subtract, Operands::Binary(a, b)) => Ok(arithmetic::subtract(a, b)),
            (Self::Multiply, Operands::Binary(a, b)) => Ok(arithmetic::multiply(a, b)),
            (Self::Divide, Operands::Binary(a, b)) => arithmetic::divide(a, b),
            (Self::Exponentiate, Operands::Binary(base, exp)) => {
                Ok(arithmetic::exponentiate(base, exp))
            }
            (Self::Modulo, Operands::Binary(a, b)) => Ok(arithmetic::modulo(a, b)),
            (Self::SquareRoot, Operands::Unary(n)) => arithmetic::square_root(n),
            // Operands are always built from operand_keys(), so the
            // shapes agree by construction.
            (op, args) => unreachable!("{} invoked with {:?}", op.name(), args),
        }
    }

    /// Infix symbol for two-operand operations
    fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Exponentiate => "^",
            Self::Modulo => "%",
            Self::SquareRoot => "sqrt",
        }
    }

    /// Human-readable form of one invocation, e.g. `2 + 3` or `sqrt(4)`
    pub fn describe(&self, operands: &Operands) -> String {
        match operands {
            Operands::Unary(n) => format!("{}({})", self.name(), n),
            Operands::Binary(a, b) => format!("{} {} {}", a, self.symbol(), b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error for an operation name that matches no endpoint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown operation: {0}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}
