// ============================================================================
// Operation
// The four binary operations the calculator dispatches
// ============================================================================

use crate::numeric::{Number, NumericResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    /// Partial: undefined when the divisor is zero
    Divide,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Function name (`"add"`, `"subtract"`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Infix symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Apply to two numbers.
    ///
    /// # Errors
    /// Only `Divide` fails, with `DivisionByZero`.
    #[inline]
    pub fn apply(&self, a: Number, b: Number) -> NumericResult<Number> {
        match self {
            Operation::Add => Ok(a + b),
            Operation::Subtract => Ok(a - b),
            Operation::Multiply => Ok(a * b),
            Operation::Divide => a.checked_div(b),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when text names no operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation: {0:?}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    /// Accepts the function name, its noun form and its symbol.
    ///
    /// # Examples
    /// - "add", "addition", "+" -> Add
    /// - "Division" -> Divide
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "addition" | "+" => Ok(Operation::Add),
            "subtract" | "subtraction" | "-" => Ok(Operation::Subtract),
            "multiply" | "multiplication" | "*" => Ok(Operation::Multiply),
            "divide" | "division" | "/" => Ok(Operation::Divide),
            _ => Err(UnknownOperation(s.to_string())),
        }
    }
}
