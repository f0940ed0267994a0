// ============================================================================
// Numeric Errors
// Recoverable failures of validated arithmetic
// ============================================================================

use crate::domain::OperandKind;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Low-level failures of the checked arithmetic on [`Number`](super::Number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NumericError {
    /// Attempted division by zero (integer `0` or float `±0.0`)
    #[error("division by zero")]
    DivisionByZero,
    /// Input string or value is not a number
    #[error("invalid input: could not parse value")]
    InvalidInput,
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

/// Which sentinel a recoverable error is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    /// An operand was not an integer or a float
    NumbersOnly,
    /// The divisor was zero
    DivisionByZero,
}

/// Recoverable domain errors of the calculator.
///
/// These never escape as faults: [`Calculator::reply`](crate::engine::Calculator::reply)
/// renders each of them as the configured sentinel message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum CalculatorError {
    /// An operand was rejected before computing. `kind` names the first
    /// offending operand (booleans are always checked first).
    #[error("numbers only: got {kind}")]
    NumbersOnly { kind: OperandKind },

    /// The divisor was zero
    #[error("cannot divide by zero")]
    DivisionByZero,
}

impl CalculatorError {
    /// The sentinel family this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalculatorError::NumbersOnly { .. } => ErrorKind::NumbersOnly,
            CalculatorError::DivisionByZero => ErrorKind::DivisionByZero,
        }
    }
}

impl From<NumericError> for CalculatorError {
    fn from(err: NumericError) -> Self {
        match err {
            NumericError::DivisionByZero => CalculatorError::DivisionByZero,
            // Text that failed to parse is still text.
            NumericError::InvalidInput => CalculatorError::NumbersOnly {
                kind: OperandKind::Text,
            },
        }
    }
}

/// Result type alias for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;
