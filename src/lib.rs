// ============================================================================
// Checked Calculator Library
// Input-validating arithmetic dispatcher with sentinel replies
// ============================================================================

//! # Checked Calculator
//!
//! Add, subtract, multiply and divide two arbitrary values, refusing anything
//! that is not an integer or a float.
//!
//! ## Features
//!
//! - **Boundary classification** of caller values into [`Operand`](domain::Operand)s;
//!   booleans never count as numbers
//! - **Typed errors** for the recoverable cases (bad operand, zero divisor)
//!   and a separate [`CallError`](domain::CallError) for malformed calls
//! - **Sentinel replies** with configurable wording
//! - **Event handlers** for logging and history
//!
//! ## Example
//!
//! ```rust
//! use checked_calculator::prelude::*;
//! use std::sync::Arc;
//!
//! assert_eq!(checked_calculator::add(2, 3), Ok(Number::Integer(5)));
//! assert_eq!(checked_calculator::multiply(2.5, 4), Ok(Number::Float(10.0)));
//!
//! let calculator = Calculator::new(CalculatorConfig::brmph(), Arc::new(NoOpEventHandler));
//! assert_eq!(
//!     calculator.divide(10, 0).to_string(),
//!     "brmph?! I cannot divide by 0. Try again..."
//! );
//!
//! // Three operands is a programming error, not a sentinel
//! let result = calculator.call(Operation::Add, Arguments::from_iter([1, 2, 3]));
//! assert!(matches!(result, Err(CallError::Arity { given: 3, .. })));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

use domain::{Operand, Operation};
use numeric::{CalculatorResult, Number};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Arguments, CalculatorConfig, CallError, Operand, OperandKind, Operation, OtherKind,
    };
    pub use crate::engine::{create_from_config, Calculator, CalculatorBuilder, Reply};
    pub use crate::interfaces::{
        CalculationEvent, EventHandler, HistoryEventHandler, LoggingEventHandler,
        NoOpEventHandler,
    };
    pub use crate::numeric::{CalculatorError, ErrorKind, Number};
}

/// `first + second`, or `NumbersOnly` for a non-numeric operand.
pub fn add(first: impl Into<Operand>, second: impl Into<Operand>) -> CalculatorResult<Number> {
    engine::evaluate(Operation::Add, first, second)
}

/// `first - second`, or `NumbersOnly` for a non-numeric operand.
pub fn subtract(
    first: impl Into<Operand>,
    second: impl Into<Operand>,
) -> CalculatorResult<Number> {
    engine::evaluate(Operation::Subtract, first, second)
}

/// `first * second`, or `NumbersOnly` for a non-numeric operand.
pub fn multiply(
    first: impl Into<Operand>,
    second: impl Into<Operand>,
) -> CalculatorResult<Number> {
    engine::evaluate(Operation::Multiply, first, second)
}

/// `first / second` as a float, `NumbersOnly` for a non-numeric operand, or
/// `DivisionByZero`.
pub fn divide(first: impl Into<Operand>, second: impl Into<Operand>) -> CalculatorResult<Number> {
    engine::evaluate(Operation::Divide, first, second)
}
