// ============================================================================
// Numeric Module
// Integer/float arithmetic and the calculator's recoverable errors
// ============================================================================
//
// This module provides:
// - Number: integer/float value with numeric-tower promotion
// - NumericError: low-level arithmetic failures
// - CalculatorError / ErrorKind: recoverable errors rendered as sentinels
//
// Design principles:
// - Integer overflow promotes to float instead of panicking
// - Division is true division and the only fallible operation

mod errors;
mod number;

pub use errors::{CalculatorError, CalculatorResult, ErrorKind, NumericError, NumericResult};
pub use number::Number;
