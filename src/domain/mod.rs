// ============================================================================
// Domain Models Module
// Operands, operations, call arguments and configuration
// ============================================================================

pub mod arguments;
pub mod config;
pub mod operand;
pub mod operation;

pub use arguments::{Arguments, CallError, PARAMETERS};
pub use config::CalculatorConfig;
pub use operand::{Operand, OperandKind, OtherKind};
pub use operation::{Operation, UnknownOperation};
