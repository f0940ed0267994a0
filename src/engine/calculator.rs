// ============================================================================
// Calculator
// Validate-then-compute dispatcher over the four operations
// ============================================================================

use crate::domain::{Arguments, CalculatorConfig, CallError, Operand, OperandKind, Operation};
use crate::interfaces::{CalculationEvent, EventHandler};
use crate::numeric::{CalculatorError, CalculatorResult, ErrorKind, Number};
use chrono::Utc;
use std::fmt;
use std::sync::Arc;

/// Validate both operands and apply `operation`.
///
/// Booleans are rejected before anything else, then any operand that is not
/// an integer or a float. Only then is the operation applied.
///
/// # Errors
/// - `NumbersOnly` naming the first offending operand's kind
/// - `DivisionByZero` for a zero divisor
pub fn evaluate(
    operation: Operation,
    first: impl Into<Operand>,
    second: impl Into<Operand>,
) -> CalculatorResult<Number> {
    let (first, second): (Operand, Operand) = (first.into(), second.into());
    let (a, b) = validate(&first, &second)?;
    Ok(operation.apply(a, b)?)
}

fn validate(first: &Operand, second: &Operand) -> CalculatorResult<(Number, Number)> {
    if first.is_boolean() || second.is_boolean() {
        return Err(CalculatorError::NumbersOnly {
            kind: OperandKind::Boolean,
        });
    }

    match (first.as_number(), second.as_number()) {
        (Some(a), Some(b)) => Ok((a, b)),
        (None, _) => Err(CalculatorError::NumbersOnly { kind: first.kind() }),
        (_, None) => Err(CalculatorError::NumbersOnly {
            kind: second.kind(),
        }),
    }
}

// ============================================================================
// Reply
// ============================================================================

/// What a caller of the sentinel-style API receives: a number, or the
/// configured message for a recoverable error.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Number(Number),
    Sentinel(String),
}

impl Reply {
    pub fn is_number(&self) -> bool {
        matches!(self, Reply::Number(_))
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Reply::Number(n) => Some(*n),
            Reply::Sentinel(_) => None,
        }
    }

    /// Check if this reply is the sentinel `config` uses for `kind`.
    pub fn is_sentinel_for(&self, config: &CalculatorConfig, kind: ErrorKind) -> bool {
        match self {
            Reply::Sentinel(text) => text == config.sentinel(kind),
            Reply::Number(_) => false,
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Number(n) => write!(f, "{}", n),
            Reply::Sentinel(text) => f.write_str(text),
        }
    }
}

// ============================================================================
// Calculator
// ============================================================================

/// Stateless arithmetic dispatcher with configurable sentinels.
///
/// Every operation goes through the same guard-then-compute path and reports
/// what happened to the event handler.
pub struct Calculator {
    /// Sentinel wording
    config: CalculatorConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    /// Create a new calculator
    pub fn new(config: CalculatorConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Typed evaluation; recoverable errors come back as `Err`.
    pub fn evaluate(
        &self,
        operation: Operation,
        first: impl Into<Operand>,
        second: impl Into<Operand>,
    ) -> CalculatorResult<Number> {
        let (first, second): (Operand, Operand) = (first.into(), second.into());
        let outcome = validate(&first, &second).and_then(|(a, b)| {
            let result = operation.apply(a, b)?;
            Ok((a, b, result))
        });

        let timestamp = Utc::now();
        let event = match &outcome {
            Ok((first, second, result)) => CalculationEvent::Computed {
                operation,
                first: *first,
                second: *second,
                result: *result,
                timestamp,
            },
            Err(error) => CalculationEvent::Rejected {
                operation,
                error: *error,
                timestamp,
            },
        };
        self.event_handler.on_event(event);

        outcome.map(|(_, _, result)| result)
    }

    /// Evaluate and render recoverable errors as sentinel text.
    pub fn reply(
        &self,
        operation: Operation,
        first: impl Into<Operand>,
        second: impl Into<Operand>,
    ) -> Reply {
        match self.evaluate(operation, first, second) {
            Ok(number) => Reply::Number(number),
            Err(error) => Reply::Sentinel(self.config.sentinel(error.kind()).to_string()),
        }
    }

    /// Bind `arguments` to the two operands, then reply.
    ///
    /// # Errors
    /// Any [`CallError`]: a malformed call is never turned into a sentinel.
    pub fn call(&self, operation: Operation, arguments: Arguments) -> Result<Reply, CallError> {
        match arguments.bind(operation) {
            Ok((first, second)) => Ok(self.reply(operation, first, second)),
            Err(error) => Err(self.reject_call(error)),
        }
    }

    /// Look the operation up by name (`"add"`, `"division"`, `"*"`, ...), then [`call`](Self::call).
    ///
    /// # Errors
    /// `UnknownOperation` for an unrecognised name, otherwise as `call`.
    pub fn call_by_name(&self, name: &str, arguments: Arguments) -> Result<Reply, CallError> {
        match name.parse::<Operation>() {
            Ok(operation) => self.call(operation, arguments),
            Err(error) => Err(self.reject_call(error.into())),
        }
    }

    fn reject_call(&self, error: CallError) -> CallError {
        self.event_handler
            .on_event(CalculationEvent::call_rejected(&error));
        error
    }

    // ========================================================================
    // Convenience entry points
    // ========================================================================

    pub fn add(&self, first: impl Into<Operand>, second: impl Into<Operand>) -> Reply {
        self.reply(Operation::Add, first, second)
    }

    pub fn subtract(&self, first: impl Into<Operand>, second: impl Into<Operand>) -> Reply {
        self.reply(Operation::Subtract, first, second)
    }

    pub fn multiply(&self, first: impl Into<Operand>, second: impl Into<Operand>) -> Reply {
        self.reply(Operation::Multiply, first, second)
    }

    pub fn divide(&self, first: impl Into<Operand>, second: impl Into<Operand>) -> Reply {
        self.reply(Operation::Divide, first, second)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(
            CalculatorConfig::default(),
            Arc::new(crate::interfaces::NoOpEventHandler),
        )
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
