// ============================================================================
// Arguments
// Positional and named operands, bound to the two calculator parameters
// ============================================================================

use super::operand::Operand;
use super::operation::{Operation, UnknownOperation};
use smallvec::SmallVec;
use thiserror::Error;

/// Parameter names of every calculator operation, in positional order.
pub const PARAMETERS: [&str; 2] = ["first_input", "second_input"];

/// A call that does not match the two-operand signature.
///
/// These are programmer errors. They are returned as `Err` and are never
/// rendered as a sentinel reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// Wrong number of operands
    #[error("{operation}() takes exactly 2 arguments ({given} given)")]
    Arity { operation: Operation, given: usize },

    /// A parameter was left unfilled while others were named
    #[error("{operation}() missing required argument: '{name}'")]
    MissingArgument { operation: Operation, name: String },

    /// A named operand matches no parameter
    #[error("{operation}() got an unexpected keyword argument '{name}'")]
    UnexpectedArgument { operation: Operation, name: String },

    /// A parameter was filled more than once
    #[error("{operation}() got multiple values for argument '{name}'")]
    DuplicateArgument { operation: Operation, name: String },

    /// No operation goes by this name
    #[error("unknown operation: {0:?}")]
    UnknownOperation(String),
}

impl From<UnknownOperation> for CallError {
    fn from(err: UnknownOperation) -> Self {
        CallError::UnknownOperation(err.0)
    }
}

/// Operands of a single call before binding.
///
/// # Example
/// ```
/// use checked_calculator::domain::{Arguments, Operand, Operation};
///
/// let args = Arguments::new().arg(1).named("second_input", 2.5);
/// let (first, second) = args.bind(Operation::Add).unwrap();
/// assert_eq!(first, Operand::Integer(1));
/// assert_eq!(second, Operand::Float(2.5));
///
/// let too_many: Arguments = [0, 1, 2].into_iter().collect();
/// assert!(too_many.bind(Operation::Add).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    positional: SmallVec<[Operand; 2]>,
    named: Vec<(String, Operand)>,
}

impl Arguments {
    /// Create an empty argument list
    pub fn new() -> Self {
        Self::default()
    }

    /// Two positional operands
    pub fn pair(first: impl Into<Operand>, second: impl Into<Operand>) -> Self {
        Self::new().arg(first).arg(second)
    }

    /// Builder method: Append a positional operand
    pub fn arg(mut self, operand: impl Into<Operand>) -> Self {
        self.positional.push(operand.into());
        self
    }

    /// Builder method: Add a named operand
    pub fn named(mut self, name: impl Into<String>, operand: impl Into<Operand>) -> Self {
        self.named.push((name.into(), operand.into()));
        self
    }

    /// Total number of operands supplied
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bind to `(first_input, second_input)`.
    ///
    /// # Errors
    /// - `Arity` for more than two positional operands, or too few with none named
    /// - `UnexpectedArgument` for a name outside [`PARAMETERS`]
    /// - `DuplicateArgument` when a parameter is filled twice
    /// - `MissingArgument` when a named call leaves a parameter unfilled
    pub fn bind(self, operation: Operation) -> Result<(Operand, Operand), CallError> {
        let given = self.len();
        if self.positional.len() > PARAMETERS.len() {
            return Err(CallError::Arity { operation, given });
        }

        let any_named = !self.named.is_empty();
        let mut slots: [Option<Operand>; 2] = [None, None];
        for (slot, operand) in slots.iter_mut().zip(self.positional) {
            *slot = Some(operand);
        }

        for (name, operand) in self.named {
            let Some(index) = PARAMETERS.iter().position(|p| *p == name) else {
                return Err(CallError::UnexpectedArgument { operation, name });
            };
            if slots[index].is_some() {
                return Err(CallError::DuplicateArgument { operation, name });
            }
            slots[index] = Some(operand);
        }

        match slots {
            [Some(first), Some(second)] => Ok((first, second)),
            _ if !any_named => Err(CallError::Arity { operation, given }),
            [None, _] => Err(CallError::MissingArgument {
                operation,
                name: PARAMETERS[0].to_string(),
            }),
            [_, None] => Err(CallError::MissingArgument {
                operation,
                name: PARAMETERS[1].to_string(),
            }),
        }
    }
}

impl<T: Into<Operand>> FromIterator<T> for Arguments {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            positional: iter.into_iter().map(Into::into).collect(),
            named: Vec::new(),
        }
    }
}
