// ============================================================================
// Event Handler Interface
// Defines the contract for handling calculation events
// ============================================================================

use crate::domain::{CallError, Operation};
use crate::numeric::{CalculatorError, Number};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Events emitted by the calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum CalculationEvent {
    /// Both operands were numeric and the operation produced a number
    Computed {
        operation: Operation,
        first: Number,
        second: Number,
        result: Number,
        timestamp: DateTime<Utc>,
    },

    /// A recoverable error replaced the result with a sentinel
    Rejected {
        operation: Operation,
        error: CalculatorError,
        timestamp: DateTime<Utc>,
    },

    /// The call itself was malformed (arity, argument names, unknown operation)
    CallRejected {
        operation: Option<Operation>,
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

impl CalculationEvent {
    pub(crate) fn call_rejected(error: &CallError) -> Self {
        let operation = match error {
            CallError::Arity { operation, .. }
            | CallError::MissingArgument { operation, .. }
            | CallError::UnexpectedArgument { operation, .. }
            | CallError::DuplicateArgument { operation, .. } => Some(*operation),
            CallError::UnknownOperation(_) => None,
        };
        CalculationEvent::CallRejected {
            operation,
            reason: error.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// When the event happened
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            CalculationEvent::Computed { timestamp, .. }
            | CalculationEvent::Rejected { timestamp, .. }
            | CalculationEvent::CallRejected { timestamp, .. } => *timestamp,
        }
    }
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, history, notifications, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculation event
    fn on_event(&self, event: CalculationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculationEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        match &event {
            CalculationEvent::Computed {
                operation,
                first,
                second,
                result,
                ..
            } => {
                tracing::debug!(%operation, %first, %second, %result, "computed");
            }
            CalculationEvent::Rejected {
                operation, error, ..
            } => {
                tracing::debug!(%operation, %error, "rejected operands");
            }
            CalculationEvent::CallRejected { reason, .. } => {
                tracing::warn!(%reason, "invalid call");
            }
        }
    }
}

/// Records every event in arrival order
#[derive(Default)]
pub struct HistoryEventHandler {
    events: Mutex<Vec<CalculationEvent>>,
}

impl HistoryEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the recorded events
    pub fn history(&self) -> Vec<CalculationEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Drop all recorded events
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventHandler for HistoryEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<CalculationEvent>) {
        self.events.lock().extend(events);
    }
}
