// ============================================================================
// Basic Usage Example
// ============================================================================

use checked_calculator::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    println!("=== Calculator Example ===\n");

    let history = Arc::new(HistoryEventHandler::new());
    let calculator = CalculatorBuilder::new()
        .brmph_messages()
        .build(Arc::new(LoggingEventHandler))
        .expect("preset configuration is valid");
    let recorder = Calculator::new(calculator.config().clone(), history.clone());

    println!("Valid operands:");
    println!("  add(2, 3)        = {}", calculator.add(2, 3));
    println!("  subtract(2, 3)   = {}", calculator.subtract(2, 3));
    println!("  multiply(2.5, 4) = {}", calculator.multiply(2.5, 4));
    println!("  divide(10, 4)    = {}", calculator.divide(10, 4));

    println!("\nRecoverable errors:");
    println!("  divide(10, 0)    = {}", calculator.divide(10, 0));
    println!("  add(true, 5)     = {}", calculator.add(true, 5));
    println!("  subtract(a, b)   = {}", calculator.subtract("a", "b"));
    println!("  multiply([], 1)  = {}", calculator.multiply(Vec::<i64>::new(), 1));

    println!("\nNamed operands:");
    let args = Arguments::new()
        .named("second_input", 8)
        .named("first_input", 2);
    match calculator.call_by_name("division", args) {
        Ok(reply) => println!("  division(first_input=2, second_input=8) = {}", reply),
        Err(error) => println!("  error: {}", error),
    }

    println!("\nContract violations:");
    for name in ["add", "square"] {
        let args: Arguments = [1, 2, 3].into_iter().collect();
        match calculator.call_by_name(name, args) {
            Ok(reply) => println!("  {}(1, 2, 3) = {}", name, reply),
            Err(error) => println!("  {}(1, 2, 3) -> {}", name, error),
        }
    }

    println!("\n=== History ===");
    recorder.add(1, 1);
    recorder.divide(1, 0);
    for event in history.history() {
        match event {
            CalculationEvent::Computed {
                operation,
                first,
                second,
                result,
                ..
            } => {
                println!("  {} {} {} = {}", first, operation.symbol(), second, result);
            }
            CalculationEvent::Rejected {
                operation, error, ..
            } => {
                println!("  {} rejected: {}", operation, error);
            }
            CalculationEvent::CallRejected { reason, .. } => {
                println!("  call rejected: {}", reason);
            }
        }
    }
}
