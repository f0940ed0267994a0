// ============================================================================
// Engine Module
// Contains the calculator's dispatch logic
// ============================================================================

mod calculator;

pub mod factory;

pub use calculator::{evaluate, Calculator, Reply};
pub use factory::{create_from_config, CalculatorBuilder};
