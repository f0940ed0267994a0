// ============================================================================
// Calculator Factory
// Creates calculators with validated configuration
// ============================================================================

use crate::domain::CalculatorConfig;
use crate::engine::Calculator;
use crate::interfaces::EventHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Sentinel wording
/// * `event_handler` - Event handler for calculation events
///
/// # Returns
/// * `Result<Calculator, String>` - Configured calculator or error
///
/// # Example
/// ```
/// use checked_calculator::prelude::*;
/// use checked_calculator::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::excuse_me();
/// let calculator = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(calculator.add(2, 3).to_string(), "5");
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Calculator, String> {
    config.validate()?;
    Ok(Calculator::new(config, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use checked_calculator::prelude::*;
/// use checked_calculator::engine::factory::CalculatorBuilder;
/// use std::sync::Arc;
///
/// let calculator = CalculatorBuilder::new()
///     .undefined_messages()
///     .with_numbers_only_message("numbers, please")
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert_eq!(calculator.add("one", 2).to_string(), "numbers, please");
/// assert_eq!(calculator.divide(1, 0).to_string(), "undefined: I cannot divide by 0");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a new builder with the default wording
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Preset Wording
    // ========================================================================

    /// Use the "brmph?!" wording (default)
    pub fn brmph_messages(mut self) -> Self {
        self.config = CalculatorConfig::brmph();
        self
    }

    /// Use the "Excuse me?!" wording
    pub fn excuse_me_messages(mut self) -> Self {
        self.config = CalculatorConfig::excuse_me();
        self
    }

    /// Use the "undefined" wording
    pub fn undefined_messages(mut self) -> Self {
        self.config = CalculatorConfig::undefined();
        self
    }

    // ========================================================================
    // Individual Messages
    // ========================================================================

    /// Set the numbers-only message
    pub fn with_numbers_only_message(mut self, message: impl Into<String>) -> Self {
        self.config.numbers_only_message = message.into();
        self
    }

    /// Set the zero-division message
    pub fn with_zero_division_message(mut self, message: impl Into<String>) -> Self {
        self.config.zero_division_message = message.into();
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the calculator
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<Calculator, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}
