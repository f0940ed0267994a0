// ============================================================================
// Calculator Configuration
// Sentinel wording for the recoverable errors
// ============================================================================

use crate::numeric::ErrorKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Messages returned in place of a result.
///
/// The wording is presentation only. Callers should ask
/// [`CalculatorConfig::sentinel`] for the text of an error kind rather than
/// hard-code it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Reply for a non-numeric (or boolean) operand
    pub numbers_only_message: String,

    /// Reply for a zero divisor
    pub zero_division_message: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::brmph()
    }
}

impl CalculatorConfig {
    /// Create a new configuration with both messages
    pub fn new(
        numbers_only_message: impl Into<String>,
        zero_division_message: impl Into<String>,
    ) -> Self {
        Self {
            numbers_only_message: numbers_only_message.into(),
            zero_division_message: zero_division_message.into(),
        }
    }

    /// Builder method: Set the numbers-only message
    pub fn with_numbers_only_message(mut self, message: impl Into<String>) -> Self {
        self.numbers_only_message = message.into();
        self
    }

    /// Builder method: Set the zero-division message
    pub fn with_zero_division_message(mut self, message: impl Into<String>) -> Self {
        self.zero_division_message = message.into();
        self
    }

    /// Text rendered for an error kind
    pub fn sentinel(&self, kind: ErrorKind) -> &str {
        match kind {
            ErrorKind::NumbersOnly => &self.numbers_only_message,
            ErrorKind::DivisionByZero => &self.zero_division_message,
        }
    }

    /// Which error kind, if any, a reply text stands for
    pub fn classify(&self, text: &str) -> Option<ErrorKind> {
        [ErrorKind::NumbersOnly, ErrorKind::DivisionByZero]
            .into_iter()
            .find(|kind| self.sentinel(*kind) == text)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.numbers_only_message.trim().is_empty() {
            return Err("Numbers-only message cannot be empty".to_string());
        }

        if self.zero_division_message.trim().is_empty() {
            return Err("Zero-division message cannot be empty".to_string());
        }

        // Callers tell the two errors apart by text alone
        if self.numbers_only_message == self.zero_division_message {
            return Err("Sentinel messages must differ".to_string());
        }

        Ok(())
    }

    /// Parse a configuration from JSON and validate it
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Default wording
    /// - "brmph?! Numbers only. Try again..."
    /// - "brmph?! I cannot divide by 0. Try again..."
    pub fn brmph() -> Self {
        Self::new(
            "brmph?! Numbers only. Try again...",
            "brmph?! I cannot divide by 0. Try again...",
        )
    }

    /// Wording of the earlier exercises
    /// - "Excuse me?! Numbers only! try again..."
    /// - "brmph?! cannot divide by 0. Try again..."
    pub fn excuse_me() -> Self {
        Self::new(
            "Excuse me?! Numbers only! try again...",
            "brmph?! cannot divide by 0. Try again...",
        )
    }

    /// Wording that reports division by zero as undefined
    /// - "Excuse me?! numbers only. Try again..."
    /// - "undefined: I cannot divide by 0"
    pub fn undefined() -> Self {
        Self::new(
            "Excuse me?! numbers only. Try again...",
            "undefined: I cannot divide by 0",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_brmph() {
        let config = CalculatorConfig::default();
        assert_eq!(config, CalculatorConfig::brmph());
        assert_eq!(
            config.sentinel(ErrorKind::NumbersOnly),
            "brmph?! Numbers only. Try again..."
        );
        assert_eq!(
            config.sentinel(ErrorKind::DivisionByZero),
            "brmph?! I cannot divide by 0. Try again..."
        );
    }

    #[test]
    fn test_builder_pattern() {
        let config = CalculatorConfig::brmph()
            .with_numbers_only_message("numbers please")
            .with_zero_division_message("not by zero");

        assert_eq!(config.numbers_only_message, "numbers please");
        assert_eq!(config.zero_division_message, "not by zero");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let blank = CalculatorConfig::brmph().with_numbers_only_message("  ");
        assert!(blank.validate().is_err());

        let empty = CalculatorConfig::brmph().with_zero_division_message("");
        assert!(empty.validate().is_err());

        let same = CalculatorConfig::new("oops", "oops");
        assert_eq!(
            same.validate(),
            Err("Sentinel messages must differ".to_string())
        );
    }

    #[test]
    fn test_preset_configs() {
        for config in [
            CalculatorConfig::brmph(),
            CalculatorConfig::excuse_me(),
            CalculatorConfig::undefined(),
        ] {
            assert!(config.validate().is_ok());
        }
        assert_ne!(CalculatorConfig::brmph(), CalculatorConfig::excuse_me());
    }

    #[test]
    fn test_classify() {
        let config = CalculatorConfig::undefined();
        assert_eq!(
            config.classify("undefined: I cannot divide by 0"),
            Some(ErrorKind::DivisionByZero)
        );
        assert_eq!(
            config.classify("Excuse me?! numbers only. Try again..."),
            Some(ErrorKind::NumbersOnly)
        );
        assert_eq!(config.classify("brmph?! Numbers only. Try again..."), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let config = CalculatorConfig::from_json(
            r#"{"numbers_only_message": "numbers!", "zero_division_message": "zero!"}"#,
        )
        .unwrap();
        assert_eq!(config.sentinel(ErrorKind::DivisionByZero), "zero!");

        let same = r#"{"numbers_only_message": "x", "zero_division_message": "x"}"#;
        assert!(CalculatorConfig::from_json(same).is_err());
    }
}
