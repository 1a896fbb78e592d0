//! Error types for the Allowance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading children and
//! evaluating their allowances.
//!
//! There is deliberately no unknown-currency variant: unknown currency codes
//! fall back to the default currency when formatting.

use thiserror::Error;

/// The main error type for the Allowance Engine.
///
/// # Example
///
/// ```
/// use allowance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/allowance.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/allowance.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A birthday could not be parsed or lies in the future.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The offending input.
        value: String,
        /// A description of what made the date invalid.
        message: String,
    },

    /// A calculation received inputs that contradict each other.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// A description of the invalid input.
        message: String,
    },

    /// A child's percentage was outside 0..=100.
    #[error("Invalid percentage {value} for child '{child}': must be between 0 and 100")]
    InvalidPercentage {
        /// The child the percentage belongs to.
        child: String,
        /// The rejected percentage.
        value: String,
    },

    /// A child record was invalid.
    #[error("Invalid child: {message}")]
    InvalidChild {
        /// A description of what made the child invalid.
        message: String,
    },

    /// Two children share the same name.
    #[error("Duplicate child name: {name}")]
    DuplicateChild {
        /// The duplicated name.
        name: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/allowance.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/allowance.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_date_displays_value_and_message() {
        let error = EngineError::InvalidDate {
            value: "2015-13-01".to_string(),
            message: "expected YYYY-MM-DD".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date '2015-13-01': expected YYYY-MM-DD"
        );
    }

    #[test]
    fn test_invalid_input_displays_message() {
        let error = EngineError::InvalidInput {
            message: "birthday 2030-01-01 is after reference date 2024-01-01".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input: birthday 2030-01-01 is after reference date 2024-01-01"
        );
    }

    #[test]
    fn test_invalid_percentage_displays_child_and_value() {
        let error = EngineError::InvalidPercentage {
            child: "Alice".to_string(),
            value: "120".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid percentage 120 for child 'Alice': must be between 0 and 100"
        );
    }

    #[test]
    fn test_duplicate_child_displays_name() {
        let error = EngineError::DuplicateChild {
            name: "Bob".to_string(),
        };
        assert_eq!(error.to_string(), "Duplicate child name: Bob");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_input() -> EngineResult<()> {
            Err(EngineError::InvalidInput {
                message: "test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_input()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
