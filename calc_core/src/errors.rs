//! # Error Types
//!
//! Structured error types for calc_core. The engine never surfaces these to
//! its callers directly: any error raised while evaluating a pending operation
//! moves the calculator into its `"Error"` display state. They are public so
//! that front ends can validate key strings and so that the arithmetic layer
//! can be used on its own.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::CalcError;
//! use calc_core::operator::Operator;
//!
//! let err = Operator::Divide.apply(5.0, 0.0).unwrap_err();
//! assert_eq!(err, CalcError::DivisionByZero);
//! assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// The right operand of a division was zero
    #[error("Division by zero")]
    DivisionByZero,

    /// The result does not fit in a finite double
    #[error("Result out of range")]
    Overflow,

    /// The display text could not be read back as a number
    #[error("Invalid operand: '{value}'")]
    InvalidOperand { value: String },

    /// A character or key name with no calculator mapping
    #[error("Unknown key: '{key}'")]
    UnknownKey { key: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// A restored engine snapshot describes a state the engine cannot reach
    #[error("Invalid snapshot: {reason}")]
    InvalidSnapshot { reason: String },
}

impl CalcError {
    /// Create an InvalidOperand error
    pub fn invalid_operand(value: impl Into<String>) -> Self {
        CalcError::InvalidOperand {
            value: value.into(),
        }
    }

    /// Create an UnknownKey error
    pub fn unknown_key(key: impl Into<String>) -> Self {
        CalcError::UnknownKey { key: key.into() }
    }

    /// Create an InvalidSnapshot error
    pub fn invalid_snapshot(reason: impl Into<String>) -> Self {
        CalcError::InvalidSnapshot {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero => "DIVISION_BY_ZERO",
            CalcError::Overflow => "OVERFLOW",
            CalcError::InvalidOperand { .. } => "INVALID_OPERAND",
            CalcError::UnknownKey { .. } => "UNKNOWN_KEY",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::InvalidSnapshot { .. } => "INVALID_SNAPSHOT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_operand("-");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("InvalidOperand"));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_unit_variant_serialization() {
        let json = serde_json::to_string(&CalcError::DivisionByZero).unwrap();
        assert_eq!(json, r#"{"type":"DivisionByZero"}"#);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::DivisionByZero.error_code(), "DIVISION_BY_ZERO");
        assert_eq!(CalcError::Overflow.error_code(), "OVERFLOW");
        assert_eq!(CalcError::unknown_key("x").error_code(), "UNKNOWN_KEY");
        assert_eq!(
            CalcError::invalid_snapshot("empty display").error_code(),
            "INVALID_SNAPSHOT"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(CalcError::unknown_key("?").to_string(), "Unknown key: '?'");
    }
}
