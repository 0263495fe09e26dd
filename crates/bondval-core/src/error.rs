//! Error types for the Bondval library.
//!
//! This module defines the error types shared by every Bondval crate,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for Bondval core operations.
pub type BondvalResult<T> = Result<T, BondvalError>;

/// The main error type for Bondval core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BondvalError {
    /// A calendar-invalid date (e.g. 30 February).
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A date string that does not match the expected format.
    #[error("Cannot parse date '{input}': expected {expected}")]
    DateParse {
        /// The rejected input.
        input: String,
        /// Human-readable format description.
        expected: &'static str,
    },
}

impl BondvalError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a date parse error.
    #[must_use]
    pub fn date_parse(input: impl Into<String>, expected: &'static str) -> Self {
        Self::DateParse {
            input: input.into(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BondvalError::invalid_date("2025-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_parse_error_display() {
        let err = BondvalError::date_parse("2024/09/05", "DD-MM-YYYY");
        let msg = err.to_string();
        assert!(msg.contains("2024/09/05"));
        assert!(msg.contains("DD-MM-YYYY"));
    }
}
