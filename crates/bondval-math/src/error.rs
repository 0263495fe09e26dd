//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Root-finding algorithm failed to converge.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e}, last x: {last_x})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
        /// Final iterate.
        last_x: f64,
    },

    /// The derivative is too close to zero to take a Newton step.
    #[error("Derivative {derivative:.2e} at x = {x} is too close to zero")]
    DerivativeTooSmall {
        /// Point at which the derivative was evaluated.
        x: f64,
        /// The near-zero derivative.
        derivative: f64,
    },

    /// The objective or its derivative produced NaN or infinity.
    #[error("Non-finite value {value} at x = {x}")]
    NonFinite {
        /// Point of evaluation.
        x: f64,
        /// The offending value.
        value: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64, last_x: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
            last_x,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::convergence_failed(100, 1e-6, 0.05);
        assert!(err.to_string().contains("100 iterations"));
    }

    #[test]
    fn test_derivative_error_display() {
        let err = MathError::DerivativeTooSmall {
            x: 0.5,
            derivative: 1e-15,
        };
        assert!(err.to_string().contains("too close to zero"));
    }
}
