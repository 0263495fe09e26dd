//! Error types for bond operations.

use bondval_core::{BondvalError, Date};
use bondval_math::MathError;
use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
///
/// Input validation, numeric failures and calendar edge cases each have
/// their own variant so callers can tell them apart.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Invalid bond specification.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Settlement is on or after maturity.
    #[error("Settlement date {settlement} must be before maturity {maturity}")]
    SettlementNotBeforeMaturity {
        /// Settlement date.
        settlement: Date,
        /// Maturity date.
        maturity: Date,
    },

    /// The yield makes `1 + yield` non-positive (or is not a number).
    #[error("Yield {value} is outside the pricing domain (1 + yield must be positive)")]
    YieldOutOfDomain {
        /// The rejected yield.
        value: f64,
    },

    /// A 29 February anniversary was needed in a year that has none.
    #[error("Coupon anniversary 29 February does not exist in {year}")]
    UndefinedLeapDayAnchor {
        /// The common year in which the anniversary was requested.
        year: i32,
    },

    /// Invalid price.
    #[error("Invalid price: {reason}")]
    InvalidPrice {
        /// Description of what's invalid.
        reason: String,
    },

    /// Price sensitivity to yield vanished during yield solving.
    #[error("Price derivative {derivative:.2e} at yield {yield_value} is too close to zero")]
    DerivativeVanished {
        /// Yield at which the derivative was estimated.
        yield_value: f64,
        /// The near-zero derivative.
        derivative: f64,
    },

    /// Yield calculation failed to converge.
    #[error("Yield calculation failed to converge after {iterations} iterations (residual {residual:.2e} at yield {last_yield})")]
    YieldConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Absolute pricing error at the last evaluated yield.
        residual: f64,
        /// Last evaluated yield.
        last_yield: f64,
    },

    /// Pricing calculation failed.
    #[error("Pricing failed: {reason}")]
    PricingFailed {
        /// Description of the failure.
        reason: String,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    CoreError(#[from] BondvalError),
}

impl BondError {
    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(reason: impl Into<String>) -> Self {
        Self::InvalidPrice {
            reason: reason.into(),
        }
    }

    /// Creates a pricing failed error.
    #[must_use]
    pub fn pricing_failed(reason: impl Into<String>) -> Self {
        Self::PricingFailed {
            reason: reason.into(),
        }
    }
}

impl From<MathError> for BondError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::ConvergenceFailed {
                iterations,
                residual,
                last_x,
            } => Self::YieldConvergenceFailed {
                iterations,
                residual,
                last_yield: last_x,
            },
            MathError::DerivativeTooSmall { x, derivative } => Self::DerivativeVanished {
                yield_value: x,
                derivative,
            },
            MathError::NonFinite { x, value } => {
                Self::pricing_failed(format!("non-finite value {value} at yield {x}"))
            }
            MathError::InvalidInput { reason } => Self::invalid_spec(reason),
        }
    }
}
