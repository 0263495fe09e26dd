//! Root-finding algorithms.
//!
//! This module provides Newton-Raphson iteration:
//!
//! - [`newton_raphson`]: analytical derivative, infallible objective
//! - [`try_newton_raphson`]: caller-supplied derivative, fallible objective
//! - [`newton_raphson_numerical`]: forward-difference derivative, infallible objective
//! - [`try_newton_raphson_numerical`]: forward-difference derivative over an
//!   objective that may itself fail (e.g. when evaluated outside its domain)
//!
//! All of them stop as soon as `|f(x)| < tolerance` and refuse to divide by a
//! derivative smaller in magnitude than [`SolverConfig::min_derivative`].
//!
//! # Example: YTM Calculation
//!
//! ```rust
//! use bondval_math::solvers::{newton_raphson_numerical, SolverConfig};
//!
//! // Annual bond: 5% coupon, 5 years, price 95
//! let price_fn = |y: f64| {
//!     let mut pv = 0.0;
//!     for t in 1..=5 {
//!         pv += 5.0 / (1.0 + y).powi(t);
//!     }
//!     pv += 100.0 / (1.0 + y).powi(5);
//!     pv - 95.0
//! };
//!
//! let result = newton_raphson_numerical(price_fn, 0.05, &SolverConfig::default()).unwrap();
//! assert!(result.root > 0.05); // YTM > coupon rate for discount bond
//! ```

mod newton;

pub use newton::{
    newton_raphson, newton_raphson_numerical, try_newton_raphson, try_newton_raphson_numerical,
};

use crate::error::{MathError, MathResult};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Default smallest derivative magnitude a Newton step may divide by.
pub const DEFAULT_MIN_DERIVATIVE: f64 = 1e-12;

/// Default forward-difference step.
pub const DEFAULT_DIFFERENCE_STEP: f64 = 1e-5;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Convergence is declared when `|f(x)|` drops below this.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
    /// Smallest derivative magnitude accepted for a Newton step.
    pub min_derivative: f64,
    /// Step used for forward-difference derivatives.
    pub difference_step: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            min_derivative: DEFAULT_MIN_DERIVATIVE,
            difference_step: DEFAULT_DIFFERENCE_STEP,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
            ..Self::default()
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the minimum derivative magnitude.
    #[must_use]
    pub fn with_min_derivative(mut self, min_derivative: f64) -> Self {
        self.min_derivative = min_derivative;
        self
    }

    /// Sets the forward-difference step.
    #[must_use]
    pub fn with_difference_step(mut self, step: f64) -> Self {
        self.difference_step = step;
        self
    }

    /// Checks that every parameter is usable.
    ///
    /// # Errors
    ///
    /// Returns `MathError::InvalidInput` naming the first bad parameter.
    pub fn validate(&self) -> MathResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(MathError::invalid_input(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::invalid_input("max_iterations must be at least 1"));
        }
        if !(self.min_derivative.is_finite() && self.min_derivative >= 0.0) {
            return Err(MathError::invalid_input(format!(
                "min_derivative must be non-negative, got {}",
                self.min_derivative
            )));
        }
        if !(self.difference_step.is_finite() && self.difference_step > 0.0) {
            return Err(MathError::invalid_input(format!(
                "difference_step must be positive, got {}",
                self.difference_step
            )));
        }
        Ok(())
    }
}

/// Result of a root-finding operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of Newton updates performed before convergence.
    pub iterations: u32,
    /// Function value at the root.
    pub residual: f64,
}
