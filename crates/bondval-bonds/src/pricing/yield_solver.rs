//! Yield-to-maturity solver.
//!
//! Finds the yield at which the discounted cash flows equal the dirty
//! price implied by a target clean price, using Newton-Raphson with a
//! forward-difference derivative.
//!
//! # Example
//!
//! ```rust
//! use bondval_bonds::instruments::FixedBond;
//! use bondval_bonds::pricing::YieldSolver;
//!
//! let bond = FixedBond::from_strings("05-09-2024", "18-09-2030", 0.09596, 7.75, 100.0).unwrap();
//! let clean = bond.clean_price().unwrap();
//!
//! let result = YieldSolver::new().solve(&bond, clean).unwrap();
//! assert!((result.yield_value - 0.09596).abs() < 1e-6);
//! ```

use serde::Serialize;

use bondval_math::solvers::{try_newton_raphson_numerical, SolverConfig};

use crate::error::{BondError, BondResult};
use crate::instruments::FixedBond;
use crate::pricing::DiscountEngine;

/// Default starting yield.
pub const DEFAULT_INITIAL_GUESS: f64 = 0.05;

/// Default iteration cap.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// Default absolute price tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YieldResult {
    /// The calculated yield (as a decimal, e.g., 0.05 for 5%).
    pub yield_value: f64,
    /// Number of Newton updates performed.
    pub iterations: u32,
    /// Dirty price error at the solved yield.
    pub residual: f64,
}

/// Yield-to-maturity solver.
///
/// The solver never touches the bond's stored yield; it searches over a
/// local variable and returns the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldSolver {
    config: SolverConfig,
    initial_guess: f64,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a new yield solver with default settings.
    ///
    /// Default initial guess: 0.05
    /// Default tolerance: 1e-6
    /// Default max iterations: 1000
    /// Default difference step: 1e-5
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::new(DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS),
            initial_guess: DEFAULT_INITIAL_GUESS,
        }
    }

    /// Sets the starting yield.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Sets the forward-difference step.
    #[must_use]
    pub fn with_difference_step(mut self, step: f64) -> Self {
        self.config = self.config.with_difference_step(step);
        self
    }

    /// Sets the smallest derivative accepted for a Newton step.
    #[must_use]
    pub fn with_min_derivative(mut self, min_derivative: f64) -> Self {
        self.config = self.config.with_min_derivative(min_derivative);
        self
    }

    /// Returns the starting yield.
    #[must_use]
    pub fn initial_guess(&self) -> f64 {
        self.initial_guess
    }

    /// Returns the underlying root-finder configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves for the yield that reprices `bond` to `target_clean`.
    ///
    /// # Arguments
    ///
    /// * `bond` - The bond; only its dates, coupon, par and conventions are used
    /// * `target_clean` - Clean price to match
    ///
    /// # Errors
    ///
    /// - `BondError::InvalidPrice` if `target_clean` is not finite
    /// - `BondError::YieldOutOfDomain` if an iterate reaches `1 + y <= 0`
    /// - `BondError::DerivativeVanished` if the price stops responding to yield
    /// - `BondError::YieldConvergenceFailed` if the iteration cap is reached
    pub fn solve(&self, bond: &FixedBond, target_clean: f64) -> BondResult<YieldResult> {
        if !target_clean.is_finite() {
            return Err(BondError::invalid_price(format!(
                "target clean price must be finite, got {target_clean}"
            )));
        }

        let accrued = bond.accrued_interest()?.amount;
        let target_dirty = target_clean + accrued;
        let periods = bond.accrual_periods()?;
        let engine = DiscountEngine::new(bond.coupon(), bond.par());

        log::debug!(
            "solving yield: target clean {target_clean}, dirty {target_dirty}, guess {}",
            self.initial_guess
        );

        let objective = |y: f64| -> BondResult<f64> {
            Ok(engine.dirty_price(&periods, y)? - target_dirty)
        };

        match try_newton_raphson_numerical(objective, self.initial_guess, &self.config) {
            Ok(result) => {
                log::debug!(
                    "yield converged to {} after {} iterations",
                    result.root,
                    result.iterations
                );
                Ok(YieldResult {
                    yield_value: result.root,
                    iterations: result.iterations,
                    residual: result.residual,
                })
            }
            Err(err) => {
                log::warn!("yield solve failed for clean price {target_clean}: {err}");
                Err(err)
            }
        }
    }
}
