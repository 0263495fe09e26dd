//! Pricing configuration types.
//!
//! This module defines configuration structures for yield solving and the
//! Actual/Actual convention policies.

use std::path::Path;

use serde::{Deserialize, Serialize};

use bondval_bonds::pricing::{
    YieldSolver, DEFAULT_INITIAL_GUESS, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};
use bondval_core::types::BondConventions;

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

// =============================================================================
// PRICING CONFIGURATION
// =============================================================================

/// Pricing configuration for bond valuation.
///
/// Every field has a default, so an empty document is a valid configuration.
///
/// ```toml
/// [solver]
/// initial_guess = 0.08
/// max_iterations = 500
///
/// [conventions]
/// leap_day_policy = "clamp_to_february28"
/// accrued_basis = "actual_period"
/// time_basis = "period_accumulated"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Yield solver settings.
    #[serde(default)]
    pub solver: SolverSettings,

    /// Convention policies applied to every bond.
    #[serde(default)]
    pub conventions: BondConventions,
}

impl PricingConfig {
    /// Parses a configuration from TOML text and validates it.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file and validates it.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Sets the solver settings.
    #[must_use]
    pub fn with_solver(mut self, solver: SolverSettings) -> Self {
        self.solver = solver;
        self
    }

    /// Sets the convention policies.
    #[must_use]
    pub fn with_conventions(mut self, conventions: BondConventions) -> Self {
        self.conventions = conventions;
        self
    }
}

impl Validate for PricingConfig {
    fn validate(&self) -> Vec<ValidationError> {
        self.solver.validate()
    }
}

// =============================================================================
// SOLVER SETTINGS
// =============================================================================

/// Tuning for the Newton-Raphson yield solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Starting yield.
    #[serde(default = "default_initial_guess")]
    pub initial_guess: f64,

    /// Maximum Newton iterations.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Absolute dirty-price tolerance.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Forward-difference step for the price derivative.
    #[serde(default = "default_difference_step")]
    pub difference_step: f64,

    /// Smallest derivative magnitude accepted for a Newton step.
    #[serde(default = "default_min_derivative")]
    pub min_derivative: f64,
}

fn default_initial_guess() -> f64 {
    DEFAULT_INITIAL_GUESS
}

fn default_max_iterations() -> u32 {
    DEFAULT_MAX_ITERATIONS
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_difference_step() -> f64 {
    1e-5
}

fn default_min_derivative() -> f64 {
    1e-12
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            initial_guess: default_initial_guess(),
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
            difference_step: default_difference_step(),
            min_derivative: default_min_derivative(),
        }
    }
}

impl SolverSettings {
    /// Builds a yield solver from these settings.
    pub fn to_yield_solver(&self) -> YieldSolver {
        YieldSolver::new()
            .with_initial_guess(self.initial_guess)
            .with_max_iterations(self.max_iterations)
            .with_tolerance(self.tolerance)
            .with_difference_step(self.difference_step)
            .with_min_derivative(self.min_derivative)
    }
}

impl Validate for SolverSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !(self.initial_guess.is_finite() && self.initial_guess > -1.0) {
            errors.push(ValidationError::with_rule(
                "solver.initial_guess",
                format!("Initial guess {} must be finite and above -1", self.initial_guess),
                "yield_domain",
            ));
        }

        if self.max_iterations == 0 || self.max_iterations > 100_000 {
            errors.push(ValidationError::with_rule(
                "solver.max_iterations",
                "Max iterations must be between 1 and 100000",
                "valid_iterations",
            ));
        }

        if !(self.tolerance > 0.0 && self.tolerance <= 1e-2) {
            errors.push(ValidationError::with_rule(
                "solver.tolerance",
                "Solver tolerance must be between 0 and 1e-2",
                "valid_tolerance",
            ));
        }

        if !(self.difference_step > 0.0 && self.difference_step <= 1e-2) {
            errors.push(ValidationError::with_rule(
                "solver.difference_step",
                "Difference step must be between 0 and 1e-2",
                "valid_step",
            ));
        }

        if !(self.min_derivative.is_finite() && self.min_derivative >= 0.0) {
            errors.push(ValidationError::with_rule(
                "solver.min_derivative",
                "Minimum derivative must be non-negative",
                "non_negative",
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bondval_core::types::{AccruedBasis, LeapDayPolicy, TimeBasis};

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = PricingConfig::from_toml_str("").unwrap();
        assert_eq!(config, PricingConfig::default());
        assert_eq!(config.solver.initial_guess, 0.05);
        assert_eq!(config.solver.max_iterations, 1000);
        assert_eq!(config.solver.tolerance, 1e-6);
        assert!(config.is_valid());
    }

    #[test]
    fn test_partial_document() {
        let config = PricingConfig::from_toml_str(
            r#"
            [solver]
            initial_guess = 0.08

            [conventions]
            leap_day_policy = "clamp_to_february28"
            accrued_basis = "actual_period"
            "#,
        )
        .unwrap();

        assert_eq!(config.solver.initial_guess, 0.08);
        assert_eq!(config.solver.max_iterations, 1000);
        assert_eq!(
            config.conventions.leap_day_policy,
            LeapDayPolicy::ClampToFebruary28
        );
        assert_eq!(config.conventions.accrued_basis, AccruedBasis::ActualPeriod);
        assert_eq!(config.conventions.time_basis, TimeBasis::CalendarYear);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let result = PricingConfig::from_toml_str(
            r#"
            [conventions]
            time_basis = "thirty_360"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Deserialization(_))));
    }

    #[test]
    fn test_validation_collects_every_error() {
        let settings = SolverSettings {
            initial_guess: -1.0,
            max_iterations: 0,
            tolerance: 0.0,
            ..SolverSettings::default()
        };
        let errors = settings.validate();
        assert_eq!(errors.len(), 3);

        let result = PricingConfig::default().with_solver(settings).validate_or_error();
        assert!(matches!(
            result,
            Err(ConfigError::MultipleValidationErrors(ref e)) if e.len() == 3
        ));
    }

    #[test]
    fn test_invalid_document_rejected() {
        let result = PricingConfig::from_toml_str("[solver]\nmax_iterations = 0\n");
        assert!(matches!(
            result,
            Err(ConfigError::Validation { ref field, .. }) if field == "solver.max_iterations"
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PricingConfig::default().with_conventions(
            BondConventions::default().with_time_basis(TimeBasis::PeriodAccumulated),
        );
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("period_accumulated"));
        assert_eq!(PricingConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_yield_solver_from_settings() {
        let settings = SolverSettings {
            initial_guess: 0.1,
            max_iterations: 50,
            ..SolverSettings::default()
        };
        let solver = settings.to_yield_solver();
        assert_eq!(solver.initial_guess(), 0.1);
        assert_eq!(solver.config().max_iterations, 50);
        assert_eq!(solver.config().tolerance, 1e-6);
    }
}
