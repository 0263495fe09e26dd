//! Bondval Configuration Layer
//!
//! Serializable pricing settings for the Bondval bond valuation library:
//! yield solver tuning and the Actual/Actual convention policies, loaded
//! from TOML and validated before use.
//!
//! # Example
//!
//! ```rust
//! use bondval_config::{PricingConfig, Validate};
//!
//! let config = PricingConfig::from_toml_str(
//!     r#"
//!     [solver]
//!     max_iterations = 200
//!     "#,
//! )
//! .unwrap();
//!
//! assert!(config.is_valid());
//! assert_eq!(config.solver.to_yield_solver().config().max_iterations, 200);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod pricing;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use pricing::{PricingConfig, SolverSettings};
