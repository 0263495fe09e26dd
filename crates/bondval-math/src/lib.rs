//! # Bondval Math
//!
//! Numerical utilities for the Bondval bond valuation library.
//!
//! This crate provides:
//!
//! - **Solvers**: Newton-Raphson root finding with an analytical or a
//!   forward-difference derivative, over fallible objective functions

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        newton_raphson, newton_raphson_numerical, try_newton_raphson_numerical, SolverConfig,
        SolverResult,
    };
}

pub use error::{MathError, MathResult};
