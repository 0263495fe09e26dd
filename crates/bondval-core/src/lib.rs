//! # Bondval Core
//!
//! Core types and abstractions for the Bondval bond valuation library.
//!
//! This crate provides the foundational building blocks used throughout Bondval:
//!
//! - **Types**: A calendar-correct `Date` and the convention policies that
//!   select between competing Actual/Actual readings
//! - **Day Count Conventions**: Leap-year detection, annual day-count bases and
//!   Actual/Actual year fractions
//!
//! ## Example
//!
//! ```rust
//! use bondval_core::prelude::*;
//!
//! let settlement = Date::parse_dmy("05-09-2024").unwrap();
//! assert!(settlement.is_leap_year());
//! assert_eq!(year_basis(settlement.year()), 366);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{
        is_leap_year, year_basis, ActActIsda, ActActPaymentYear, DayCount,
    };
    pub use crate::error::{BondvalError, BondvalResult};
    pub use crate::types::{AccruedBasis, BondConventions, Date, LeapDayPolicy, TimeBasis};
}

// Re-export commonly used types at crate root
pub use error::{BondvalError, BondvalResult};
pub use types::{AccruedBasis, BondConventions, Date, LeapDayPolicy, TimeBasis};
