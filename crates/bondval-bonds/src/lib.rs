//! # Bondval Bonds
//!
//! Valuation of annual fixed-coupon bonds under Actual/Actual conventions.
//!
//! This crate provides:
//!
//! - **Instruments**: [`FixedBond`](instruments::FixedBond), the aggregate every operation runs on
//! - **Cash Flows**: Coupon schedules, period year fractions and accrued interest
//! - **Pricing**: Discounting, dirty/clean price and yield-to-maturity
//! - **Risk**: Macaulay and modified duration
//!
//! ## Example
//!
//! ```rust
//! use bondval_bonds::prelude::*;
//!
//! let bond = FixedBond::from_strings("05-09-2024", "18-09-2030", 0.09596, 7.75, 100.0).unwrap();
//!
//! let valuation = bond.valuation().unwrap();
//! assert!((valuation.dirty_price - 99.2904).abs() < 1e-4);
//!
//! let ytm = bond.yield_from_clean_price(valuation.clean_price).unwrap();
//! assert!((ytm - 0.09596).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]
#![allow(clippy::return_self_not_must_use)]

pub mod cashflows;
pub mod error;
pub mod instruments;
pub mod pricing;
pub mod risk;

/// Prelude module for convenient imports.
pub mod prelude {
    // Cash flows
    pub use crate::cashflows::{
        AccrualPeriod, AccruedInterest, AccruedInterestCalculator, CashFlowRow, CashFlowTable,
        Schedule, ScheduleConfig,
    };

    // Errors
    pub use crate::error::{BondError, BondResult};

    // Instruments
    pub use crate::instruments::FixedBond;

    // Pricing
    pub use crate::pricing::{DiscountEngine, Valuation, YieldResult, YieldSolver};

    // Risk
    pub use crate::risk::DurationResult;

    // Core types callers need alongside bonds
    pub use bondval_core::types::{AccruedBasis, BondConventions, Date, LeapDayPolicy, TimeBasis};
}

pub use error::{BondError, BondResult};
