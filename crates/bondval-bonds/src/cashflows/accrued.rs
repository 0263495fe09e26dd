//! Accrued interest calculations for annual Actual/Actual bonds.
//!
//! Accrued interest is the share of the current coupon earned between the
//! previous coupon date and settlement:
//!
//! ```text
//! AI = coupon × days(previous, settlement) / basis
//! ```
//!
//! The basis depends on [`AccruedBasis`]:
//! - `LeapSpan`: 366 if any calendar year from the previous coupon's year
//!   through the next coupon's year is a leap year, else 365
//! - `ActualPeriod`: actual days from the previous to the next coupon
//!
//! # Example
//!
//! ```rust
//! use bondval_bonds::cashflows::AccruedInterestCalculator;
//! use bondval_core::types::{AccruedBasis, Date};
//!
//! let accrued = AccruedInterestCalculator::calculate(
//!     AccruedBasis::LeapSpan,
//!     Date::from_ymd(2024, 9, 5).unwrap(),  // settlement
//!     Date::from_ymd(2023, 9, 18).unwrap(), // previous coupon
//!     Date::from_ymd(2024, 9, 18).unwrap(), // next coupon
//!     7.75,
//! );
//! assert_eq!(accrued.days_accrued, 353);
//! assert_eq!(accrued.basis_days, 366);
//! ```

use serde::Serialize;

use bondval_core::daycounts::is_leap_year;
use bondval_core::types::{AccruedBasis, Date};

/// Accrued interest together with the inputs that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccruedInterest {
    /// Last theoretical coupon date on or before settlement.
    pub previous_coupon: Date,
    /// First coupon date after settlement.
    pub next_coupon: Date,
    /// Calendar days from the previous coupon to settlement.
    pub days_accrued: i64,
    /// Denominator applied to `days_accrued`.
    pub basis_days: i64,
    /// Accrued amount in currency units.
    pub amount: f64,
}

/// Calculator for accrued interest.
pub struct AccruedInterestCalculator;

impl AccruedInterestCalculator {
    /// Calculates accrued interest under `basis`.
    ///
    /// # Arguments
    ///
    /// * `basis` - Which denominator to use
    /// * `settlement` - Settlement date
    /// * `previous_coupon` - Last coupon date on or before settlement
    /// * `next_coupon` - First coupon date after settlement
    /// * `coupon` - Coupon amount per (annual) period
    #[must_use]
    pub fn calculate(
        basis: AccruedBasis,
        settlement: Date,
        previous_coupon: Date,
        next_coupon: Date,
        coupon: f64,
    ) -> AccruedInterest {
        let days_accrued = previous_coupon.days_between(&settlement);
        let basis_days = match basis {
            AccruedBasis::LeapSpan => i64::from(Self::leap_span_basis(previous_coupon, next_coupon)),
            AccruedBasis::ActualPeriod => previous_coupon.days_between(&next_coupon),
        };

        let amount = if basis_days > 0 {
            coupon * days_accrued as f64 / basis_days as f64
        } else {
            0.0
        };

        AccruedInterest {
            previous_coupon,
            next_coupon,
            days_accrued,
            basis_days,
            amount,
        }
    }

    /// Returns 366 if any calendar year from `previous_coupon`'s year through
    /// `next_coupon`'s year is a leap year, else 365.
    #[must_use]
    pub fn leap_span_basis(previous_coupon: Date, next_coupon: Date) -> u32 {
        let (first, last) = (previous_coupon.year(), next_coupon.year());
        if (first..=last).any(is_leap_year) {
            366
        } else {
            365
        }
    }
}
