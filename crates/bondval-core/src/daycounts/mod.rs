//! Day count conventions for annual fixed-coupon bonds.
//!
//! Everything here is Actual/Actual: the numerator is always the real number
//! of calendar days, and the denominator is the length of a real calendar
//! year (365 or 366). Two readings of "the relevant year" are provided:
//!
//! - [`ActActPaymentYear`]: the whole period is divided by the base of the
//!   calendar year containing the period's end (payment) date
//! - [`ActActIsda`]: the period is split at each 1 January and every piece is
//!   divided by the base of its own calendar year
//!
//! # Usage
//!
//! ```rust
//! use bondval_core::daycounts::{ActActIsda, DayCount};
//! use bondval_core::types::Date;
//!
//! let dc = ActActIsda;
//! let start = Date::from_ymd(2024, 9, 5).unwrap();
//! let end = Date::from_ymd(2025, 9, 18).unwrap();
//!
//! assert_eq!(dc.day_count(start, end), 378);
//! let yf = dc.year_fraction(start, end);
//! assert!(yf > 1.0 && yf < 1.04);
//! ```

mod actact;

pub use actact::{ActActIsda, ActActPaymentYear};

use crate::types::Date;

/// Returns true iff `year` is a Gregorian leap year.
///
/// A year is a leap year if it is divisible by 4 and not by 100, or if it is
/// divisible by 400.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the Actual/Actual day-count base of `year`: 366 in a leap year,
/// 365 otherwise.
#[must_use]
pub const fn year_basis(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates.
    ///
    /// For Actual/Actual this is the number of calendar days.
    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(1600));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn test_year_basis() {
        assert_eq!(year_basis(2024), 366);
        assert_eq!(year_basis(2025), 365);
        assert_eq!(year_basis(2100), 365);
        assert_eq!(year_basis(2000), 366);
    }

    #[test]
    fn test_trait_objects() {
        let conventions: Vec<Box<dyn DayCount>> =
            vec![Box::new(ActActIsda), Box::new(ActActPaymentYear)];
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2026, 1, 1).unwrap();

        for dc in &conventions {
            assert_eq!(dc.day_count(start, end), 365, "{}", dc.name());
        }
    }
}
