//! Period-by-period Actual/Actual year fractions.
//!
//! Each coupon period's actual days are divided by the base of the calendar
//! year containing the period's payment date, and the fractions are summed
//! from settlement. This cumulative fraction is the discounting exponent.

use serde::Serialize;

use bondval_core::daycounts::{ActActPaymentYear, DayCount};
use bondval_core::types::Date;

use super::Schedule;

/// One coupon period with its Actual/Actual measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccrualPeriod {
    /// Period start (settlement for the first period).
    pub start: Date,
    /// Period end (the payment date).
    pub end: Date,
    /// Actual calendar days in the period.
    pub days: i64,
    /// Day-count base of the payment year (365 or 366).
    pub basis: u32,
    /// Cumulative year fraction from settlement to `end`.
    pub cumulative_years: f64,
}

/// Measures every period of `schedule` and accumulates the year fractions.
///
/// The result is parallel to `schedule.dates()`, and `cumulative_years` is
/// strictly increasing because every period is at least one day long.
#[must_use]
pub fn accumulate_year_fractions(schedule: &Schedule) -> Vec<AccrualPeriod> {
    let dc = ActActPaymentYear;
    let mut cumulative = 0.0;

    schedule
        .periods()
        .map(|(start, end)| {
            cumulative += dc.year_fraction(start, end);
            AccrualPeriod {
                start,
                end,
                days: dc.day_count(start, end),
                basis: dc.basis(end),
                cumulative_years: cumulative,
            }
        })
        .collect()
}
