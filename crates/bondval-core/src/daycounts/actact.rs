//! Actual/Actual day count conventions.

use super::{year_basis, DayCount};
use crate::types::Date;

/// Actual/Actual ISDA day count convention.
///
/// The year fraction is calculated by splitting the period at each
/// 1 January and dividing the days of each piece by the length of the
/// calendar year it falls in.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Days in non-leap years}}{365} + \frac{\text{Days in leap years}}{366}$$
///
/// Whole calendar years in the middle contribute exactly 1 each.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActActIsda;

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "ACT/ACT ISDA"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        if start >= end {
            return 0.0;
        }

        if start.year() == end.year() {
            return start.days_between(&end) as f64 / f64::from(year_basis(start.year()));
        }

        // Days from start up to 1 January of the next year
        let first_basis = year_basis(start.year());
        let first = f64::from(first_basis - start.day_of_year() + 1) / f64::from(first_basis);

        let whole_years = f64::from(end.year() - start.year() - 1);

        // Days from 1 January of the end year up to end
        let last = f64::from(end.day_of_year() - 1) / f64::from(year_basis(end.year()));

        first + whole_years + last
    }
}

/// Actual/Actual measured against the payment year.
///
/// The actual days of the period are divided by the base (365 or 366) of the
/// calendar year containing the period's end date, regardless of which
/// years the period actually spans.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Days}(start, end)}{\text{Basis}(\text{year}(end))}$$
#[derive(Debug, Clone, Copy, Default)]
pub struct ActActPaymentYear;

impl ActActPaymentYear {
    /// Returns the base used for a period ending on `end`.
    #[must_use]
    pub fn basis(&self, end: Date) -> u32 {
        year_basis(end.year())
    }
}

impl DayCount for ActActPaymentYear {
    fn name(&self) -> &'static str {
        "ACT/ACT PAYMENT YEAR"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        self.day_count(start, end) as f64 / f64::from(self.basis(end))
    }
}
