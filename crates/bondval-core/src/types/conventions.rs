//! Convention policies for annual Actual/Actual bonds.
//!
//! Actual/Actual leaves a few details to the implementer: what to do with a
//! 29 February anniversary in a common year, which base to divide accrued
//! days by, and how to measure time for duration. Each is an explicit,
//! serializable policy so the choice is visible at the call site.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handling of a 29 February anniversary in a year without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeapDayPolicy {
    /// Fail with an undefined-anchor error.
    #[default]
    Reject,
    /// Use 28 February in common years.
    ClampToFebruary28,
}

/// Denominator used for accrued interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccruedBasis {
    /// 366 if any calendar year from the previous coupon year through the
    /// first payment year is a leap year, else 365.
    #[default]
    LeapSpan,
    /// Actual days in the current coupon period (Actual/Actual ICMA with
    /// one coupon per year).
    ActualPeriod,
}

/// Time measure used to weight cash flows in duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBasis {
    /// Calendar-year decomposition from settlement (Actual/Actual ISDA).
    #[default]
    CalendarYear,
    /// The period-by-period cumulative fraction used for discounting.
    PeriodAccumulated,
}

/// The convention policies a bond is valued under.
///
/// The default reproduces the classic behaviour: strict leap-day handling,
/// the leap-span accrued base, and calendar-year duration times.
///
/// # Example
///
/// ```rust
/// use bondval_core::types::{BondConventions, LeapDayPolicy, TimeBasis};
///
/// let conventions = BondConventions::default()
///     .with_leap_day_policy(LeapDayPolicy::ClampToFebruary28)
///     .with_time_basis(TimeBasis::PeriodAccumulated);
/// assert_eq!(conventions.leap_day_policy, LeapDayPolicy::ClampToFebruary28);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BondConventions {
    /// 29 February anniversary handling.
    pub leap_day_policy: LeapDayPolicy,
    /// Accrued interest denominator.
    pub accrued_basis: AccruedBasis,
    /// Duration time measure.
    pub time_basis: TimeBasis,
}

impl BondConventions {
    /// Sets the leap-day policy.
    #[must_use]
    pub fn with_leap_day_policy(mut self, policy: LeapDayPolicy) -> Self {
        self.leap_day_policy = policy;
        self
    }

    /// Sets the accrued interest basis.
    #[must_use]
    pub fn with_accrued_basis(mut self, basis: AccruedBasis) -> Self {
        self.accrued_basis = basis;
        self
    }

    /// Sets the duration time basis.
    #[must_use]
    pub fn with_time_basis(mut self, basis: TimeBasis) -> Self {
        self.time_basis = basis;
        self
    }
}

impl fmt::Display for LeapDayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => write!(f, "Reject"),
            Self::ClampToFebruary28 => write!(f, "Clamp to 28 Feb"),
        }
    }
}

impl fmt::Display for AccruedBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeapSpan => write!(f, "Leap span"),
            Self::ActualPeriod => write!(f, "Actual period"),
        }
    }
}

impl fmt::Display for TimeBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CalendarYear => write!(f, "Calendar year"),
            Self::PeriodAccumulated => write!(f, "Period accumulated"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let conventions = BondConventions::default();
        assert_eq!(conventions.leap_day_policy, LeapDayPolicy::Reject);
        assert_eq!(conventions.accrued_basis, AccruedBasis::LeapSpan);
        assert_eq!(conventions.time_basis, TimeBasis::CalendarYear);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&LeapDayPolicy::ClampToFebruary28).unwrap();
        assert_eq!(json, "\"clamp_to_february28\"");

        let conventions: BondConventions =
            serde_json::from_str(r#"{"accrued_basis":"actual_period"}"#).unwrap();
        assert_eq!(conventions.accrued_basis, AccruedBasis::ActualPeriod);
        assert_eq!(conventions.time_basis, TimeBasis::CalendarYear);
    }
}
