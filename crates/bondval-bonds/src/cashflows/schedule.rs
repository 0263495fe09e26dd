//! Annual coupon schedule generation.
//!
//! Coupons fall on the anniversaries of maturity. The first coupon is the
//! first anniversary strictly after settlement; the last is maturity itself.
//!
//! # Example
//!
//! ```rust
//! use bondval_bonds::cashflows::{Schedule, ScheduleConfig};
//! use bondval_core::types::Date;
//!
//! let config = ScheduleConfig::new(
//!     Date::from_ymd(2024, 9, 5).unwrap(),
//!     Date::from_ymd(2030, 9, 18).unwrap(),
//! );
//!
//! let schedule = Schedule::generate(config).unwrap();
//! assert_eq!(schedule.first_payment(), Date::from_ymd(2024, 9, 18).unwrap());
//! assert_eq!(schedule.last_payment(), Date::from_ymd(2030, 9, 18).unwrap());
//! ```

use bondval_core::types::{Date, LeapDayPolicy};

use crate::error::{BondError, BondResult};

/// Returns the anniversary of `maturity` in `year`.
///
/// Only a 29 February maturity can lack an anniversary; `policy` decides
/// whether that is an error or rolls to 28 February.
///
/// # Errors
///
/// Returns `BondError::UndefinedLeapDayAnchor` under [`LeapDayPolicy::Reject`]
/// when `year` has no 29 February.
pub fn anniversary(maturity: Date, year: i32, policy: LeapDayPolicy) -> BondResult<Date> {
    if maturity.is_leap_day() && !bondval_core::daycounts::is_leap_year(year) {
        return match policy {
            LeapDayPolicy::Reject => Err(BondError::UndefinedLeapDayAnchor { year }),
            LeapDayPolicy::ClampToFebruary28 => Ok(Date::from_ymd(year, 2, 28)?),
        };
    }
    Ok(maturity.with_year(year)?)
}

/// Configuration for schedule generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Settlement date
    pub settlement: Date,
    /// Maturity date (final coupon and redemption)
    pub maturity: Date,
    /// 29 February anniversary handling
    pub leap_day_policy: LeapDayPolicy,
}

impl ScheduleConfig {
    /// Creates a new schedule configuration with the default leap-day policy.
    #[must_use]
    pub fn new(settlement: Date, maturity: Date) -> Self {
        Self {
            settlement,
            maturity,
            leap_day_policy: LeapDayPolicy::default(),
        }
    }

    /// Sets the leap-day policy.
    #[must_use]
    pub fn with_leap_day_policy(mut self, policy: LeapDayPolicy) -> Self {
        self.leap_day_policy = policy;
        self
    }
}

/// The annual coupon dates remaining after settlement.
///
/// Dates are strictly increasing, all strictly after settlement, and the
/// last one is maturity. There is always at least one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    config: ScheduleConfig,
    dates: Vec<Date>,
}

impl Schedule {
    /// Generates a schedule from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `BondError::SettlementNotBeforeMaturity` if settlement is not
    /// strictly before maturity, or `BondError::UndefinedLeapDayAnchor` for a
    /// 29 February maturity under [`LeapDayPolicy::Reject`].
    pub fn generate(config: ScheduleConfig) -> BondResult<Self> {
        let ScheduleConfig {
            settlement,
            maturity,
            leap_day_policy,
        } = config;

        if settlement >= maturity {
            return Err(BondError::SettlementNotBeforeMaturity {
                settlement,
                maturity,
            });
        }

        // A settlement on the anniversary itself is not a payment date
        let anchor = anniversary(maturity, settlement.year(), leap_day_policy)?;
        let first_year = if anchor > settlement {
            settlement.year()
        } else {
            settlement.year() + 1
        };

        let dates = (first_year..=maturity.year())
            .map(|year| anniversary(maturity, year, leap_day_policy))
            .collect::<BondResult<Vec<_>>>()?;

        log::trace!(
            "generated {} coupon dates from {} to {}",
            dates.len(),
            settlement,
            maturity
        );

        Ok(Self { config, dates })
    }

    /// Returns the coupon dates.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Consumes the schedule and returns its dates.
    #[must_use]
    pub fn into_dates(self) -> Vec<Date> {
        self.dates
    }

    /// Returns the number of coupon dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always false: a schedule holds at least the maturity date.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the settlement date the schedule was generated from.
    #[must_use]
    pub fn settlement(&self) -> Date {
        self.config.settlement
    }

    /// Returns the first coupon date after settlement.
    #[must_use]
    pub fn first_payment(&self) -> Date {
        self.dates[0]
    }

    /// Returns the final coupon date (maturity).
    #[must_use]
    pub fn last_payment(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }

    /// Returns the next coupon date after settlement.
    #[must_use]
    pub fn next_coupon_date(&self) -> Date {
        self.first_payment()
    }

    /// Returns the last theoretical coupon date on or before settlement.
    ///
    /// This is the anniversary in settlement's year, stepped back one year
    /// if it falls after settlement. It may precede the bond's issue.
    ///
    /// # Errors
    ///
    /// Returns `BondError::UndefinedLeapDayAnchor` if the anniversary does
    /// not exist under the configured policy.
    pub fn previous_coupon_date(&self) -> BondResult<Date> {
        let ScheduleConfig {
            settlement,
            maturity,
            leap_day_policy,
        } = self.config;

        let candidate = anniversary(maturity, settlement.year(), leap_day_policy)?;
        if candidate > settlement {
            anniversary(maturity, settlement.year() - 1, leap_day_policy)
        } else {
            Ok(candidate)
        }
    }

    /// Returns the accrual periods as `(start, end)` pairs.
    ///
    /// The first period starts at settlement; each later one starts at the
    /// previous coupon date.
    pub fn periods(&self) -> impl Iterator<Item = (Date, Date)> + '_ {
        std::iter::once(self.config.settlement)
            .chain(self.dates.iter().copied())
            .zip(self.dates.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_reference_schedule() {
        let schedule = Schedule::generate(ScheduleConfig::new(d(2024, 9, 5), d(2030, 9, 18)))
            .unwrap();

        let expected: Vec<Date> = (2024..=2030).map(|y| d(y, 9, 18)).collect();
        assert_eq!(schedule.dates(), expected.as_slice());
        assert_eq!(schedule.previous_coupon_date().unwrap(), d(2023, 9, 18));
        assert_eq!(schedule.next_coupon_date(), d(2024, 9, 18));
    }

    #[test]
    fn test_anchor_before_settlement_advances() {
        let schedule = Schedule::generate(ScheduleConfig::new(d(2024, 10, 1), d(2027, 3, 15)))
            .unwrap();

        assert_eq!(
            schedule.dates(),
            &[d(2025, 3, 15), d(2026, 3, 15), d(2027, 3, 15)]
        );
        assert_eq!(schedule.previous_coupon_date().unwrap(), d(2024, 3, 15));
    }

    #[test]
    fn test_settlement_on_anniversary_is_not_duplicated() {
        let schedule = Schedule::generate(ScheduleConfig::new(d(2025, 9, 18), d(2030, 9, 18)))
            .unwrap();

        assert_eq!(schedule.first_payment(), d(2026, 9, 18));
        assert_eq!(schedule.len(), 5);
        assert_eq!(schedule.previous_coupon_date().unwrap(), d(2025, 9, 18));
        assert_ne!(
            schedule.previous_coupon_date().unwrap(),
            schedule.next_coupon_date()
        );
    }

    #[test]
    fn test_short_bond_has_single_date() {
        let schedule = Schedule::generate(ScheduleConfig::new(d(2025, 1, 10), d(2025, 6, 30)))
            .unwrap();
        assert_eq!(schedule.dates(), &[d(2025, 6, 30)]);
        assert!(!schedule.is_empty());

        let schedule = Schedule::generate(ScheduleConfig::new(d(2025, 8, 1), d(2026, 6, 30)))
            .unwrap();
        assert_eq!(schedule.dates(), &[d(2026, 6, 30)]);
    }

    #[test]
    fn test_settlement_not_before_maturity() {
        let result = Schedule::generate(ScheduleConfig::new(d(2030, 9, 18), d(2030, 9, 18)));
        assert!(matches!(
            result,
            Err(BondError::SettlementNotBeforeMaturity { .. })
        ));

        let result = Schedule::generate(ScheduleConfig::new(d(2031, 1, 1), d(2030, 9, 18)));
        assert!(result.is_err());
    }

    #[test]
    fn test_dates_cross_leap_years_without_drift() {
        let schedule = Schedule::generate(ScheduleConfig::new(d(2023, 1, 1), d(2029, 2, 28)))
            .unwrap();
        for date in schedule.dates() {
            assert_eq!((date.month(), date.day()), (2, 28));
        }
    }

    #[test]
    fn test_leap_day_maturity_rejected_by_default() {
        let result = Schedule::generate(ScheduleConfig::new(d(2025, 3, 1), d(2028, 2, 29)));
        assert_eq!(
            result.unwrap_err(),
            BondError::UndefinedLeapDayAnchor { year: 2025 }
        );
    }

    #[test]
    fn test_leap_day_maturity_clamped() {
        let config = ScheduleConfig::new(d(2025, 3, 1), d(2032, 2, 29))
            .with_leap_day_policy(LeapDayPolicy::ClampToFebruary28);
        let schedule = Schedule::generate(config).unwrap();

        assert_eq!(
            schedule.dates(),
            &[
                d(2026, 2, 28),
                d(2027, 2, 28),
                d(2028, 2, 29),
                d(2029, 2, 28),
                d(2030, 2, 28),
                d(2031, 2, 28),
                d(2032, 2, 29),
            ]
        );
        assert_eq!(schedule.previous_coupon_date().unwrap(), d(2025, 2, 28));
    }

    #[test]
    fn test_periods() {
        let schedule = Schedule::generate(ScheduleConfig::new(d(2024, 9, 5), d(2026, 9, 18)))
            .unwrap();
        let periods: Vec<_> = schedule.periods().collect();

        assert_eq!(
            periods,
            vec![
                (d(2024, 9, 5), d(2024, 9, 18)),
                (d(2024, 9, 18), d(2025, 9, 18)),
                (d(2025, 9, 18), d(2026, 9, 18)),
            ]
        );
    }
}
