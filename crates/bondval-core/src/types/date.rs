//! Date type for financial calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::daycounts::{is_leap_year, year_basis};
use crate::error::{BondvalError, BondvalResult};

/// Format accepted by [`Date::parse_dmy`].
const DMY_FORMAT: &str = "%d-%m-%Y";

/// A calendar date for financial calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing
/// the calendar arithmetic the valuation engine needs.
///
/// # Example
///
/// ```rust
/// use bondval_core::types::Date;
///
/// let date = Date::parse_dmy("18-09-2030").unwrap();
/// assert_eq!(date.year(), 2030);
/// assert_eq!(date.month(), 9);
/// assert_eq!(date.day(), 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `BondvalError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> BondvalResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| BondvalError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from a day-month-year string (`DD-MM-YYYY`).
    ///
    /// # Errors
    ///
    /// Returns `BondvalError::DateParse` for malformed input and
    /// `BondvalError::InvalidDate` when the fields name a day that does not
    /// exist in the calendar (e.g. `30-02-2025`).
    pub fn parse_dmy(s: &str) -> BondvalResult<Self> {
        let trimmed = s.trim();
        match NaiveDate::parse_from_str(trimmed, DMY_FORMAT) {
            Ok(date) => Ok(Date(date)),
            Err(e) if e.kind() == chrono::format::ParseErrorKind::OutOfRange => Err(
                BondvalError::invalid_date(format!("{trimmed} is not a calendar date")),
            ),
            Err(_) => Err(BondvalError::date_parse(trimmed, "DD-MM-YYYY")),
        }
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `BondvalError::DateParse` if the string is not a valid date.
    pub fn parse(s: &str) -> BondvalResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| BondvalError::date_parse(s, "YYYY-MM-DD"))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of year (1-366).
    #[must_use]
    pub fn day_of_year(&self) -> u32 {
        self.0.ordinal()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    /// Returns the number of days in the date's year.
    #[must_use]
    pub fn days_in_year(&self) -> u32 {
        year_basis(self.year())
    }

    /// Returns true if this date is 29 February.
    #[must_use]
    pub fn is_leap_day(&self) -> bool {
        self.month() == 2 && self.day() == 29
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of years to the date.
    ///
    /// 29 February rolls back to 28 February when the target year is not a
    /// leap year.
    ///
    /// # Errors
    ///
    /// Returns `BondvalError::InvalidDate` if the result is out of range.
    pub fn add_years(&self, years: i32) -> BondvalResult<Self> {
        let new_year = self.year() + years;
        let new_day = self.day().min(days_in_month(new_year, self.month()));

        Self::from_ymd(new_year, self.month(), new_day)
    }

    /// Returns this month and day in `year`, failing if it does not exist
    /// there (only possible for 29 February).
    ///
    /// # Errors
    ///
    /// Returns `BondvalError::InvalidDate` if the date is invalid in `year`.
    pub fn with_year(&self, year: i32) -> BondvalResult<Self> {
        Self::from_ymd(year, self.month(), self.day())
    }

    /// Calculates the number of calendar days between two dates.
    ///
    /// Positive when `other` is after `self`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Formats the date as `DD-MM-YYYY`.
    #[must_use]
    pub fn to_dmy_string(&self) -> String {
        self.0.format(DMY_FORMAT).to_string()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}
