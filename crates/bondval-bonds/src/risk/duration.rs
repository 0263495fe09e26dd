//! Macaulay and modified duration.
//!
//! ## Formula
//!
//! ```text
//! D_mac = Σ(t_i × PV(CF_i)) / P
//! D_mod = D_mac / (1 + y)
//! ```
//!
//! where:
//! - t_i = time to cash flow i (in years, per [`TimeBasis`])
//! - PV(CF_i) = present value of cash flow i
//! - P = dirty price

use serde::Serialize;

use bondval_core::daycounts::{ActActIsda, DayCount};
use bondval_core::types::{Date, TimeBasis};

use crate::cashflows::AccrualPeriod;
use crate::error::{BondError, BondResult};
use crate::pricing::validate_yield;

/// Macaulay and modified duration at one yield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DurationResult {
    /// Macaulay duration in years.
    pub macaulay: f64,
    /// Modified duration.
    pub modified: f64,
}

/// Time from settlement to each payment, in years.
///
/// `CalendarYear` splits each interval at 1 January (Actual/Actual ISDA);
/// `PeriodAccumulated` reuses the discounting exponent of each period.
#[must_use]
pub fn payment_times(settlement: Date, periods: &[AccrualPeriod], basis: TimeBasis) -> Vec<f64> {
    match basis {
        TimeBasis::CalendarYear => {
            let dc = ActActIsda;
            periods
                .iter()
                .map(|p| dc.year_fraction(settlement, p.end))
                .collect()
        }
        TimeBasis::PeriodAccumulated => periods.iter().map(|p| p.cumulative_years).collect(),
    }
}

/// Calculate Macaulay duration from payment times and discounted cash flows.
///
/// # Arguments
///
/// * `times` - Time to each cash flow in years
/// * `discounted_cash_flows` - Present value of each cash flow
/// * `dirty_price` - Price the weights are normalised by
///
/// # Errors
///
/// Returns `BondError::InvalidSpec` if the inputs differ in length, or
/// `BondError::PricingFailed` if the price is zero.
pub fn macaulay_duration(
    times: &[f64],
    discounted_cash_flows: &[f64],
    dirty_price: f64,
) -> BondResult<f64> {
    if times.len() != discounted_cash_flows.len() {
        return Err(BondError::invalid_spec(
            "times and discounted cash flows must have same length",
        ));
    }

    if dirty_price == 0.0 || !dirty_price.is_finite() {
        return Err(BondError::pricing_failed(format!(
            "cannot weight durations by dirty price {dirty_price}"
        )));
    }

    let weighted_sum: f64 = times
        .iter()
        .zip(discounted_cash_flows)
        .map(|(t, pv)| t * pv)
        .sum();

    Ok(weighted_sum / dirty_price)
}

/// Converts Macaulay duration to modified duration for annual compounding.
///
/// # Errors
///
/// Returns `BondError::YieldOutOfDomain` if `1 + yield_value <= 0`.
pub fn modified_duration(macaulay: f64, yield_value: f64) -> BondResult<f64> {
    let y = validate_yield(yield_value)?;
    Ok(macaulay / (1.0 + y))
}
