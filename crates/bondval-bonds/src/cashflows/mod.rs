//! Cash flow generation for annual fixed-coupon bonds.
//!
//! - [`Schedule`]: the coupon dates remaining after settlement
//! - [`accumulate_year_fractions`]: Actual/Actual measurement of each period
//! - [`CashFlowTable`]: dated, discounted cash flows
//! - [`AccruedInterestCalculator`]: interest earned since the last coupon

mod accrued;
mod schedule;
mod table;
mod year_fraction;

pub use accrued::{AccruedInterest, AccruedInterestCalculator};
pub use schedule::{anniversary, Schedule, ScheduleConfig};
pub use table::{CashFlowRow, CashFlowTable};
pub use year_fraction::{accumulate_year_fractions, AccrualPeriod};
