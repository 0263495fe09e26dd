//! Bond pricing: discounting, valuation summaries and yield solving.

mod discount;
mod yield_solver;

use serde::Serialize;

use bondval_core::types::Date;

pub use discount::{discount_factor, validate_yield, DiscountEngine};
pub use yield_solver::{
    YieldResult, YieldSolver, DEFAULT_INITIAL_GUESS, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};

/// Price and risk summary of a bond at one yield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Valuation {
    /// Settlement date.
    pub settlement: Date,
    /// Maturity date.
    pub maturity: Date,
    /// Yield the bond was valued at.
    pub yield_value: f64,
    /// Present value of all remaining cash flows.
    pub dirty_price: f64,
    /// Interest earned since the previous coupon.
    pub accrued_interest: f64,
    /// Dirty price less accrued interest.
    pub clean_price: f64,
    /// PV-weighted average time to payment, in years.
    pub macaulay_duration: f64,
    /// Macaulay duration over `1 + yield`.
    pub modified_duration: f64,
    /// Last coupon date on or before settlement.
    pub previous_coupon: Date,
    /// First coupon date after settlement.
    pub next_coupon: Date,
}
