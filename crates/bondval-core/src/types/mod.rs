//! Domain types for bond valuation.
//!
//! - [`Date`]: Calendar date for financial calculations
//! - [`LeapDayPolicy`], [`AccruedBasis`], [`TimeBasis`]: the policies that
//!   pin down Actual/Actual details the market leaves open
//! - [`BondConventions`]: the bundle of those policies carried by a bond

mod conventions;
mod date;

pub use conventions::{AccruedBasis, BondConventions, LeapDayPolicy, TimeBasis};
pub use date::Date;
