//! Discounting of annual cash flows at a flat yield.
//!
//! ```text
//! DF_i  = (1 + y)^(-t_i)
//! PV    = Σ CF_i × DF_i
//! ```
//!
//! where `t_i` is the cumulative Actual/Actual year fraction of payment `i`.

use crate::cashflows::{AccrualPeriod, CashFlowRow, CashFlowTable};
use crate::error::{BondError, BondResult};

/// Checks that `yield_value` is finite and `1 + yield_value > 0`.
///
/// # Errors
///
/// Returns `BondError::YieldOutOfDomain` otherwise.
pub fn validate_yield(yield_value: f64) -> BondResult<f64> {
    if yield_value.is_finite() && 1.0 + yield_value > 0.0 {
        Ok(yield_value)
    } else {
        Err(BondError::YieldOutOfDomain { value: yield_value })
    }
}

/// Annually compounded discount factor for `years` at `yield_value`.
///
/// # Errors
///
/// Returns `BondError::YieldOutOfDomain` if `1 + yield_value <= 0`.
pub fn discount_factor(yield_value: f64, years: f64) -> BondResult<f64> {
    let y = validate_yield(yield_value)?;
    Ok((1.0 + y).powf(-years))
}

/// Prices a fixed coupon stream with redemption at the final payment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountEngine {
    coupon: f64,
    redemption: f64,
}

impl DiscountEngine {
    /// Creates an engine paying `coupon` on every date and `redemption` at maturity.
    #[must_use]
    pub fn new(coupon: f64, redemption: f64) -> Self {
        Self { coupon, redemption }
    }

    /// Cash flow paid at position `index` of `count` payments.
    fn cash_flow(&self, index: usize, count: usize) -> f64 {
        if index + 1 == count {
            self.coupon + self.redemption
        } else {
            self.coupon
        }
    }

    /// Builds the full discounted cash flow table.
    ///
    /// # Errors
    ///
    /// Returns `BondError::YieldOutOfDomain` if `1 + yield_value <= 0`.
    pub fn table(&self, periods: &[AccrualPeriod], yield_value: f64) -> BondResult<CashFlowTable> {
        let y = validate_yield(yield_value)?;
        let count = periods.len();

        let rows = periods
            .iter()
            .enumerate()
            .map(|(i, period)| {
                let discount_factor = (1.0 + y).powf(-period.cumulative_years);
                let cash_flow = self.cash_flow(i, count);
                CashFlowRow {
                    date: period.end,
                    days: period.days,
                    basis: period.basis,
                    cumulative_years: period.cumulative_years,
                    discount_factor,
                    cash_flow,
                    discounted_cash_flow: cash_flow * discount_factor,
                }
            })
            .collect();

        Ok(CashFlowTable::new(y, rows))
    }

    /// Present value of the cash flows without materialising the table.
    ///
    /// # Errors
    ///
    /// Returns `BondError::YieldOutOfDomain` if `1 + yield_value <= 0`.
    pub fn dirty_price(&self, periods: &[AccrualPeriod], yield_value: f64) -> BondResult<f64> {
        let y = validate_yield(yield_value)?;
        let count = periods.len();

        Ok(periods
            .iter()
            .enumerate()
            .map(|(i, period)| self.cash_flow(i, count) * (1.0 + y).powf(-period.cumulative_years))
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cashflows::{accumulate_year_fractions, Schedule, ScheduleConfig};
    use approx::assert_relative_eq;
    use bondval_core::types::Date;

    fn reference_periods() -> Vec<AccrualPeriod> {
        let config = ScheduleConfig::new(
            Date::from_ymd(2024, 9, 5).unwrap(),
            Date::from_ymd(2030, 9, 18).unwrap(),
        );
        accumulate_year_fractions(&Schedule::generate(config).unwrap())
    }

    #[test]
    fn test_validate_yield() {
        assert!(validate_yield(0.05).is_ok());
        assert!(validate_yield(-0.5).is_ok());
        assert_eq!(
            validate_yield(-1.0),
            Err(BondError::YieldOutOfDomain { value: -1.0 })
        );
        assert!(validate_yield(-2.0).is_err());
        assert!(validate_yield(f64::NAN).is_err());
        assert!(validate_yield(f64::INFINITY).is_err());
    }

    #[test]
    fn test_discount_factor() {
        assert_relative_eq!(discount_factor(0.05, 0.0).unwrap(), 1.0);
        assert_relative_eq!(discount_factor(0.05, 1.0).unwrap(), 1.0 / 1.05, epsilon = 1e-15);
        assert_relative_eq!(discount_factor(0.0, 7.3).unwrap(), 1.0);
    }

    #[test]
    fn test_reference_table() {
        let periods = reference_periods();
        let table = DiscountEngine::new(7.75, 100.0)
            .table(&periods, 0.09596)
            .unwrap();

        assert_eq!(table.len(), 7);
        let first = &table.rows()[0];
        assert_relative_eq!(first.discount_factor, 0.9967506485580481, epsilon = 1e-12);
        assert_eq!(first.cash_flow, 7.75);

        let last = &table.rows()[6];
        assert_eq!(last.date, Date::from_ymd(2030, 9, 18).unwrap());
        assert_eq!(last.cash_flow, 107.75);
        assert_relative_eq!(last.discount_factor, 0.5751992415823, epsilon = 1e-10);

        assert_relative_eq!(table.dirty_price(), 99.29042117665622, epsilon = 1e-9);
    }

    #[test]
    fn test_fast_path_matches_table() {
        let periods = reference_periods();
        let engine = DiscountEngine::new(7.75, 100.0);

        for y in [0.01, 0.05, 0.09596, 0.2] {
            let table = engine.table(&periods, y).unwrap();
            assert_relative_eq!(
                engine.dirty_price(&periods, y).unwrap(),
                table.dirty_price(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_discount_factors_decrease_for_positive_yield() {
        let table = DiscountEngine::new(5.0, 100.0)
            .table(&reference_periods(), 0.03)
            .unwrap();

        for pair in table.rows().windows(2) {
            assert!(pair[1].discount_factor < pair[0].discount_factor);
        }
    }

    #[test]
    fn test_out_of_domain_yield() {
        let engine = DiscountEngine::new(7.75, 100.0);
        let periods = reference_periods();

        assert!(matches!(
            engine.dirty_price(&periods, -1.5),
            Err(BondError::YieldOutOfDomain { .. })
        ));
        assert!(engine.table(&periods, -1.0).is_err());
    }
}
