//! Annual fixed-coupon bond.
//!
//! A [`FixedBond`] holds the five parameters that define a valuation
//! (settlement, maturity, yield, coupon amount and par) together with the
//! Actual/Actual conventions to apply. Every operation derives its result
//! from those values; nothing is cached and nothing is mutated, so the
//! `_at` variants simply price the same bond at another yield.
//!
//! # Example
//!
//! ```rust
//! use bondval_bonds::instruments::FixedBond;
//!
//! let bond = FixedBond::from_strings("05-09-2024", "18-09-2030", 0.09596, 7.75, 100.0).unwrap();
//!
//! let dirty = bond.dirty_price().unwrap();
//! let accrued = bond.accrued_interest().unwrap().amount;
//! let clean = bond.clean_price().unwrap();
//! assert!((dirty - accrued - clean).abs() < 1e-12);
//! ```

use serde::Serialize;

use bondval_core::types::{BondConventions, Date};

use crate::cashflows::{
    accumulate_year_fractions, AccrualPeriod, AccruedInterest, AccruedInterestCalculator,
    CashFlowTable, Schedule, ScheduleConfig,
};
use crate::error::{BondError, BondResult};
use crate::pricing::{validate_yield, DiscountEngine, Valuation, YieldResult, YieldSolver};
use crate::risk::{macaulay_duration, modified_duration, payment_times, DurationResult};

/// An annual fixed-coupon bond valued at a flat yield.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixedBond {
    settlement: Date,
    maturity: Date,
    yield_value: f64,
    coupon: f64,
    par: f64,
    conventions: BondConventions,
}

impl FixedBond {
    /// Creates a bond with the default conventions.
    ///
    /// # Arguments
    ///
    /// * `settlement` - Valuation date; must be before maturity
    /// * `maturity` - Final coupon and redemption date
    /// * `yield_value` - Annual yield as a decimal; `1 + yield` must be positive
    /// * `coupon` - Coupon amount paid each year, in currency units
    /// * `par` - Redemption amount paid at maturity
    ///
    /// # Errors
    ///
    /// - `BondError::SettlementNotBeforeMaturity` if settlement >= maturity
    /// - `BondError::YieldOutOfDomain` for a non-finite yield or `1 + yield <= 0`
    /// - `BondError::InvalidSpec` for a negative or non-finite coupon, or a
    ///   non-positive or non-finite par
    pub fn new(
        settlement: Date,
        maturity: Date,
        yield_value: f64,
        coupon: f64,
        par: f64,
    ) -> BondResult<Self> {
        if settlement >= maturity {
            return Err(BondError::SettlementNotBeforeMaturity {
                settlement,
                maturity,
            });
        }
        validate_yield(yield_value)?;
        if !(coupon.is_finite() && coupon >= 0.0) {
            return Err(BondError::invalid_spec(format!(
                "coupon must be a non-negative amount, got {coupon}"
            )));
        }
        if !(par.is_finite() && par > 0.0) {
            return Err(BondError::invalid_spec(format!(
                "par must be positive, got {par}"
            )));
        }

        Ok(Self {
            settlement,
            maturity,
            yield_value,
            coupon,
            par,
            conventions: BondConventions::default(),
        })
    }

    /// Creates a bond from `DD-MM-YYYY` date strings.
    ///
    /// # Errors
    ///
    /// Returns `BondError::CoreError` if either date is malformed or not a
    /// real calendar date, plus everything [`FixedBond::new`] rejects.
    pub fn from_strings(
        settlement: &str,
        maturity: &str,
        yield_value: f64,
        coupon: f64,
        par: f64,
    ) -> BondResult<Self> {
        let settlement = Date::parse_dmy(settlement)?;
        let maturity = Date::parse_dmy(maturity)?;
        Self::new(settlement, maturity, yield_value, coupon, par)
    }

    /// Replaces the convention policies.
    #[must_use]
    pub fn with_conventions(mut self, conventions: BondConventions) -> Self {
        self.conventions = conventions;
        self
    }

    /// Returns a copy of the bond at another yield.
    ///
    /// # Errors
    ///
    /// Returns `BondError::YieldOutOfDomain` if `1 + yield_value <= 0`.
    pub fn with_yield(&self, yield_value: f64) -> BondResult<Self> {
        validate_yield(yield_value)?;
        Ok(Self {
            yield_value,
            ..self.clone()
        })
    }

    /// Returns the settlement date.
    pub fn settlement(&self) -> Date {
        self.settlement
    }

    /// Returns the maturity date.
    pub fn maturity(&self) -> Date {
        self.maturity
    }

    /// Returns the stored yield.
    pub fn yield_value(&self) -> f64 {
        self.yield_value
    }

    /// Returns the annual coupon amount.
    pub fn coupon(&self) -> f64 {
        self.coupon
    }

    /// Returns the par (redemption) amount.
    pub fn par(&self) -> f64 {
        self.par
    }

    /// Returns the convention policies.
    pub fn conventions(&self) -> &BondConventions {
        &self.conventions
    }

    // ==================== Schedule ====================

    fn schedule_config(&self) -> ScheduleConfig {
        ScheduleConfig::new(self.settlement, self.maturity)
            .with_leap_day_policy(self.conventions.leap_day_policy)
    }

    /// Generates the coupon dates remaining after settlement.
    pub fn schedule(&self) -> BondResult<Schedule> {
        Schedule::generate(self.schedule_config())
    }

    /// Measures each coupon period with Actual/Actual year fractions.
    pub fn accrual_periods(&self) -> BondResult<Vec<AccrualPeriod>> {
        Ok(accumulate_year_fractions(&self.schedule()?))
    }

    /// Returns the last coupon date on or before settlement.
    pub fn previous_coupon_date(&self) -> BondResult<Date> {
        self.schedule()?.previous_coupon_date()
    }

    /// Returns the first coupon date after settlement.
    pub fn next_coupon_date(&self) -> BondResult<Date> {
        Ok(self.schedule()?.next_coupon_date())
    }

    // ==================== Pricing ====================

    fn engine(&self) -> DiscountEngine {
        DiscountEngine::new(self.coupon, self.par)
    }

    /// Discounted cash flow table at the stored yield.
    pub fn cash_flow_table(&self) -> BondResult<CashFlowTable> {
        self.cash_flow_table_at(self.yield_value)
    }

    /// Discounted cash flow table at `yield_value`.
    pub fn cash_flow_table_at(&self, yield_value: f64) -> BondResult<CashFlowTable> {
        self.engine().table(&self.accrual_periods()?, yield_value)
    }

    /// Dirty price at the stored yield.
    pub fn dirty_price(&self) -> BondResult<f64> {
        self.dirty_price_at(self.yield_value)
    }

    /// Dirty price at `yield_value`.
    pub fn dirty_price_at(&self, yield_value: f64) -> BondResult<f64> {
        self.engine().dirty_price(&self.accrual_periods()?, yield_value)
    }

    /// Present value of each cash flow at the stored yield.
    pub fn discounted_cash_flows(&self) -> BondResult<Vec<f64>> {
        self.discounted_cash_flows_at(self.yield_value)
    }

    /// Present value of each cash flow at `yield_value`.
    pub fn discounted_cash_flows_at(&self, yield_value: f64) -> BondResult<Vec<f64>> {
        Ok(self.cash_flow_table_at(yield_value)?.discounted_cash_flows())
    }

    /// Interest accrued from the previous coupon date to settlement.
    ///
    /// Independent of the yield.
    pub fn accrued_interest(&self) -> BondResult<AccruedInterest> {
        let schedule = self.schedule()?;
        Ok(AccruedInterestCalculator::calculate(
            self.conventions.accrued_basis,
            self.settlement,
            schedule.previous_coupon_date()?,
            schedule.next_coupon_date(),
            self.coupon,
        ))
    }

    /// Clean price at the stored yield.
    pub fn clean_price(&self) -> BondResult<f64> {
        self.clean_price_at(self.yield_value)
    }

    /// Clean price at `yield_value`.
    pub fn clean_price_at(&self, yield_value: f64) -> BondResult<f64> {
        Ok(self.dirty_price_at(yield_value)? - self.accrued_interest()?.amount)
    }

    // ==================== Risk ====================

    /// Years from settlement to each payment under the configured time basis.
    pub fn payment_times(&self) -> BondResult<Vec<f64>> {
        Ok(payment_times(
            self.settlement,
            &self.accrual_periods()?,
            self.conventions.time_basis,
        ))
    }

    /// Macaulay duration at the stored yield.
    pub fn macaulay_duration(&self) -> BondResult<f64> {
        self.macaulay_duration_at(self.yield_value)
    }

    /// Macaulay duration at `yield_value`.
    pub fn macaulay_duration_at(&self, yield_value: f64) -> BondResult<f64> {
        Ok(self.duration_at(yield_value)?.macaulay)
    }

    /// Modified duration at the stored yield.
    pub fn modified_duration(&self) -> BondResult<f64> {
        self.modified_duration_at(self.yield_value)
    }

    /// Modified duration at `yield_value`.
    pub fn modified_duration_at(&self, yield_value: f64) -> BondResult<f64> {
        Ok(self.duration_at(yield_value)?.modified)
    }

    /// Macaulay and modified duration at the stored yield.
    pub fn duration(&self) -> BondResult<DurationResult> {
        self.duration_at(self.yield_value)
    }

    /// Macaulay and modified duration at `yield_value`.
    pub fn duration_at(&self, yield_value: f64) -> BondResult<DurationResult> {
        let periods = self.accrual_periods()?;
        let table = self.engine().table(&periods, yield_value)?;
        self.duration_from(&periods, &table, yield_value)
    }

    fn duration_from(
        &self,
        periods: &[AccrualPeriod],
        table: &CashFlowTable,
        yield_value: f64,
    ) -> BondResult<DurationResult> {
        let times = payment_times(self.settlement, periods, self.conventions.time_basis);
        let macaulay =
            macaulay_duration(&times, &table.discounted_cash_flows(), table.dirty_price())?;
        Ok(DurationResult {
            macaulay,
            modified: modified_duration(macaulay, yield_value)?,
        })
    }

    // ==================== Yield ====================

    /// Solves for the yield matching `target_clean` with `solver`.
    ///
    /// The stored yield is left unchanged.
    pub fn solve_yield(&self, target_clean: f64, solver: &YieldSolver) -> BondResult<YieldResult> {
        solver.solve(self, target_clean)
    }

    /// Solves for the yield matching `target_clean` with default solver settings.
    pub fn yield_from_clean_price(&self, target_clean: f64) -> BondResult<f64> {
        Ok(self.solve_yield(target_clean, &YieldSolver::default())?.yield_value)
    }

    // ==================== Summary ====================

    /// Full valuation summary at the stored yield.
    pub fn valuation(&self) -> BondResult<Valuation> {
        self.valuation_at(self.yield_value)
    }

    /// Full valuation summary at `yield_value`.
    pub fn valuation_at(&self, yield_value: f64) -> BondResult<Valuation> {
        let schedule = self.schedule()?;
        let periods = accumulate_year_fractions(&schedule);
        let table = self.engine().table(&periods, yield_value)?;
        let duration = self.duration_from(&periods, &table, yield_value)?;

        let previous_coupon = schedule.previous_coupon_date()?;
        let next_coupon = schedule.next_coupon_date();
        let accrued = AccruedInterestCalculator::calculate(
            self.conventions.accrued_basis,
            self.settlement,
            previous_coupon,
            next_coupon,
            self.coupon,
        );

        let dirty_price = table.dirty_price();
        Ok(Valuation {
            settlement: self.settlement,
            maturity: self.maturity,
            yield_value,
            dirty_price,
            accrued_interest: accrued.amount,
            clean_price: dirty_price - accrued.amount,
            macaulay_duration: duration.macaulay,
            modified_duration: duration.modified,
            previous_coupon,
            next_coupon,
        })
    }
}
