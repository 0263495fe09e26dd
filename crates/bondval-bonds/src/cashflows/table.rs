//! Discounted cash flow tables.

use serde::Serialize;

use bondval_core::types::Date;

/// One payment of a bond with its discounting inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CashFlowRow {
    /// Payment date.
    pub date: Date,
    /// Days since the previous payment (or settlement for the first row).
    pub days: i64,
    /// Day-count base of the payment year.
    pub basis: u32,
    /// Cumulative year fraction from settlement.
    pub cumulative_years: f64,
    /// `(1 + y)^(-cumulative_years)`.
    pub discount_factor: f64,
    /// Coupon, plus redemption on the final row.
    pub cash_flow: f64,
    /// `cash_flow × discount_factor`.
    pub discounted_cash_flow: f64,
}

/// Date-ordered discounted cash flows priced at a single yield.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowTable {
    yield_value: f64,
    rows: Vec<CashFlowRow>,
}

impl CashFlowTable {
    /// Creates a table from rows already priced at `yield_value`.
    #[must_use]
    pub fn new(yield_value: f64, rows: Vec<CashFlowRow>) -> Self {
        Self { yield_value, rows }
    }

    /// Returns the yield the table was priced at.
    #[must_use]
    pub fn yield_value(&self) -> f64 {
        self.yield_value
    }

    /// Returns the rows.
    #[must_use]
    pub fn rows(&self) -> &[CashFlowRow] {
        &self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the rows in date order.
    pub fn iter(&self) -> std::slice::Iter<'_, CashFlowRow> {
        self.rows.iter()
    }

    /// Sum of the discounted cash flows.
    #[must_use]
    pub fn dirty_price(&self) -> f64 {
        self.rows.iter().map(|r| r.discounted_cash_flow).sum()
    }

    /// The discounted cash flows in date order.
    #[must_use]
    pub fn discounted_cash_flows(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.discounted_cash_flow).collect()
    }

    /// The payment dates in date order.
    #[must_use]
    pub fn dates(&self) -> Vec<Date> {
        self.rows.iter().map(|r| r.date).collect()
    }
}

impl<'a> IntoIterator for &'a CashFlowTable {
    type Item = &'a CashFlowRow;
    type IntoIter = std::slice::Iter<'a, CashFlowRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
