//! Integration tests against a hand-checked reference bond.
//!
//! Settlement 05-09-2024, maturity 18-09-2030, yield 9.596%, coupon 7.75,
//! par 100. Expected values were computed independently.

use approx::assert_relative_eq;

use bondval_bonds::prelude::*;

const TOLERANCE: f64 = 1e-4;

fn reference_bond() -> FixedBond {
    FixedBond::from_strings("05-09-2024", "18-09-2030", 0.09596, 7.75, 100.0).unwrap()
}

fn d(y: i32, m: u32, day: u32) -> Date {
    Date::from_ymd(y, m, day).unwrap()
}

// =============================================================================
// SCHEDULE
// =============================================================================

#[test]
fn schedule_runs_from_stub_to_maturity() {
    let schedule = reference_bond().schedule().unwrap();

    let expected: Vec<Date> = (2024..=2030).map(|y| d(y, 9, 18)).collect();
    assert_eq!(schedule.dates(), expected.as_slice());
    assert_eq!(schedule.last_payment(), d(2030, 9, 18));
}

#[test]
fn cash_flow_table_rows() {
    let table = reference_bond().cash_flow_table().unwrap();

    assert_eq!(table.len(), 7);
    assert_eq!(table.rows()[0].days, 13);
    assert_eq!(table.rows()[0].basis, 366);
    assert_relative_eq!(table.rows()[0].cumulative_years, 13.0 / 366.0, epsilon = 1e-12);

    for row in &table.rows()[..6] {
        assert_eq!(row.cash_flow, 7.75);
    }
    assert_eq!(table.rows()[6].cash_flow, 107.75);
    assert_eq!(table.rows()[6].date, d(2030, 9, 18));

    for pair in table.rows().windows(2) {
        assert!(pair[0].date < pair[1].date);
        assert!(pair[0].cumulative_years < pair[1].cumulative_years);
        assert!(pair[0].discount_factor > pair[1].discount_factor);
    }
}

// =============================================================================
// PRICING
// =============================================================================

#[test]
fn reference_prices() {
    let bond = reference_bond();

    assert_relative_eq!(bond.dirty_price().unwrap(), 99.29042117665622, epsilon = TOLERANCE);
    assert_relative_eq!(
        bond.accrued_interest().unwrap().amount,
        7.4747267759562845,
        epsilon = TOLERANCE
    );
    assert_relative_eq!(bond.clean_price().unwrap(), 91.81569440069994, epsilon = TOLERANCE);
}

#[test]
fn dirty_price_at_other_yields() {
    let bond = reference_bond();

    assert_relative_eq!(bond.dirty_price_at(0.01).unwrap(), 146.8175677326196, epsilon = TOLERANCE);
    assert_relative_eq!(bond.dirty_price_at(0.05).unwrap(), 121.49741755957571, epsilon = TOLERANCE);
    assert_relative_eq!(bond.dirty_price_at(0.2).unwrap(), 66.57993679619695, epsilon = TOLERANCE);
}

#[test]
fn price_decomposition() {
    let bond = reference_bond();
    for y in [0.0, 0.03, 0.09596, 0.15] {
        let dirty = bond.dirty_price_at(y).unwrap();
        let clean = bond.clean_price_at(y).unwrap();
        let accrued = bond.accrued_interest().unwrap().amount;
        assert_relative_eq!(dirty - accrued, clean, epsilon = 1e-12);
    }
}

#[test]
fn discounted_cash_flows_sum_to_dirty() {
    let bond = reference_bond();
    let total: f64 = bond.discounted_cash_flows().unwrap().iter().sum();
    assert_relative_eq!(total, bond.dirty_price().unwrap(), epsilon = 1e-12);
}

// =============================================================================
// DURATION
// =============================================================================

#[test]
fn reference_durations() {
    let bond = reference_bond();
    let duration = bond.duration().unwrap();

    assert_relative_eq!(duration.macaulay, 4.619642274135223, epsilon = TOLERANCE);
    assert_relative_eq!(duration.modified, 4.215155912747931, epsilon = TOLERANCE);
}

#[test]
fn modified_is_macaulay_over_one_plus_yield() {
    let bond = reference_bond();
    for y in [0.01, 0.05, 0.09596, 0.2] {
        let duration = bond.duration_at(y).unwrap();
        assert_relative_eq!(duration.modified, duration.macaulay / (1.0 + y), epsilon = 1e-12);
    }
}

// =============================================================================
// YIELD
// =============================================================================

#[test]
fn yield_recovered_from_reference_clean_price() {
    let bond = reference_bond();
    let ytm = bond.yield_from_clean_price(91.81569440069994).unwrap();
    assert_relative_eq!(ytm, 0.09596, epsilon = TOLERANCE);
}

#[test]
fn out_of_domain_yield_is_rejected() {
    let bond = reference_bond();
    assert!(matches!(
        bond.dirty_price_at(-1.0),
        Err(BondError::YieldOutOfDomain { .. })
    ));
    assert!(matches!(
        bond.duration_at(-1.5),
        Err(BondError::YieldOutOfDomain { .. })
    ));
}

// =============================================================================
// BOUNDARIES
// =============================================================================

#[test]
fn settlement_on_anniversary() {
    let bond = FixedBond::from_strings("18-09-2025", "18-09-2030", 0.05, 7.75, 100.0).unwrap();

    let previous = bond.previous_coupon_date().unwrap();
    let next = bond.next_coupon_date().unwrap();
    assert_eq!(previous, d(2025, 9, 18));
    assert_eq!(next, d(2026, 9, 18));
    assert_ne!(previous, next);

    assert_eq!(bond.accrued_interest().unwrap().amount, 0.0);
    assert_relative_eq!(
        bond.clean_price().unwrap(),
        bond.dirty_price().unwrap(),
        epsilon = 1e-12
    );
}

#[test]
fn single_payment_bond() {
    let bond = FixedBond::from_strings("01-02-2030", "18-09-2030", 0.05, 7.75, 100.0).unwrap();
    let table = bond.cash_flow_table().unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.rows()[0].cash_flow, 107.75);
}

#[test]
fn settlement_after_maturity_is_rejected() {
    let result = FixedBond::from_strings("19-09-2030", "18-09-2030", 0.05, 7.75, 100.0);
    assert!(matches!(
        result,
        Err(BondError::SettlementNotBeforeMaturity { .. })
    ));
}

#[test]
fn valuation_serializes() {
    let valuation = reference_bond().valuation().unwrap();
    let json = serde_json::to_value(valuation).unwrap();

    assert_eq!(json["next_coupon"], "2024-09-18");
    assert_eq!(json["previous_coupon"], "2023-09-18");
    assert!(json["dirty_price"].as_f64().unwrap() > 99.0);
}
