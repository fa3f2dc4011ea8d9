//! Unit tests for the revenue growth projector
//!
//! Exercises the growth-rate derivation (zero-revenue months excluded,
//! 5% fallback), the compounding forecast and the deterministic handling
//! of missing actuals.

use adconsole::modules::reports::models::MonthlyRevenue;
use adconsole::modules::reports::services::growth_projector::{GrowthProjector, PROJECTION_MONTHS};
use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn month(year: i32, month: u32, revenue: Decimal) -> MonthlyRevenue {
    MonthlyRevenue {
        year,
        month,
        revenue,
    }
}

fn instant(y: i32, mo: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, 12, 0, 0).unwrap()
}

#[test]
fn test_flat_history_projects_flat_revenue() {
    let history: Vec<MonthlyRevenue> =
        (1..=6).map(|m| month(2026, m, dec!(1000))).collect();
    let anchor = instant(2026, 6, 30);

    let points = GrowthProjector::project(&history, anchor, anchor);

    assert_eq!(points.len(), PROJECTION_MONTHS);
    for point in &points {
        assert_eq!(point.projected_revenue, dec!(1000));
        assert_eq!(point.growth_rate, "0.00%");
    }
}

#[test]
fn test_steady_growth_compounds_forward() {
    // 1000 -> 1100 -> 1210: 10% month over month
    let history = vec![
        month(2026, 1, dec!(1000)),
        month(2026, 2, dec!(1100)),
        month(2026, 3, dec!(1210)),
    ];
    let anchor = instant(2026, 3, 31);

    let points = GrowthProjector::project(&history, anchor, anchor);

    assert_eq!(points[0].projected_revenue, dec!(1210));
    assert_eq!(points[1].projected_revenue, dec!(1331));
    assert_eq!(points[2].projected_revenue, dec!(1464)); // 1464.1 rounded
    assert_eq!(points[0].growth_rate, "10.00%");
}

#[test]
fn test_zero_revenue_months_are_excluded_from_the_average() {
    // Only the 200 -> 300 pair contributes; every pair starting at a
    // zero-revenue month is skipped.
    let history = vec![
        month(2025, 9, dec!(0)),
        month(2025, 10, dec!(0)),
        month(2025, 11, dec!(200)),
        month(2025, 12, dec!(300)),
    ];
    let anchor = instant(2025, 12, 31);

    let points = GrowthProjector::project(&history, anchor, anchor);

    assert_eq!(points[0].growth_rate, "50.00%");
    assert_eq!(points[0].projected_revenue, dec!(300));
    assert_eq!(points[1].projected_revenue, dec!(450));
}

#[test]
fn test_fallback_rate_applies_with_no_usable_history() {
    // A single month yields no adjacent pairs, so the 5% default applies
    let history = vec![month(2026, 5, dec!(800))];
    let anchor = instant(2026, 5, 31);

    let points = GrowthProjector::project(&history, anchor, anchor);

    assert_eq!(points[0].growth_rate, "5.00%");
    assert_eq!(points[0].projected_revenue, dec!(800));
    assert_eq!(points[1].projected_revenue, dec!(840));
}

#[test]
fn test_fallback_rate_applies_when_all_predecessors_are_zero() {
    let history = vec![
        month(2026, 1, dec!(0)),
        month(2026, 2, dec!(0)),
        month(2026, 3, dec!(750)),
    ];
    let anchor = instant(2026, 3, 31);

    let points = GrowthProjector::project(&history, anchor, anchor);

    assert_eq!(points[0].growth_rate, "5.00%");
}

#[test]
fn test_empty_history_still_yields_twelve_rows() {
    let anchor = instant(2026, 8, 4);

    let points = GrowthProjector::project(&[], anchor, anchor);

    assert_eq!(points.len(), PROJECTION_MONTHS);
    for point in &points {
        assert_eq!(point.projected_revenue, Decimal::ZERO);
        assert!(point.actual_revenue.is_none());
        assert_eq!(point.growth_rate, "5.00%");
    }
}

#[test]
fn test_labels_walk_consecutive_months_from_the_anchor() {
    let anchor = instant(2026, 11, 30);

    let points = GrowthProjector::project(&[], anchor, anchor);

    assert_eq!(points[0].month, "Nov 2026");
    assert_eq!(points[1].month, "Dec 2026");
    assert_eq!(points[2].month, "Jan 2027");
    assert_eq!(points[11].month, "Oct 2027");
}

#[test]
fn test_actuals_attach_only_to_known_past_months() {
    // Anchor is January, "now" is mid-April: Jan-Mar are in the past
    let history = vec![
        month(2026, 1, dec!(500)),
        month(2026, 3, dec!(650)),
    ];
    let anchor = instant(2026, 1, 31);
    let now = instant(2026, 4, 15);

    let points = GrowthProjector::project(&history, anchor, now);

    assert_eq!(points[0].actual_revenue, Some(dec!(500))); // Jan, recorded
    assert_eq!(points[1].actual_revenue, None); // Feb, no ledger activity
    assert_eq!(points[2].actual_revenue, Some(dec!(650))); // Mar, recorded
    for point in &points[3..] {
        // Apr onward is the current month or the future
        assert!(point.actual_revenue.is_none());
    }
}

proptest! {
    /// The forecast always spans exactly 12 months and carries one
    /// uniform growth rate, however ragged the history is.
    #[test]
    fn prop_projection_shape_is_stable(
        revenues in prop::collection::vec(0u64..1_000_000u64, 0..24),
        anchor_month in 1u32..=12u32,
    ) {
        let history: Vec<MonthlyRevenue> = revenues
            .iter()
            .enumerate()
            .map(|(i, r)| month(2024 + (i as i32 / 12), (i as u32 % 12) + 1, Decimal::from(*r)))
            .collect();
        let anchor = Utc.with_ymd_and_hms(2026, anchor_month, 1, 0, 0, 0).unwrap();

        let points = GrowthProjector::project(&history, anchor, anchor);

        prop_assert_eq!(points.len(), PROJECTION_MONTHS);
        let rate = &points[0].growth_rate;
        for point in &points {
            prop_assert_eq!(&point.growth_rate, rate);
            prop_assert!(point.growth_rate.ends_with('%'));
            // Anchored at "now": nothing in the series is a past month
            prop_assert!(point.actual_revenue.is_none());
        }
    }
}
