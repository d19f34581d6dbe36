//! Unit tests for the delta engine.

use super::*;
use crate::names::NameResolver;
use crate::snapshots::{FundSeries, HoldingPosition, Snapshot};
use chrono::NaiveDate;
use std::collections::HashMap;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn snapshot(day: &str, positions: &[(&str, i64, f64)]) -> Snapshot {
    let mut holdings = HashMap::new();
    for (code, count, weight) in positions {
        holdings.insert(
            (*code).to_string(),
            HoldingPosition {
                count: *count,
                weight: *weight,
                name: None,
            },
        );
    }
    Snapshot {
        date: date(day),
        holdings,
        price_info: None,
    }
}

fn series(snapshots: Vec<Snapshot>) -> FundSeries {
    FundSeries::new("00980A", "Fund A", snapshots)
}

fn resolver() -> NameResolver {
    NameResolver::new(HashMap::new())
}

#[test]
fn classify_event_priority_order() {
    assert_eq!(classify_event(0, 1000), HoldingEvent::New);
    assert_eq!(classify_event(1000, 0), HoldingEvent::Closed);
    assert_eq!(classify_event(1000, 2000), HoldingEvent::Increased);
    assert_eq!(classify_event(2000, 1000), HoldingEvent::Reduced);
    assert_eq!(classify_event(1000, 1000), HoldingEvent::Unchanged);
    assert_eq!(classify_event(0, 0), HoldingEvent::Unchanged);
}

#[test]
fn delta_over_two_day_position_increase() {
    // day1 A=500 shares @0.1%, day2 A=2000 shares @0.4%
    let s = series(vec![
        snapshot("2025-11-05", &[("A", 500, 0.1)]),
        snapshot("2025-11-06", &[("A", 2000, 0.4)]),
    ]);
    let delta = build_daily_delta(&s, &resolver()).unwrap();
    assert_eq!(delta.records.len(), 1);

    let rec = &delta.records[0];
    assert_eq!(rec.event, HoldingEvent::Increased);
    // 1500 raw shares = 1 board lot, truncated
    assert_eq!(rec.count_change, 1);
    assert!((rec.weight_change - 0.3).abs() < 1e-9);
    assert_eq!(rec.prev_count, 0); // 500 shares rounds down to 0 lots
    assert_eq!(rec.current_count, 2);

    assert_eq!(delta.summary.increased_count, 1);
    assert_eq!(delta.summary.net_count_change, 1);
    assert_eq!(delta.summary.date, date("2025-11-06"));
    assert_eq!(delta.summary.prev_date, date("2025-11-05"));
}

#[test]
fn event_partition_is_exhaustive_over_the_code_union() {
    let s = series(vec![
        snapshot(
            "2025-11-05",
            &[
                ("GONE", 3000, 0.5),
                ("DOWN", 4000, 0.6),
                ("FLAT", 2000, 0.3),
                ("UP", 1000, 0.2),
            ],
        ),
        snapshot(
            "2025-11-06",
            &[
                ("DOWN", 2000, 0.3),
                ("FLAT", 2000, 0.3),
                ("UP", 5000, 0.9),
                ("FRESH", 1500, 0.25),
            ],
        ),
    ]);
    let delta = build_daily_delta(&s, &resolver()).unwrap();

    // The union has 5 codes and every record carries exactly one event.
    assert_eq!(delta.records.len(), 5);
    let unchanged = delta
        .records
        .iter()
        .filter(|d| d.event == HoldingEvent::Unchanged)
        .count();
    let counted = delta.summary.new_count
        + delta.summary.closed_count
        + delta.summary.increased_count
        + delta.summary.reduced_count;
    assert_eq!(counted + unchanged, delta.records.len());

    assert_eq!(delta.summary.new_count, 1);
    assert_eq!(delta.summary.closed_count, 1);
    assert_eq!(delta.summary.increased_count, 1);
    assert_eq!(delta.summary.reduced_count, 1);
}

#[test]
fn no_change_pair_produces_zero_summary() {
    let positions = [("A", 5000, 1.0), ("B", 3000, 0.5)];
    let s = series(vec![
        snapshot("2025-11-05", &positions),
        snapshot("2025-11-06", &positions),
    ]);
    let delta = build_daily_delta(&s, &resolver()).unwrap();

    assert_eq!(delta.summary.new_count, 0);
    assert_eq!(delta.summary.closed_count, 0);
    assert_eq!(delta.summary.increased_count, 0);
    assert_eq!(delta.summary.reduced_count, 0);
    assert_eq!(delta.summary.net_count_change, 0);
    assert_eq!(delta.summary.net_weight_change, 0.0);
    assert!(delta
        .records
        .iter()
        .all(|d| d.event == HoldingEvent::Unchanged));
}

#[test]
fn single_snapshot_is_insufficient_history() {
    let s = series(vec![snapshot("2025-11-05", &[("A", 1000, 0.1)])]);
    assert!(matches!(
        build_daily_delta(&s, &resolver()),
        Err(crate::Error::InsufficientHistory { available: 1, .. })
    ));
}

#[test]
fn negative_count_change_truncates_toward_zero() {
    let s = series(vec![
        snapshot("2025-11-05", &[("A", 2000, 0.4)]),
        snapshot("2025-11-06", &[("A", 500, 0.1)]),
    ]);
    let delta = build_daily_delta(&s, &resolver()).unwrap();
    // -1500 raw shares is -1 lot, not -2
    assert_eq!(delta.records[0].count_change, -1);
    assert_eq!(delta.summary.net_count_change, -1);
}

#[test]
fn net_weight_change_sums_rounded_terms() {
    let s = series(vec![
        snapshot("2025-11-05", &[("A", 1000, 0.1000004), ("B", 1000, 0.2)]),
        snapshot("2025-11-06", &[("A", 1000, 0.2000008), ("B", 1000, 0.3)]),
    ]);
    let delta = build_daily_delta(&s, &resolver()).unwrap();
    // Each term is rounded to 6 dp before accumulation.
    let expected: f64 = delta.records.iter().map(|d| d.weight_change).sum();
    assert_eq!(delta.summary.net_weight_change, expected);
}

#[test]
fn name_falls_back_from_current_to_previous_snapshot() {
    let mut prev = snapshot("2025-11-05", &[("A", 1000, 0.1)]);
    prev.holdings.get_mut("A").unwrap().name = Some("舊名稱".to_string());
    let latest = snapshot("2025-11-06", &[("A", 2000, 0.2)]);
    let s = series(vec![prev, latest]);

    let delta = build_daily_delta(&s, &resolver()).unwrap();
    assert_eq!(delta.records[0].name, "舊名稱");
}
