// ABOUTME: Tests for two-period aggregation and delta computation
// ABOUTME: Signed deltas, overlap rejection, gap-inclusive averages, wire names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Contributors
//! Period comparison tests

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use nutrikit_core::models::{DailyDataPoint, TimeSeries};
use nutrikit_core::ErrorCode;
use nutrikit_intelligence::period_comparison::{compare_periods, summarize_period};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn point(date: NaiveDate, calories: f64, protein: f64) -> DailyDataPoint {
    DailyDataPoint {
        date,
        calories,
        protein_g: protein,
        carbs_g: 0.0,
        fat_g: 0.0,
        meal_count: 3,
    }
}

/// A fully logged week at constant intake
fn constant_week(start: NaiveDate, calories: f64, protein: f64) -> TimeSeries {
    let points = (0..7)
        .map(|offset| {
            point(
                start
                    .checked_add_days(chrono::Days::new(offset))
                    .unwrap(),
                calories,
                protein,
            )
        })
        .collect();
    TimeSeries::dense(
        start,
        start.checked_add_days(chrono::Days::new(6)).unwrap(),
        points,
    )
    .unwrap()
}

// ============================================================================
// DELTAS - RAW SIGNED DIFFERENCES
// ============================================================================

#[test]
fn test_deltas_are_signed_current_minus_baseline() {
    let baseline = constant_week(day(2025, 6, 2), 1900.0, 100.0);
    let current = constant_week(day(2025, 6, 9), 2100.0, 90.0);

    let result = compare_periods("this week", &current, "last week", &baseline).unwrap();

    assert!((result.deltas.calories - 200.0).abs() < 1e-9, "delta is signed, not absolute");
    assert!((result.deltas.protein - (-10.0)).abs() < 1e-9);
    assert!(result.deltas.calorie_std_dev.abs() < 1e-9, "two constant weeks differ by 0 variability");
}

#[test]
fn test_comparison_carries_both_summaries_and_labels() {
    let baseline = constant_week(day(2025, 6, 2), 1900.0, 100.0);
    let current = constant_week(day(2025, 6, 9), 2100.0, 90.0);

    let result = compare_periods("this week", &current, "last week", &baseline).unwrap();

    assert_eq!(result.current.label, "this week");
    assert_eq!(result.baseline.label, "last week");
    assert!((result.current.avg_calories - 2100.0).abs() < 1e-9);
    assert!((result.baseline.avg_calories - 1900.0).abs() < 1e-9);
    assert_eq!(result.current.total_days, 7);
    assert_eq!(result.current.logged_days, 7);
}

// ============================================================================
// OVERLAP REJECTION
// ============================================================================

#[test]
fn test_overlapping_periods_are_rejected() {
    let period1 = constant_week(day(2025, 6, 2), 2000.0, 100.0);
    let period2 = constant_week(day(2025, 6, 5), 2000.0, 100.0);

    let err = compare_periods("a", &period1, "b", &period2).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("overlap"));
}

#[test]
fn test_adjacent_periods_are_allowed() {
    let baseline = constant_week(day(2025, 6, 2), 2000.0, 100.0);
    let current = constant_week(day(2025, 6, 9), 2000.0, 100.0);

    assert!(compare_periods("now", &current, "then", &baseline).is_ok());
}

// ============================================================================
// SUMMARY SEMANTICS - GAPS INCLUDED, VARIABILITY POPULATION FORM
// ============================================================================

#[test]
fn test_summary_includes_gap_days_in_averages() {
    // One logged day at 2100 in a 7-day window: the average reflects the
    // six zero days, it does not collapse to 2100.
    let series = TimeSeries::dense(
        day(2025, 7, 7),
        day(2025, 7, 13),
        vec![point(day(2025, 7, 10), 2100.0, 120.0)],
    )
    .unwrap();

    let summary = summarize_period("sparse week", &series);

    assert!((summary.avg_calories - 300.0).abs() < 1e-9);
    assert_eq!(summary.logged_days, 1);
    assert_eq!(summary.total_days, 7);
    assert!(summary.calorie_std_dev > 0.0, "a single spike is not zero variability");
}

#[test]
fn test_period_summary_serialized_field_names() {
    let series = constant_week(day(2025, 6, 2), 2000.0, 100.0);
    let summary = summarize_period("week", &series);

    let json = serde_json::to_value(summary).unwrap();
    let object = json.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "avgCalories",
            "avgCarbs",
            "avgFat",
            "avgProtein",
            "calorieStdDev",
            "end",
            "label",
            "loggedDays",
            "start",
            "totalDays",
        ]
    );
}
