// ABOUTME: Two-period aggregation and delta computation for nutrition series
// ABOUTME: PeriodSummary per window plus raw signed differences between them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Contributors

//! Period-over-period comparison
//!
//! Summarizes two disjoint date windows (a "current" period against a
//! "baseline") and reports the raw signed differences between their averaged
//! metrics. No significance testing is performed; the deltas are presented
//! as plain differences and nothing more.

use chrono::NaiveDate;
use nutrikit_core::models::{Metric, TimeSeries};
use nutrikit_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::trend_analysis::compute_stats;

/// Aggregated summary of one date window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    /// Caller-facing label ("this week", "baseline", ...)
    pub label: String,
    /// First day of the window
    pub start: NaiveDate,
    /// Last day of the window
    pub end: NaiveDate,
    /// Mean daily calories, gap days included as zero
    pub avg_calories: f64,
    /// Mean daily protein (g)
    pub avg_protein: f64,
    /// Mean daily carbohydrates (g)
    pub avg_carbs: f64,
    /// Mean daily fat (g)
    pub avg_fat: f64,
    /// Population standard deviation of daily calories
    pub calorie_std_dev: f64,
    /// Days with at least one logged meal
    pub logged_days: u32,
    /// Calendar days in the window
    pub total_days: u32,
}

/// Signed differences between two period summaries (current - baseline)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deltas {
    /// Difference in mean daily calories
    pub calories: f64,
    /// Difference in mean daily protein (g)
    pub protein: f64,
    /// Difference in mean daily carbohydrates (g)
    pub carbs: f64,
    /// Difference in mean daily fat (g)
    pub fat: f64,
    /// Difference in calorie variability
    pub calorie_std_dev: f64,
}

/// Result of comparing two periods
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// The more recent period
    pub current: PeriodSummary,
    /// The reference period
    pub baseline: PeriodSummary,
    /// Raw signed differences, current minus baseline
    pub deltas: Deltas,
}

/// Summarize a single period's dense series
#[must_use]
pub fn summarize_period(label: &str, series: &TimeSeries) -> PeriodSummary {
    let calorie_stats = compute_stats(&series.metric_values(Metric::Calories));

    PeriodSummary {
        label: label.to_owned(),
        start: series.start(),
        end: series.end(),
        avg_calories: calorie_stats.mean,
        avg_protein: compute_stats(&series.metric_values(Metric::Protein)).mean,
        avg_carbs: compute_stats(&series.metric_values(Metric::Carbs)).mean,
        avg_fat: compute_stats(&series.metric_values(Metric::Fat)).mean,
        calorie_std_dev: calorie_stats.std_dev,
        logged_days: series.logged_days(),
        total_days: series.total_days(),
    }
}

/// Compare a current period against a baseline period
///
/// Both series must cover disjoint date ranges; deltas are
/// `current - baseline` for every averaged metric and for the calorie
/// variability figure.
///
/// # Errors
///
/// Returns `InvalidInput` when the two date ranges overlap.
pub fn compare_periods(
    current_label: &str,
    current: &TimeSeries,
    baseline_label: &str,
    baseline: &TimeSeries,
) -> AppResult<ComparisonResult> {
    if current.start() <= baseline.end() && baseline.start() <= current.end() {
        return Err(AppError::invalid_input(format!(
            "comparison periods must not overlap: {}..{} vs {}..{}",
            current.start(),
            current.end(),
            baseline.start(),
            baseline.end()
        )));
    }

    let current = summarize_period(current_label, current);
    let baseline = summarize_period(baseline_label, baseline);

    let deltas = Deltas {
        calories: current.avg_calories - baseline.avg_calories,
        protein: current.avg_protein - baseline.avg_protein,
        carbs: current.avg_carbs - baseline.avg_carbs,
        fat: current.avg_fat - baseline.avg_fat,
        calorie_std_dev: current.calorie_std_dev - baseline.calorie_std_dev,
    };

    Ok(ComparisonResult {
        current,
        baseline,
        deltas,
    })
}
