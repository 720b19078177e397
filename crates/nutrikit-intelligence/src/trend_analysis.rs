// ABOUTME: Per-metric statistical summaries over daily nutrition series
// ABOUTME: Mean, population std dev, consistency score, and trend classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Contributors

//! Trend statistics for a single nutrition metric
//!
//! Operates on dense daily series: logging gaps are zero-valued observations
//! and are deliberately included in the mean and deviation. A week with three
//! skipped days *is* less consistent than a fully logged one; excluding the
//! gaps would hide exactly the signal the consistency score measures.
#![allow(clippy::cast_precision_loss)] // Safe: day counts stay far below 2^52

use nutrikit_core::models::{Metric, TimeSeries};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::physiological_constants::trend::{MIN_TREND_POINTS, TREND_CHANGE_THRESHOLD};

/// Direction of change between the first and second half of a series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Second-half mean more than 5% above the first half
    Up,
    /// Second-half mean more than 5% below the first half
    Down,
    /// Change within the stability threshold, or too little data
    Stable,
}

/// Statistical summary of one metric across a series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendStats {
    /// Arithmetic mean over all days, gaps included
    pub mean: f64,
    /// Population standard deviation (divide by N)
    pub std_dev: f64,
    /// Bounded 0-100 score, higher when day-to-day variance is low
    /// relative to the mean; 0 when there is no activity at all
    pub consistency_score: f64,
    /// Three-way trend classification
    pub trend: TrendDirection,
}

/// Compute trend statistics for one metric of a dense series
#[must_use]
pub fn analyze_metric(series: &TimeSeries, metric: Metric) -> TrendStats {
    compute_stats(&series.metric_values(metric))
}

/// Compute trend statistics over raw daily values
///
/// Degenerate inputs are defined, not errors: an empty slice yields zero
/// mean and deviation, a zero consistency score, and a stable trend.
#[must_use]
pub fn compute_stats(values: &[f64]) -> TrendStats {
    let mean = mean_of(values);
    let std_dev = population_std_dev(values, mean);
    let consistency_score = consistency_score(mean, std_dev);
    let trend = classify_trend(values);

    TrendStats {
        mean,
        std_dev,
        consistency_score,
        trend,
    }
}

fn mean_of(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Bounded consistency score from the coefficient of variation
///
/// 100 means perfectly even intake; the score falls linearly as the
/// deviation grows relative to the mean and floors at 0. A zero mean (no
/// activity) makes no consistency claim and scores 0.
fn consistency_score(mean: f64, std_dev: f64) -> f64 {
    if mean <= 0.0 {
        return 0.0;
    }
    (std_dev / mean).mul_add(-100.0, 100.0).clamp(0.0, 100.0)
}

/// Classify the trend by comparing first-half and second-half means
///
/// Halves are split by index, not by date gaps. The relative change must
/// exceed the ±5% stability threshold to leave `Stable`; series shorter
/// than two points are always stable. A zero first-half mean with non-zero
/// activity in the second half classifies as `Up` (new activity is an
/// upward trend).
fn classify_trend(values: &[f64]) -> TrendDirection {
    if values.len() < MIN_TREND_POINTS {
        debug!(points = values.len(), "series too short for a trend call");
        return TrendDirection::Stable;
    }

    let half = values.len() / 2;
    let first_mean = mean_of(&values[..half]);
    let second_mean = mean_of(&values[half..]);

    if first_mean <= 0.0 {
        if second_mean > 0.0 {
            return TrendDirection::Up;
        }
        return TrendDirection::Stable;
    }

    let relative_change = (second_mean - first_mean) / first_mean;
    if relative_change > TREND_CHANGE_THRESHOLD {
        TrendDirection::Up
    } else if relative_change < -TREND_CHANGE_THRESHOLD {
        TrendDirection::Down
    } else {
        TrendDirection::Stable
    }
}
