// ABOUTME: Structured day-selection filter evaluation over daily data points
// ABOUTME: FilterSpec tagged union (day-of-week, metric threshold, none) and its evaluator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Contributors

//! Day filter evaluation
//!
//! The query interpreter (an external collaborator) turns natural-language
//! questions like "show me my high-calorie Saturdays" into a structured
//! [`FilterSpec`]. This module only evaluates those filters; it never produces
//! them. The filter is a closed sum type handled exhaustively, so a new filter
//! kind is a compile-time-visible change, and unknown kinds or operators fail
//! at deserialization instead of being silently coerced.

use chrono::Datelike;
use nutrikit_core::models::{DailyDataPoint, Metric};
use nutrikit_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Comparison operator for threshold filters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdOperator {
    /// Metric value strictly greater than the threshold
    Above,
    /// Metric value strictly less than the threshold
    Below,
    /// Metric value exactly equal to the threshold
    Equals,
}

/// Structured day-selection filter
///
/// Weekday indices use the calendar's native numbering: 0 = Sunday through
/// 6 = Saturday.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterSpec {
    /// Match days whose weekday index is in the set
    DayOfWeek {
        /// Weekday indices, 0 = Sunday .. 6 = Saturday
        days: Vec<u8>,
    },
    /// Match days where the named metric satisfies the comparison
    Threshold {
        /// Which metric to compare
        metric: Metric,
        /// Comparison operator
        operator: ThresholdOperator,
        /// Threshold value
        value: f64,
    },
    /// Match everything: an explicit pass-through, not an error
    None,
}

impl FilterSpec {
    /// Validate the spec's numeric fields
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when a day-of-week index is outside 0..=6.
    pub fn validate(&self) -> AppResult<()> {
        if let Self::DayOfWeek { days } = self {
            for &day in days {
                if day > 6 {
                    return Err(AppError::value_out_of_range(
                        "days",
                        format!("weekday index {day} must be between 0 (Sunday) and 6 (Saturday)"),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Apply a filter to a sequence of daily data points
///
/// Returns a new, order-preserving subsequence; the source is never mutated.
/// A `None` spec returns the full series unchanged.
///
/// # Errors
///
/// Returns `ValueOutOfRange` when the spec fails validation.
// Exact equality by specification: threshold values are copied from the same
// logged data they are compared against.
#[allow(clippy::float_cmp)]
pub fn apply_filter(
    spec: &FilterSpec,
    points: &[DailyDataPoint],
) -> AppResult<Vec<DailyDataPoint>> {
    spec.validate()?;

    let filtered = match spec {
        FilterSpec::None => points.to_vec(),
        FilterSpec::DayOfWeek { days } => points
            .iter()
            .filter(|p| {
                let weekday = p.date.weekday().num_days_from_sunday();
                days.iter().any(|&d| u32::from(d) == weekday)
            })
            .cloned()
            .collect(),
        FilterSpec::Threshold {
            metric,
            operator,
            value,
        } => points
            .iter()
            .filter(|p| {
                let observed = p.metric(*metric);
                match operator {
                    ThresholdOperator::Above => observed > *value,
                    ThresholdOperator::Below => observed < *value,
                    ThresholdOperator::Equals => observed == *value,
                }
            })
            .cloned()
            .collect(),
    };

    Ok(filtered)
}
