// ABOUTME: Logged-day coverage reporting over a date range
// ABOUTME: ConfidenceReport with logged/total days, percentage, and quality level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Contributors

//! Logged-day coverage for qualifying trend output
//!
//! A trend computed over ten logged days means something different from one
//! computed over two logged days and eight gaps. Coverage is the fraction of
//! calendar days in the requested range that have at least one logged meal,
//! banded into a quality level callers attach to their summaries.

use nutrikit_core::models::TimeSeries;
use serde::{Deserialize, Serialize};

use crate::physiological_constants::coverage::{HIGH_COVERAGE_PERCENT, MEDIUM_COVERAGE_PERCENT};

/// Data-quality level derived from coverage percentage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CoverageLevel {
    /// At least 80% of days logged
    High,
    /// At least 50% of days logged
    Medium,
    /// Below 50%
    Low,
}

/// Coverage summary for a date range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceReport {
    /// Days in the range with at least one logged meal
    pub logged_days: u32,
    /// Calendar days in the range, inclusive, regardless of data presence
    pub total_days: u32,
    /// Rounded `logged_days / total_days` percentage; 0 for an empty range
    pub percentage: u8,
    /// Banded quality level
    pub level: CoverageLevel,
}

/// Build the coverage report for a dense series
#[must_use]
pub fn coverage_report(series: &TimeSeries) -> ConfidenceReport {
    report_from_counts(series.logged_days(), series.total_days())
}

/// Build a coverage report from raw day counts
///
/// Zero total days is defined, not an error: percentage 0, level low.
#[must_use]
pub fn report_from_counts(logged_days: u32, total_days: u32) -> ConfidenceReport {
    let percentage = if total_days == 0 {
        0
    } else {
        (f64::from(logged_days) / f64::from(total_days) * 100.0).round() as u8
    };

    let level = if percentage >= HIGH_COVERAGE_PERCENT {
        CoverageLevel::High
    } else if percentage >= MEDIUM_COVERAGE_PERCENT {
        CoverageLevel::Medium
    } else {
        CoverageLevel::Low
    };

    ConfidenceReport {
        logged_days,
        total_days,
        percentage,
        level,
    }
}
