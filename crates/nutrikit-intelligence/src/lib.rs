// ABOUTME: Nutrition metrics and trend analytics engine for the Nutrikit platform
// ABOUTME: Pure, synchronous calculators over caller-supplied nutrition data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Contributors

#![deny(unsafe_code)]

//! # Nutrikit Intelligence
//!
//! Deterministic analytics over logged nutrition data. Every operation is a
//! pure function of its explicit inputs: no I/O, no hidden clock reads, no
//! state across calls. Callers fetch time series and profile data, call in,
//! and serialize the returned records; concurrent use needs no coordination.
//!
//! ## Modules
//!
//! - **`nutrition_calculator`**: BMR, TDEE, calorie/macro targets, progress
//! - **`confidence`**: meal-estimate confidence levels and rationale
//! - **`trend_analysis`**: per-metric mean, deviation, consistency, trend
//! - **`coverage`**: logged-day coverage over a date range
//! - **`streaks`**: consecutive-day logging streaks
//! - **`period_comparison`**: two-window summaries and raw deltas
//! - **`day_filter`**: structured day-selection filter evaluation

/// Tunable nutrition coefficients with documented defaults
pub mod config;

/// Fixed algorithm thresholds and energy conversion constants
pub mod physiological_constants;

/// Energy and macronutrient target derivation
pub mod nutrition_calculator;

/// Meal-estimate confidence classification and rationale
pub mod confidence;

/// Per-metric statistical summaries and trend classification
pub mod trend_analysis;

/// Logged-day coverage reporting
pub mod coverage;

/// Consecutive-day habit streak calculation
pub mod streaks;

/// Two-period aggregation and delta computation
pub mod period_comparison;

/// Structured day-selection filter evaluation
pub mod day_filter;

pub use config::{ActivityFactorsConfig, BmrConfig, MacronutrientConfig, NutritionConfig};
pub use confidence::ConfidenceLevel;
pub use coverage::{ConfidenceReport, CoverageLevel};
pub use day_filter::{FilterSpec, ThresholdOperator};
pub use nutrition_calculator::{DailyNeeds, MacroPercentages, MacroTargets};
pub use period_comparison::{ComparisonResult, Deltas, PeriodSummary};
pub use streaks::StreakState;
pub use trend_analysis::{TrendDirection, TrendStats};
