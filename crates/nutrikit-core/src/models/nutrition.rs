// ABOUTME: Nutrition tracking models for daily intake analysis
// ABOUTME: MealEntry, DailyDataPoint, Metric, and the dense gap-inclusive TimeSeries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Contributors

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    Other,
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }
}

/// Individual meal entry within a day
///
/// Macro fields are optional because the upstream analysis step may not
/// estimate every nutrient; absent values contribute zero when a day is
/// aggregated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealEntry {
    /// Meal slot (breakfast, lunch, dinner, snack)
    pub meal_type: MealType,
    /// Meal description or name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Calories for this meal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Protein in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Carbohydrates in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    /// Fat in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
}

/// Nutrition metric identifier used by trend analysis and day filters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Energy intake (kcal)
    Calories,
    /// Protein intake (g)
    Protein,
    /// Carbohydrate intake (g)
    Carbs,
    /// Fat intake (g)
    Fat,
}

/// One calendar day of logged nutrition data
///
/// A day with `meal_count == 0` is a logging gap; gaps are kept in a series
/// as zero-valued days rather than dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyDataPoint {
    /// Calendar day (unique key within a series)
    pub date: NaiveDate,
    /// Total calories consumed
    pub calories: f64,
    /// Total protein in grams
    #[serde(rename = "protein")]
    pub protein_g: f64,
    /// Total carbohydrates in grams
    #[serde(rename = "carbs")]
    pub carbs_g: f64,
    /// Total fat in grams
    #[serde(rename = "fat")]
    pub fat_g: f64,
    /// Number of meals logged on this day
    pub meal_count: u32,
}

impl DailyDataPoint {
    /// An unlogged day: zero intake, zero meals
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            calories: 0.0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
            meal_count: 0,
        }
    }

    /// Aggregate a day's meal entries into a day-level data point
    ///
    /// Absent macro estimates contribute zero; `meal_count` is the number of
    /// entries regardless of how complete their estimates are.
    #[must_use]
    pub fn from_meals(date: NaiveDate, meals: &[MealEntry]) -> Self {
        let mut point = Self::empty(date);
        for meal in meals {
            point.calories += meal.calories.unwrap_or(0.0);
            point.protein_g += meal.protein_g.unwrap_or(0.0);
            point.carbs_g += meal.carbs_g.unwrap_or(0.0);
            point.fat_g += meal.fat_g.unwrap_or(0.0);
        }
        point.meal_count = u32::try_from(meals.len()).unwrap_or(u32::MAX);
        point
    }

    /// Value of the named metric on this day
    #[must_use]
    pub const fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Calories => self.calories,
            Metric::Protein => self.protein_g,
            Metric::Carbs => self.carbs_g,
            Metric::Fat => self.fat_g,
        }
    }

    /// Whether anything was logged on this day
    #[must_use]
    pub const fn is_logged(&self) -> bool {
        self.meal_count > 0
    }
}

/// Dense, chronologically ordered daily series over an inclusive date range
///
/// Every calendar day in the range is present: logging gaps are explicit
/// zero-valued points. This makes the "no data logged means zero intake"
/// modeling choice structural: statistics over the series include gap days
/// by construction. Constructed via [`TimeSeries::dense`]; there is no
/// `Deserialize` impl because an externally supplied vector could violate
/// the density invariant.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeries {
    start: NaiveDate,
    end: NaiveDate,
    points: Vec<DailyDataPoint>,
}

impl TimeSeries {
    /// Build a dense series from sparse logged points
    ///
    /// Days in `[start, end]` without a supplied point are zero-filled.
    /// Duplicate dates resolve to the last supplied point; points outside
    /// the range are ignored. Both cases are logged at `debug!`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `start > end`.
    pub fn dense(
        start: NaiveDate,
        end: NaiveDate,
        points: Vec<DailyDataPoint>,
    ) -> AppResult<Self> {
        if start > end {
            return Err(AppError::invalid_input(format!(
                "date range start {start} is after end {end}"
            )));
        }

        let mut by_date: BTreeMap<NaiveDate, DailyDataPoint> = BTreeMap::new();
        for point in points {
            if point.date < start || point.date > end {
                debug!(date = %point.date, "data point outside requested range, ignoring");
                continue;
            }
            let date = point.date;
            if by_date.insert(date, point).is_some() {
                debug!(date = %date, "duplicate data point for date, keeping latest");
            }
        }

        let mut dense = Vec::new();
        let mut day = start;
        loop {
            let point = by_date
                .remove(&day)
                .unwrap_or_else(|| DailyDataPoint::empty(day));
            dense.push(point);
            if day == end {
                break;
            }
            day = match day.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        Ok(Self {
            start,
            end,
            points: dense,
        })
    }

    /// First day of the range
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// All days in chronological order, gaps included
    #[must_use]
    pub fn points(&self) -> &[DailyDataPoint] {
        &self.points
    }

    /// Count of calendar days in the range, regardless of data presence
    #[must_use]
    pub fn total_days(&self) -> u32 {
        u32::try_from(self.points.len()).unwrap_or(u32::MAX)
    }

    /// Count of days with at least one logged meal
    #[must_use]
    pub fn logged_days(&self) -> u32 {
        let logged = self.points.iter().filter(|p| p.is_logged()).count();
        u32::try_from(logged).unwrap_or(u32::MAX)
    }

    /// Dates with at least one logged meal, in chronological order
    #[must_use]
    pub fn logged_dates(&self) -> Vec<NaiveDate> {
        self.points
            .iter()
            .filter(|p| p.is_logged())
            .map(|p| p.date)
            .collect()
    }

    /// The named metric's value for every day in order, gaps as zero
    #[must_use]
    pub fn metric_values(&self, metric: Metric) -> Vec<f64> {
        self.points.iter().map(|p| p.metric(metric)).collect()
    }
}
