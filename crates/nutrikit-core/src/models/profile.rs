// ABOUTME: Body profile models for energy and macro target derivation
// ABOUTME: Sex, ActivityLevel, GoalType enums and the validated BodyProfile record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Contributors

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Default weekly pace magnitude (kg/week) when a profile omits one
pub const DEFAULT_WEEKLY_PACE_KG: f64 = 0.5;

/// Biological sex for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male (higher BMR constant)
    Male,
    /// Female (lower BMR constant)
    Female,
}

/// Activity level for TDEE calculation
///
/// Each variant is bound to a fixed multiplier through
/// `ActivityFactorsConfig`; the enumeration is closed so an unknown level is
/// rejected at deserialization rather than silently defaulted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    Light,
    /// Moderately active (3-5 days/week)
    Moderate,
    /// Very active (6-7 days/week)
    Active,
    /// Athlete (hard training, often 2x/day)
    Athlete,
}

/// Goal type driving the calorie target and protein factor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    /// Weight loss (caloric deficit)
    Lose,
    /// Maintenance (caloric balance)
    Maintain,
    /// Weight gain (caloric surplus)
    Gain,
}

/// Body and activity parameters for target derivation
///
/// Immutable input owned by the caller; the engine only reads it. The weekly
/// pace is a magnitude (kg/week); its direction comes from the goal type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyProfile {
    /// Biological sex
    pub sex: Sex,
    /// Body weight in kilograms (must be positive)
    pub weight_kg: f64,
    /// Height in centimeters (must be positive)
    pub height_cm: f64,
    /// Age in years (must be positive)
    pub age_years: u32,
    /// Activity level category
    pub activity_level: ActivityLevel,
    /// Goal type
    pub goal_type: GoalType,
    /// Weekly pace magnitude in kg/week
    #[serde(default = "default_weekly_pace")]
    pub weekly_pace_kg: f64,
}

fn default_weekly_pace() -> f64 {
    DEFAULT_WEEKLY_PACE_KG
}

impl BodyProfile {
    /// Validate the profile's required dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the offending field when weight, height,
    /// or age is not positive, or when the weekly pace magnitude is negative.
    pub fn validate(&self) -> AppResult<()> {
        if self.weight_kg <= 0.0 {
            return Err(AppError::invalid_input("weight_kg must be positive"));
        }
        if self.height_cm <= 0.0 {
            return Err(AppError::invalid_input("height_cm must be positive"));
        }
        if self.age_years == 0 {
            return Err(AppError::invalid_input("age_years must be positive"));
        }
        if self.weekly_pace_kg < 0.0 {
            return Err(AppError::invalid_input(
                "weekly_pace_kg is a magnitude and must not be negative",
            ));
        }
        Ok(())
    }
}
