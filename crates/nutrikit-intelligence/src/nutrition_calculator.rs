// ABOUTME: Energy and macronutrient target calculations from body metrics
// ABOUTME: BMR, TDEE, goal-adjusted calorie targets, macro split, and progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Contributors

//! Nutrition Calculator Module
//!
//! Evidence-based energy and macronutrient target derivation from body and
//! activity parameters.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
//!   (activity factors)
//!
//! - Wishnofsky, M. (1958). Caloric equivalents of gained or lost weight.
//!   *American Journal of Clinical Nutrition*, 6(5), 542-546 (7700 kcal/kg)

use crate::config::{ActivityFactorsConfig, BmrConfig, MacronutrientConfig, NutritionConfig};
use crate::physiological_constants::energy::{
    DAYS_PER_WEEK, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN, KCAL_PER_KG_BODY_MASS,
};
use nutrikit_core::models::{ActivityLevel, BodyProfile, GoalType, Sex};
use nutrikit_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Daily calorie and macronutrient targets
///
/// All fields are non-negative by construction. In the extreme
/// low-calorie/high-weight corner where protein and fat alone exceed the
/// calorie budget, `carbs` is clamped to zero and the total may slightly
/// exceed `calories`; the event is flagged through the log rather than
/// rebalanced away.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTargets {
    /// Daily calorie target (kcal)
    pub calories: u32,
    /// Daily protein target (grams)
    #[serde(rename = "protein")]
    pub protein_g: u32,
    /// Daily carbohydrate target (grams)
    #[serde(rename = "carbs")]
    pub carbs_g: u32,
    /// Daily fat target (grams)
    #[serde(rename = "fat")]
    pub fat_g: u32,
}

/// Macronutrient percentage breakdown of an energy total
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MacroPercentages {
    /// Protein as percentage of total calories
    pub protein_percent: f64,
    /// Carbohydrates as percentage of total calories
    pub carbs_percent: f64,
    /// Fat as percentage of total calories
    pub fat_percent: f64,
}

/// Complete derived targets for one profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyNeeds {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: u32,
    /// Calorie and macro targets after the goal adjustment
    pub targets: MacroTargets,
    /// Energy split of the targets
    #[serde(rename = "macroPercentages")]
    pub macro_percentages: MacroPercentages,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Men: +5
/// - Women: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
///
/// # Errors
///
/// Returns `InvalidInput` naming the offending field when weight, height, or
/// age is not positive.
pub fn basal_metabolic_rate(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    config: &BmrConfig,
) -> AppResult<f64> {
    if weight_kg <= 0.0 {
        return Err(AppError::invalid_input("weight_kg must be positive"));
    }
    if height_cm <= 0.0 {
        return Err(AppError::invalid_input("height_cm must be positive"));
    }
    if age_years == 0 {
        return Err(AppError::invalid_input("age_years must be positive"));
    }

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age_years);

    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    Ok(weight_component + height_component + age_component + sex_constant)
}

/// Calculate Total Daily Energy Expenditure, rounded to the nearest kcal
///
/// Formula: TDEE = BMR x activity factor
///
/// Activity factors based on `McArdle` et al. (2010):
/// - Sedentary: 1.2, Light: 1.375, Moderate: 1.55, Active: 1.725,
///   Athlete: 1.9
///
/// # Errors
///
/// Returns `InvalidInput` when BMR is not positive.
pub fn total_daily_energy_expenditure(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<u32> {
    if bmr <= 0.0 {
        return Err(AppError::invalid_input("bmr must be positive"));
    }

    let activity_factor = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::Athlete => config.athlete,
    };

    Ok((bmr * activity_factor).round() as u32)
}

/// Calculate the goal-adjusted daily calorie target
///
/// The daily energy delta is `weekly_pace_kg` x 7700 / 7 (one kilogram of
/// body mass approximates 7700 kcal). Subtracted for `Lose`, added for
/// `Gain`; `Maintain` returns the TDEE unchanged and ignores the pace
/// entirely. A deficit larger than the TDEE clamps to zero.
///
/// # Errors
///
/// Returns `InvalidInput` for `Lose`/`Gain` when the pace magnitude is
/// negative.
pub fn target_calories(tdee: u32, goal_type: GoalType, weekly_pace_kg: f64) -> AppResult<u32> {
    if goal_type == GoalType::Maintain {
        return Ok(tdee);
    }

    if weekly_pace_kg < 0.0 {
        return Err(AppError::invalid_input(
            "weekly_pace_kg is a magnitude and must not be negative",
        ));
    }

    let daily_delta = weekly_pace_kg * KCAL_PER_KG_BODY_MASS / DAYS_PER_WEEK;
    let target = match goal_type {
        GoalType::Lose => f64::from(tdee) - daily_delta,
        GoalType::Gain => f64::from(tdee) + daily_delta,
        GoalType::Maintain => f64::from(tdee),
    };

    Ok(target.max(0.0).round() as u32)
}

/// Derive the macro split for a calorie target
///
/// - Protein: `weight_kg` x 1.4 g/kg for `Maintain`, 2.0 g/kg otherwise
/// - Fat: 28% of target calories at 9 kcal/g
/// - Carbs: remaining calories at 4 kcal/g, clamped to zero
///
/// The carb remainder uses the rounded protein and fat grams so the emitted
/// targets are internally consistent. When protein and fat alone exceed the
/// calorie budget the carb target clamps to zero and the overrun is flagged
/// in the log; protein and fat are never rebalanced.
///
/// # Errors
///
/// Returns `InvalidInput` when weight is not positive.
pub fn macro_targets(
    target_calories: u32,
    weight_kg: f64,
    goal_type: GoalType,
    config: &MacronutrientConfig,
) -> AppResult<MacroTargets> {
    if weight_kg <= 0.0 {
        return Err(AppError::invalid_input("weight_kg must be positive"));
    }

    let protein_g_per_kg = match goal_type {
        GoalType::Maintain => config.protein_maintain_g_per_kg,
        GoalType::Lose | GoalType::Gain => config.protein_active_goal_g_per_kg,
    };
    let protein_g = (weight_kg * protein_g_per_kg).round();

    let calories = f64::from(target_calories);
    let fat_g = (calories * config.fat_percent_of_calories / KCAL_PER_G_FAT).round();

    let remainder_kcal =
        fat_g.mul_add(-KCAL_PER_G_FAT, protein_g.mul_add(-KCAL_PER_G_PROTEIN, calories));
    let carbs_g = (remainder_kcal / KCAL_PER_G_CARBS).round();
    let carbs_g = if carbs_g < 0.0 {
        warn!(
            target_calories,
            protein_g, fat_g, "macro derivation exceeds calorie budget, clamping carbs to zero"
        );
        0.0
    } else {
        carbs_g
    };

    Ok(MacroTargets {
        calories: target_calories,
        protein_g: protein_g as u32,
        carbs_g: carbs_g as u32,
        fat_g: fat_g as u32,
    })
}

/// Progress toward a goal value as a percentage clamped to [0, 100]
///
/// A zero (or negative) goal yields 0, defined behavior for brand-new
/// users, not an error.
#[must_use]
pub fn progress_percent(current: f64, goal: f64) -> u8 {
    if goal <= 0.0 {
        return 0;
    }
    (current / goal * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Energy split of a protein/carb/fat combination
///
/// Zero total energy yields all-zero percentages.
#[must_use]
pub fn macro_percentages(protein_g: f64, carbs_g: f64, fat_g: f64) -> MacroPercentages {
    let protein_kcal = protein_g * KCAL_PER_G_PROTEIN;
    let carbs_kcal = carbs_g * KCAL_PER_G_CARBS;
    let fat_kcal = fat_g * KCAL_PER_G_FAT;
    let total_kcal = protein_kcal + carbs_kcal + fat_kcal;

    if total_kcal <= 0.0 {
        return MacroPercentages {
            protein_percent: 0.0,
            carbs_percent: 0.0,
            fat_percent: 0.0,
        };
    }

    MacroPercentages {
        protein_percent: protein_kcal / total_kcal * 100.0,
        carbs_percent: carbs_kcal / total_kcal * 100.0,
        fat_percent: fat_kcal / total_kcal * 100.0,
    }
}

/// Calculate complete daily needs for a profile
///
/// Main entry point combining BMR, TDEE, the goal adjustment, and the macro
/// split. The profile is validated first.
///
/// # Errors
///
/// Returns `InvalidInput` when profile validation or any component
/// calculation rejects its inputs.
pub fn calculate_daily_needs(
    profile: &BodyProfile,
    config: &NutritionConfig,
) -> AppResult<DailyNeeds> {
    profile.validate()?;

    let bmr = basal_metabolic_rate(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex,
        &config.bmr,
    )?;

    let tdee = total_daily_energy_expenditure(bmr, profile.activity_level, &config.activity_factors)?;

    let calories = target_calories(tdee, profile.goal_type, profile.weekly_pace_kg)?;

    let targets = macro_targets(calories, profile.weight_kg, profile.goal_type, &config.macronutrients)?;

    let macro_split = macro_percentages(
        f64::from(targets.protein_g),
        f64::from(targets.carbs_g),
        f64::from(targets.fat_g),
    );

    Ok(DailyNeeds {
        bmr,
        tdee,
        targets,
        macro_percentages: macro_split,
    })
}
