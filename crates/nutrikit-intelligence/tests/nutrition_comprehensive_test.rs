// ABOUTME: Comprehensive algorithm tests for the nutrition target calculations
// ABOUTME: Covers BMR, TDEE, goal-adjusted calories, macro split, and progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Contributors
//! Comprehensive algorithm tests for the nutrition calculator
//!
//! - Mifflin-St Jeor BMR (male/female, monotonicity, validation)
//! - TDEE with all 5 activity levels
//! - Goal-adjusted calorie targets including the maintain identity
//! - Macro split with the explicit negative-carb clamp case
//! - Progress percentage boundaries
//! - Complete daily needs derivation from a profile

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrikit_core::models::{ActivityLevel, BodyProfile, GoalType, Sex};
use nutrikit_intelligence::config::NutritionConfig;
use nutrikit_intelligence::nutrition_calculator::{
    basal_metabolic_rate, calculate_daily_needs, macro_percentages, macro_targets,
    progress_percent, target_calories, total_daily_energy_expenditure,
};

// ============================================================================
// BMR CALCULATION TESTS - Mifflin-St Jeor Formula
// ============================================================================

#[test]
fn test_bmr_male_typical() {
    let config = &NutritionConfig::global().bmr;

    // 30-year-old male, 75kg, 180cm
    let bmr = basal_metabolic_rate(75.0, 180.0, 30, Sex::Male, config).unwrap();

    // Expected: 10 * 75 + 6.25 * 180 - 5 * 30 + 5 = 1730
    assert!(
        (bmr - 1730.0).abs() < 1e-9,
        "BMR should be exactly 1730, got {bmr}"
    );
}

#[test]
fn test_bmr_female_typical() {
    let config = &NutritionConfig::global().bmr;

    // 25-year-old female, 60kg, 165cm
    let bmr = basal_metabolic_rate(60.0, 165.0, 25, Sex::Female, config).unwrap();

    // Expected: 10 * 60 + 6.25 * 165 - 5 * 25 - 161 = 1345.25
    assert!(
        (bmr - 1345.25).abs() < 1e-9,
        "BMR should be exactly 1345.25, got {bmr}"
    );
}

#[test]
fn test_bmr_male_exceeds_female_by_constant() {
    let config = &NutritionConfig::global().bmr;

    // Identical body parameters differ only by the sex constant: 5 - (-161)
    let male = basal_metabolic_rate(70.0, 170.0, 40, Sex::Male, config).unwrap();
    let female = basal_metabolic_rate(70.0, 170.0, 40, Sex::Female, config).unwrap();

    assert!(
        (male - female - 166.0).abs() < 1e-9,
        "male BMR should exceed female BMR by exactly 166, got {}",
        male - female
    );
}

#[test]
fn test_bmr_monotonic_in_weight_height_and_age() {
    let config = &NutritionConfig::global().bmr;

    let base = basal_metabolic_rate(70.0, 170.0, 40, Sex::Male, config).unwrap();
    let heavier = basal_metabolic_rate(80.0, 170.0, 40, Sex::Male, config).unwrap();
    let taller = basal_metabolic_rate(70.0, 185.0, 40, Sex::Male, config).unwrap();
    let older = basal_metabolic_rate(70.0, 170.0, 55, Sex::Male, config).unwrap();

    assert!(heavier > base, "BMR must increase with weight");
    assert!(taller > base, "BMR must increase with height");
    assert!(older < base, "BMR must decrease with age");
}

#[test]
fn test_bmr_rejects_non_positive_inputs() {
    let config = &NutritionConfig::global().bmr;

    let weight_err = basal_metabolic_rate(0.0, 170.0, 40, Sex::Male, config).unwrap_err();
    assert!(weight_err.message.contains("weight_kg"));

    let height_err = basal_metabolic_rate(70.0, -1.0, 40, Sex::Male, config).unwrap_err();
    assert!(height_err.message.contains("height_cm"));

    let age_err = basal_metabolic_rate(70.0, 170.0, 0, Sex::Male, config).unwrap_err();
    assert!(age_err.message.contains("age_years"));
}

// ============================================================================
// TDEE CALCULATION TESTS - Activity Level Multipliers
// ============================================================================

#[test]
fn test_tdee_all_activity_levels() {
    let config = &NutritionConfig::global().activity_factors;
    let bmr = 1600.0;

    let cases = [
        (ActivityLevel::Sedentary, 1920),
        (ActivityLevel::Light, 2200),
        (ActivityLevel::Moderate, 2480),
        (ActivityLevel::Active, 2760),
        (ActivityLevel::Athlete, 3040),
    ];

    for (level, expected) in cases {
        let tdee = total_daily_energy_expenditure(bmr, level, config).unwrap();
        assert_eq!(tdee, expected, "TDEE mismatch for {level:?}");
    }
}

#[test]
fn test_tdee_rounds_to_nearest_integer() {
    let config = &NutritionConfig::global().activity_factors;

    // 1500.3 * 1.375 = 2062.9125 -> 2063
    let tdee = total_daily_energy_expenditure(1500.3, ActivityLevel::Light, config).unwrap();
    assert_eq!(tdee, 2063);
}

#[test]
fn test_tdee_rejects_non_positive_bmr() {
    let config = &NutritionConfig::global().activity_factors;

    let err = total_daily_energy_expenditure(0.0, ActivityLevel::Moderate, config).unwrap_err();
    assert!(err.message.contains("bmr"));
}

// ============================================================================
// TARGET CALORIE TESTS - Goal Adjustment
// ============================================================================

#[test]
fn test_target_calories_maintain_is_identity_regardless_of_pace() {
    for pace in [0.0, 0.25, 0.5, 1.0, 2.5, -3.0] {
        let target = target_calories(2400, GoalType::Maintain, pace).unwrap();
        assert_eq!(target, 2400, "maintain must ignore pace {pace}");
    }
}

#[test]
fn test_target_calories_lose_and_gain_at_default_pace() {
    // 0.5 kg/week * 7700 / 7 = 550 kcal/day
    let lose = target_calories(2500, GoalType::Lose, 0.5).unwrap();
    assert_eq!(lose, 1950);

    let gain = target_calories(2500, GoalType::Gain, 0.5).unwrap();
    assert_eq!(gain, 3050);
}

#[test]
fn test_target_calories_deficit_clamps_at_zero() {
    // Deficit larger than the TDEE cannot go negative
    let target = target_calories(400, GoalType::Lose, 0.5).unwrap();
    assert_eq!(target, 0);
}

#[test]
fn test_target_calories_rejects_negative_pace_for_active_goals() {
    let err = target_calories(2500, GoalType::Lose, -0.5).unwrap_err();
    assert!(err.message.contains("weekly_pace_kg"));

    let err = target_calories(2500, GoalType::Gain, -0.5).unwrap_err();
    assert!(err.message.contains("weekly_pace_kg"));
}

// ============================================================================
// MACRO TARGET TESTS - Split Derivation and the Carb Clamp
// ============================================================================

#[test]
fn test_macro_targets_maintain_typical() {
    let config = &NutritionConfig::global().macronutrients;

    let targets = macro_targets(2500, 75.0, GoalType::Maintain, config).unwrap();

    // Protein: 75 * 1.4 = 105; fat: 2500 * 0.28 / 9 = 77.8 -> 78
    assert_eq!(targets.protein_g, 105);
    assert_eq!(targets.fat_g, 78);
    // Carbs absorb the remainder: (2500 - 420 - 702) / 4 = 344.5 -> 345
    assert_eq!(targets.carbs_g, 345);
    assert_eq!(targets.calories, 2500);
}

#[test]
fn test_macro_targets_active_goal_uses_higher_protein_factor() {
    let config = &NutritionConfig::global().macronutrients;

    let lose = macro_targets(2000, 80.0, GoalType::Lose, config).unwrap();
    let gain = macro_targets(2000, 80.0, GoalType::Gain, config).unwrap();
    let maintain = macro_targets(2000, 80.0, GoalType::Maintain, config).unwrap();

    // 80 * 2.0 = 160 for lose/gain, 80 * 1.4 = 112 for maintain
    assert_eq!(lose.protein_g, 160);
    assert_eq!(gain.protein_g, 160);
    assert_eq!(maintain.protein_g, 112);
}

#[test]
fn test_macro_targets_protein_and_fat_fit_budget_for_sensible_maintain_inputs() {
    let config = &NutritionConfig::global().macronutrients;

    let cases = [
        (50.0, 1200),
        (60.0, 1600),
        (75.0, 1800),
        (100.0, 2400),
        (150.0, 2600),
        (200.0, 1600),
    ];

    for (weight_kg, calories) in cases {
        let targets = macro_targets(calories, weight_kg, GoalType::Maintain, config).unwrap();
        let protein_fat_kcal = targets.protein_g * 4 + targets.fat_g * 9;
        assert!(
            protein_fat_kcal <= calories,
            "protein+fat energy {protein_fat_kcal} exceeds budget {calories} at {weight_kg}kg"
        );
    }
}

#[test]
fn test_macro_targets_clamps_carbs_to_zero_at_extreme_inputs() {
    let config = &NutritionConfig::global().macronutrients;

    // 200kg at 1200 kcal: protein alone is 280g = 1120 kcal, fat 37g = 333
    // kcal; the remainder is negative and the carb target must clamp to
    // zero rather than go negative or rebalance the other macros.
    let targets = macro_targets(1200, 200.0, GoalType::Maintain, config).unwrap();

    assert_eq!(targets.protein_g, 280);
    assert_eq!(targets.fat_g, 37);
    assert_eq!(targets.carbs_g, 0, "negative carb remainder must clamp to 0");
}

#[test]
fn test_macro_targets_rejects_non_positive_weight() {
    let config = &NutritionConfig::global().macronutrients;

    let err = macro_targets(2000, 0.0, GoalType::Maintain, config).unwrap_err();
    assert!(err.message.contains("weight_kg"));
}

// ============================================================================
// PROGRESS AND PERCENTAGE TESTS
// ============================================================================

#[test]
fn test_progress_percent_typical_and_clamped() {
    assert_eq!(progress_percent(1500.0, 2000.0), 75);
    assert_eq!(progress_percent(2500.0, 2000.0), 100, "overshoot clamps to 100");
    assert_eq!(progress_percent(0.0, 2000.0), 0);
}

#[test]
fn test_progress_percent_zero_goal_is_defined() {
    assert_eq!(progress_percent(1500.0, 0.0), 0, "zero goal yields 0, not an error");
}

#[test]
fn test_macro_percentages_sum_to_one_hundred() {
    // 100g protein, 100g carbs, ~20g fat: 400 + 400 + 180 kcal
    let split = macro_percentages(100.0, 100.0, 20.0);

    let total = split.protein_percent + split.carbs_percent + split.fat_percent;
    assert!((total - 100.0).abs() < 1e-9, "split must sum to 100, got {total}");
    assert!((split.protein_percent - 40.816_326_530_612_244).abs() < 1e-9);
}

#[test]
fn test_macro_percentages_zero_total_is_all_zero() {
    let split = macro_percentages(0.0, 0.0, 0.0);
    assert!((split.protein_percent).abs() < f64::EPSILON);
    assert!((split.carbs_percent).abs() < f64::EPSILON);
    assert!((split.fat_percent).abs() < f64::EPSILON);
}

// ============================================================================
// COMPLETE DAILY NEEDS DERIVATION
// ============================================================================

#[test]
fn test_calculate_daily_needs_end_to_end() {
    let config = NutritionConfig::global();
    let profile = BodyProfile {
        sex: Sex::Male,
        weight_kg: 75.0,
        height_cm: 180.0,
        age_years: 30,
        activity_level: ActivityLevel::Moderate,
        goal_type: GoalType::Lose,
        weekly_pace_kg: 0.5,
    };

    let needs = calculate_daily_needs(&profile, config).unwrap();

    // BMR 1730, TDEE 1730 * 1.55 = 2681.5 -> 2682, target 2682 - 550 = 2132
    assert!((needs.bmr - 1730.0).abs() < 1e-9);
    assert_eq!(needs.tdee, 2682);
    assert_eq!(needs.targets.calories, 2132);
    // Lose goal uses 2.0 g/kg protein
    assert_eq!(needs.targets.protein_g, 150);

    let split_total = needs.macro_percentages.protein_percent
        + needs.macro_percentages.carbs_percent
        + needs.macro_percentages.fat_percent;
    assert!((split_total - 100.0).abs() < 1e-6);
}

#[test]
fn test_calculate_daily_needs_rejects_invalid_profile() {
    let config = NutritionConfig::global();
    let profile = BodyProfile {
        sex: Sex::Female,
        weight_kg: -60.0,
        height_cm: 165.0,
        age_years: 25,
        activity_level: ActivityLevel::Light,
        goal_type: GoalType::Maintain,
        weekly_pace_kg: 0.5,
    };

    let err = calculate_daily_needs(&profile, config).unwrap_err();
    assert!(err.message.contains("weight_kg"));
}

// ============================================================================
// CONFIG DEFAULT TESTS
// ============================================================================

#[test]
fn test_config_defaults_reproduce_published_values() {
    let config = NutritionConfig::default();

    assert!((config.bmr.msj_weight_coef - 10.0).abs() < f64::EPSILON);
    assert!((config.bmr.msj_height_coef - 6.25).abs() < f64::EPSILON);
    assert!((config.bmr.msj_age_coef - (-5.0)).abs() < f64::EPSILON);
    assert!((config.bmr.msj_male_constant - 5.0).abs() < f64::EPSILON);
    assert!((config.bmr.msj_female_constant - (-161.0)).abs() < f64::EPSILON);

    assert!((config.activity_factors.sedentary - 1.2).abs() < f64::EPSILON);
    assert!((config.activity_factors.light - 1.375).abs() < f64::EPSILON);
    assert!((config.activity_factors.moderate - 1.55).abs() < f64::EPSILON);
    assert!((config.activity_factors.active - 1.725).abs() < f64::EPSILON);
    assert!((config.activity_factors.athlete - 1.9).abs() < f64::EPSILON);

    assert!((config.macronutrients.protein_maintain_g_per_kg - 1.4).abs() < f64::EPSILON);
    assert!((config.macronutrients.protein_active_goal_g_per_kg - 2.0).abs() < f64::EPSILON);
    assert!((config.macronutrients.fat_percent_of_calories - 0.28).abs() < f64::EPSILON);
}
