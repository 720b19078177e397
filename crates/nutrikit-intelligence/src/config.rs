// ABOUTME: Tunable nutrition coefficients with scientifically sourced defaults
// ABOUTME: BmrConfig, ActivityFactorsConfig, MacronutrientConfig and the global singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Contributors

//! Nutrition calculation configuration
//!
//! Formula coefficients and per-category factors used by the nutrition
//! calculator. Defaults reproduce the published values cited on each struct;
//! deployments that tune them (e.g. a different protein factor for a coached
//! population) construct their own [`NutritionConfig`] and pass it through.
//! Classification thresholds that are part of the algorithm contract live in
//! [`crate::physiological_constants`] instead.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Complete nutrition calculation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Macronutrient distribution factors
    pub macronutrients: MacronutrientConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for
/// resting energy expenditure. *American Journal of Clinical Nutrition*,
/// 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010).
/// Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub light: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderate: f64,
    /// Very active (6-7 days/week): 1.725
    pub active: f64,
    /// Athlete (hard training 2x/day): 1.9
    pub athlete: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            athlete: 1.9,
        }
    }
}

/// Macronutrient distribution configuration
///
/// References:
/// - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
/// - Fats: DRI (Dietary Reference Intakes)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Protein factor for maintenance (g/kg bodyweight): 1.4
    pub protein_maintain_g_per_kg: f64,
    /// Protein factor while losing or gaining (g/kg): 2.0
    pub protein_active_goal_g_per_kg: f64,
    /// Fat share of target calories: 0.28
    pub fat_percent_of_calories: f64,
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_maintain_g_per_kg: 1.4,
            protein_active_goal_g_per_kg: 2.0,
            fat_percent_of_calories: 0.28,
        }
    }
}

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

impl NutritionConfig {
    /// Get the global configuration instance with default values
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(Self::default)
    }
}
