// ABOUTME: Fixed nutrition-science constants and classification thresholds
// ABOUTME: Energy conversions, trend/coverage/confidence bands, streak window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Contributors

//! Nutrition constants based on established dietary science
//!
//! Values here are part of the algorithm contract rather than deployment
//! tuning; changing one changes what the engine's classifications mean.
//! Tunable formula coefficients live in [`crate::config`] instead.

/// Energy content conversions
pub mod energy {
    /// Energy equivalent of one kilogram of body mass (kcal)
    ///
    /// The classic 3500 kcal/lb rule of thumb, metric form. An approximation,
    /// not a guarantee of real-world weight change.
    /// Reference: Wishnofsky, M. (1958). Caloric equivalents of gained or
    /// lost weight. *American Journal of Clinical Nutrition*, 6(5), 542-546.
    pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;

    /// Days per week, for converting weekly pace into a daily energy delta
    pub const DAYS_PER_WEEK: f64 = 7.0;

    /// Atwater factor: energy per gram of protein (kcal)
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

    /// Atwater factor: energy per gram of carbohydrate (kcal)
    pub const KCAL_PER_G_CARBS: f64 = 4.0;

    /// Atwater factor: energy per gram of fat (kcal)
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Trend classification thresholds
pub mod trend {
    /// Relative change between series halves beyond which a trend is
    /// classified as up (above) or down (below the negation)
    pub const TREND_CHANGE_THRESHOLD: f64 = 0.05;

    /// Minimum points for a trend call; shorter series are always stable
    pub const MIN_TREND_POINTS: usize = 2;
}

/// Logged-day coverage bands
pub mod coverage {
    /// Coverage percentage at or above which data quality is high
    pub const HIGH_COVERAGE_PERCENT: u8 = 80;

    /// Coverage percentage at or above which data quality is medium
    pub const MEDIUM_COVERAGE_PERCENT: u8 = 50;
}

/// Meal-estimate confidence bands
///
/// Boundaries are inclusive on the lower end of each band.
pub mod confidence {
    /// Score at or above which an estimate is high confidence
    pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.8;

    /// Score at or above which an estimate is medium confidence
    pub const MEDIUM_CONFIDENCE_THRESHOLD: f64 = 0.5;
}

/// Habit streak parameters
pub mod habits {
    /// Trailing window examined by the streak calculation (days, today
    /// inclusive); days before the window cannot extend a streak
    pub const STREAK_WINDOW_DAYS: u32 = 7;
}
