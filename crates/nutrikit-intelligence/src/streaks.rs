// ABOUTME: Consecutive-day logging streak calculation over a trailing window
// ABOUTME: Walks backward from an injected today; today's absence is pending, not broken
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Contributors

//! Habit streak calculation
//!
//! The streak is the run of consecutive logged days ending at today, examined
//! over a fixed 7-day trailing window. Today is special: a user who has not
//! logged *yet* still has their streak; only a missing day strictly before
//! today breaks the run. Days before the window cannot extend a streak even
//! if they were logged.
//!
//! The current day is an injected parameter, never an ambient clock read, so
//! the calculation stays pure and deterministically testable.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::physiological_constants::habits::STREAK_WINDOW_DAYS;

/// Streak summary over the trailing window
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StreakState {
    /// Consecutive logged days ending at today (today's absence pending)
    pub streak: u32,
    /// Logged days anywhere inside the window, consecutive or not
    pub days_with_meals: u32,
}

/// Compute the logging streak ending at `today`
///
/// `days_with_meals` is the set of calendar days on which the user logged at
/// least one meal; dates outside the trailing window are ignored.
#[must_use]
pub fn logging_streak(days_with_meals: &HashSet<NaiveDate>, today: NaiveDate) -> StreakState {
    let window_day = |offset: u32| today.checked_sub_days(Days::new(u64::from(offset)));

    let active_days = (0..STREAK_WINDOW_DAYS)
        .filter_map(window_day)
        .filter(|day| days_with_meals.contains(day))
        .count();

    let mut streak = 0u32;
    for offset in 0..STREAK_WINDOW_DAYS {
        let Some(day) = window_day(offset) else {
            break;
        };
        if days_with_meals.contains(&day) {
            streak += 1;
        } else if offset > 0 {
            // A gap strictly before today ends the run; today itself is
            // merely pending.
            break;
        }
    }

    StreakState {
        streak,
        days_with_meals: u32::try_from(active_days).unwrap_or(u32::MAX),
    }
}
