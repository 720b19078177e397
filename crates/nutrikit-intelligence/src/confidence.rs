// ABOUTME: Meal-estimate confidence classification and rationale generation
// ABOUTME: Maps numeric confidence plus photo/description presence to level and reasons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Contributors

//! Confidence classification for meal nutrition estimates
//!
//! The upstream analysis step attaches a numeric confidence score to each
//! estimate. This module maps that score onto a qualitative level and builds
//! the short, prioritized rationale shown next to an estimate: the photo (or
//! its absence) is always the most relevant reason, recognizability the
//! least, and at most two reasons are surfaced.

use crate::physiological_constants::confidence::{
    HIGH_CONFIDENCE_THRESHOLD, MEDIUM_CONFIDENCE_THRESHOLD,
};
use serde::{Deserialize, Serialize};

/// Qualitative confidence level for a meal estimate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    /// Score at or above 0.8
    High,
    /// Score at or above 0.5
    Medium,
    /// Everything below
    Low,
}

/// Classify a numeric confidence score into a level
///
/// Band boundaries are inclusive on the lower end: exactly 0.8 is high,
/// exactly 0.5 is medium.
#[must_use]
pub fn classify(confidence: f64) -> ConfidenceLevel {
    if confidence >= HIGH_CONFIDENCE_THRESHOLD {
        ConfidenceLevel::High
    } else if confidence >= MEDIUM_CONFIDENCE_THRESHOLD {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// Build the prioritized rationale for an estimate's confidence
///
/// Fixed decision table, most relevant reason first:
/// 1. photo quality (clear photo / unclear photo / no photo at all),
/// 2. information richness (a description adds detail; neither photo nor
///    description leaves little to work from),
/// 3. how recognizable the foods were, banded like [`classify`].
///
/// At most two reasons are returned.
#[must_use]
pub fn explain(confidence: f64, has_photo: bool, has_description: bool) -> Vec<String> {
    let mut reasons = Vec::new();

    if has_photo {
        if confidence >= HIGH_CONFIDENCE_THRESHOLD {
            reasons.push("A clear photo made the meal easy to analyze".into());
        } else {
            reasons.push("The photo left parts of the meal hard to make out".into());
        }
    } else {
        reasons.push("No photo was provided, so the estimate relies on the description".into());
    }

    if has_description {
        reasons.push("The written description added useful detail".into());
    } else if !has_photo {
        reasons.push("Very little information was available for this meal".into());
    }

    match classify(confidence) {
        ConfidenceLevel::High => {
            reasons.push("The foods were easy to recognize".into());
        }
        ConfidenceLevel::Medium => {
            reasons.push("Some foods were only partially recognizable".into());
        }
        ConfidenceLevel::Low => {
            reasons.push("The foods were difficult to recognize".into());
        }
    }

    reasons.truncate(2);
    reasons
}
